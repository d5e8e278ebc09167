use crate::game::GameState;

use super::agent::Agent;
use super::evaluate::score_position;

/// Score every move assumed to start below any real position score.
const FLOOR_SCORE: i64 = -10_000;

/// One-ply lookahead: play the move whose resulting position scores best for
/// the side to move. Ties keep the lowest column.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let player = state.current_player();
        let board = state.board();
        let legal = state.legal_actions();

        let mut best_col = legal.first().copied()?;
        let mut best_score = FLOOR_SCORE;
        for &col in &legal {
            let Some(row) = board.next_open_row(col) else {
                continue;
            };
            let mut child = *board;
            child.drop_piece(row, col, player.to_cell());
            let score = score_position(&child, player);
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }

        Some(best_col)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Player, CENTER_COL};

    #[test]
    fn opens_in_the_center() {
        let mut agent = GreedyAgent::new();
        let state = GameState::initial(Player::Human);
        assert_eq!(agent.select_action(&state), Some(CENTER_COL));
    }

    #[test]
    fn completes_four_for_either_side() {
        let board = Board::from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX...O",
        ]);
        let mut agent = GreedyAgent::new();
        let state = GameState::from_board(board, Player::Computer);
        assert_eq!(agent.select_action(&state), Some(3));
    }

    #[test]
    fn scores_from_the_mover_side() {
        let board = Board::from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "OOO...X",
        ]);
        let mut agent = GreedyAgent::new();
        let state = GameState::from_board(board, Player::Human);
        assert_eq!(agent.select_action(&state), Some(3));
    }

    #[test]
    fn returns_none_after_game_over() {
        let board = crate::game::rules::tests::drawn_board();
        let mut agent = GreedyAgent::new();
        let state = GameState::from_board(board, Player::Human);
        assert_eq!(agent.select_action(&state), None);
        assert_eq!(agent.name(), "Greedy");
    }
}
