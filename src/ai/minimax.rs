//! Depth-limited minimax with alpha-beta pruning.
//!
//! The computer is always the maximizing side. Leaves are scored from the
//! computer's point of view even on minimizing plies.

use std::time::Instant;

use tracing::debug;

use crate::game::{has_four_in_a_row, is_terminal, Board, GameState, Player};

use super::agent::Agent;
use super::evaluate::score_position;

/// Score of a position where the computer has four in a row.
pub const WIN_SCORE: i64 = 1_000_000_000_000;
/// Score of a position where the human has four in a row.
pub const LOSS_SCORE: i64 = -10_000_000_000_000;
/// Score of a full board with no winner.
pub const DRAW_SCORE: i64 = 0;

/// Search depth the game uses unless configured otherwise.
pub const DEFAULT_DEPTH: usize = 4;

/// Chosen column and its backed-up score. `column` is `None` at leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,
}

/// Search from the computer's side with an open window.
pub fn search(board: &Board, depth: usize) -> SearchResult {
    best_move(board, depth, i64::MIN, i64::MAX, true)
}

/// Minimax value of `board` with `maximizing` telling whether the computer
/// is to move.
pub fn best_move(
    board: &Board,
    depth: usize,
    alpha: i64,
    beta: i64,
    maximizing: bool,
) -> SearchResult {
    best_move_with_stats(board, depth, alpha, beta, maximizing).0
}

/// [`best_move`] that also reports how many positions were visited.
pub fn best_move_with_stats(
    board: &Board,
    depth: usize,
    alpha: i64,
    beta: i64,
    maximizing: bool,
) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    let result = minimax(board, depth, alpha, beta, maximizing, &mut stats);
    (result, stats)
}

fn leaf_score(board: &Board) -> i64 {
    if has_four_in_a_row(board, Player::Computer) {
        WIN_SCORE
    } else if has_four_in_a_row(board, Player::Human) {
        LOSS_SCORE
    } else {
        DRAW_SCORE
    }
}

fn minimax(
    board: &Board,
    depth: usize,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    if is_terminal(board) {
        return SearchResult {
            column: None,
            score: leaf_score(board),
        };
    }
    if depth == 0 {
        return SearchResult {
            column: None,
            score: score_position(board, Player::Computer),
        };
    }

    let valid = board.valid_columns();
    let (mover, mut value) = if maximizing {
        (Player::Computer, i64::MIN)
    } else {
        (Player::Human, i64::MAX)
    };
    let mut column = valid.first().copied();

    for &col in &valid {
        let Some(row) = board.next_open_row(col) else {
            continue;
        };
        let mut child = *board;
        child.drop_piece(row, col, mover.to_cell());
        let score = minimax(&child, depth - 1, alpha, beta, !maximizing, stats).score;

        if maximizing {
            if score > value {
                value = score;
                column = Some(col);
            }
            alpha = alpha.max(value);
        } else {
            if score < value {
                value = score;
                column = Some(col);
            }
            beta = beta.min(value);
        }
        if alpha >= beta {
            break;
        }
    }

    SearchResult {
        column,
        score: value,
    }
}

/// Agent that answers with the minimax choice for the computer side.
pub struct MinimaxAgent {
    depth: usize,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent { depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        let started = Instant::now();
        let (result, stats) =
            best_move_with_stats(state.board(), self.depth, i64::MIN, i64::MAX, true);
        debug!(
            column = ?result.column,
            score = result.score,
            nodes = stats.nodes,
            depth = self.depth,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "minimax search finished"
        );
        result.column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
