use super::rules::{self, GameOutcome};
use super::{Board, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state with `first` to move
    pub fn initial(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: None,
        }
    }

    /// Wrap an existing position, classifying it first.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        GameState {
            board,
            current_player: to_move,
            outcome: rules::outcome(&board),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place, returning the row the piece landed in.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let row = self.board.play(column, mover.to_cell())?;

        if rules::has_four_in_a_row(&self.board, mover) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = mover.other();
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial(Player::Human);
        assert_eq!(state.current_player(), Player::Human);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial(Player::Computer);
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Human);
        assert_eq!(new_state.board().get(0, 3), Cell::Computer);
        // The original state is untouched.
        assert_eq!(state.board().get(0, 3), Cell::Empty);
    }

    #[test]
    fn test_apply_move_mut_returns_row() {
        let mut state = GameState::initial(Player::Human);
        assert_eq!(state.apply_move_mut(2), Ok(0));
        assert_eq!(state.apply_move_mut(2), Ok(1));
        assert_eq!(state.board().get(1, 2), Cell::Computer);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial(Player::Human);

        // Human builds the bottom row, computer stacks on top of it
        for col in 0..4 {
            state = state.apply_move(col).unwrap();
            if col < 3 {
                state = state.apply_move(col).unwrap();
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Human)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::initial(Player::Human);
        for _ in 0..6 {
            state.apply_move_mut(0).unwrap();
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidColumn(9)));
        assert!(!state.legal_actions().contains(&0));
    }

    #[test]
    fn test_from_board_classifies_draw() {
        let board = crate::game::rules::tests::drawn_board();
        let state = GameState::from_board(board, Player::Human);
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert!(state.legal_actions().is_empty());
    }
}
