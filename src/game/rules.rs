//! Win and terminal detection over a whole board.

use super::board::Board;
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// True if `player` owns four consecutive cells horizontally, vertically or
/// along either diagonal.
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    board
        .windows()
        .any(|window| window.iter().all(|&c| c == cell))
}

/// The game is over once either side has four in a row or no column is open.
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Player::Human)
        || has_four_in_a_row(board, Player::Computer)
        || board.valid_columns().is_empty()
}

/// Classify a board. `None` while the game is still running.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if has_four_in_a_row(board, Player::Computer) {
        Some(GameOutcome::Winner(Player::Computer))
    } else if has_four_in_a_row(board, Player::Human) {
        Some(GameOutcome::Winner(Player::Human))
    } else if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}
