//! Core Connect Four game logic: board, players, win/terminal detection and
//! the game state the driver mutates move by move.

mod board;
mod player;
pub mod rules;
mod state;

pub use board::{Board, Cell, Window, CENTER_COL, COLS, ROWS, WINDOW_LENGTH};
pub use player::Player;
pub use rules::{has_four_in_a_row, is_terminal, GameOutcome};
pub use state::GameState;
