//! # Minimax Connect Four
//!
//! Connect Four against a computer opponent that searches a fixed number of
//! plies with minimax and alpha-beta pruning. Features a terminal UI built
//! with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, win detection, game state
//! - [`ai`]: Agent trait, minimax search, heuristic evaluator, simple agents
//! - [`ui`]: Terminal UI: game loop and rendering
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`logging`]: `tracing` subscriber setup

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
