//! Terminal UI: the interactive game against the computer.

mod app;
mod game_view;

pub use app::App;
