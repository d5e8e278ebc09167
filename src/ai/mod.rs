//! Computer opponents: the minimax search engine, its static evaluator, and
//! two simpler agents behind a common [`Agent`] trait.

mod agent;
pub mod evaluate;
mod greedy;
pub mod minimax;
mod random;

pub use agent::{Agent, OpponentKind};
pub use evaluate::{score_position, score_window};
pub use greedy::GreedyAgent;
pub use minimax::{
    best_move, search, MinimaxAgent, SearchResult, SearchStats, DEFAULT_DEPTH, DRAW_SCORE,
    LOSS_SCORE, WIN_SCORE,
};
pub use random::RandomAgent;
