use crate::game::GameState;

use super::greedy::GreedyAgent;
use super::minimax::MinimaxAgent;
use super::random::RandomAgent;

/// Anything that can pick a column for the side to move.
pub trait Agent {
    /// Select a column given the current game state. `None` once the game is
    /// over and no column can be played.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Which agent plays the computer's side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Minimax,
    Greedy,
    Random,
}

impl OpponentKind {
    /// Build the agent; `depth` only matters for minimax.
    pub fn build(self, depth: usize) -> Box<dyn Agent> {
        match self {
            OpponentKind::Minimax => Box::new(MinimaxAgent::new(depth)),
            OpponentKind::Greedy => Box::new(GreedyAgent::new()),
            OpponentKind::Random => Box::new(RandomAgent::new()),
        }
    }
}
