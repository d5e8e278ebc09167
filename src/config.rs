use std::path::Path;

use tracing::warn;

use crate::ai::{OpponentKind, DEFAULT_DEPTH};
use crate::error::ConfigError;
use crate::game::Player;

/// Deepest search the configuration accepts.
pub const MAX_DEPTH: usize = 9;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies the minimax opponent looks ahead.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Who opens the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Computer,
    Random,
}

impl FirstPlayer {
    /// Resolve to a concrete player, flipping a coin for `Random`.
    pub fn pick<R: rand::Rng + ?Sized>(self, rng: &mut R) -> Player {
        match self {
            FirstPlayer::Human => Player::Human,
            FirstPlayer::Computer => Player::Computer,
            FirstPlayer::Random => {
                if rng.random_bool(0.5) {
                    Player::Human
                } else {
                    Player::Computer
                }
            }
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
    pub opponent: OpponentKind,
    /// Pause before the computer drops its piece.
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: FirstPlayer::Random,
            opponent: OpponentKind::Minimax,
            ai_delay_ms: 500,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be >= 1".into(),
            ));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }
        if self.game.ai_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "game.ai_delay_ms must be <= 10000".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
