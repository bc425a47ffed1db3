use std::path::Path;

use rand::Rng;

use crate::ai::eval::{DEFAULT_THREAT_WEIGHT, HEURISTIC_LIMIT};
use crate::ai::search::{ALPHA_BETA_DEPTH, MINIMAX_DEPTH};
use crate::ai::AgentKind;
use crate::error::ConfigError;
use crate::game::Player;

/// Search depth caps and evaluator tuning.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the first move by the minimax agent
    pub minimax_depth: usize,
    /// Plies searched below the first move by the alpha-beta agent
    pub alpha_beta_depth: usize,
    /// Points per open three-of-four pattern
    pub threat_weight: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            minimax_depth: MINIMAX_DEPTH,
            alpha_beta_depth: ALPHA_BETA_DEPTH,
            threat_weight: DEFAULT_THREAT_WEIGHT,
        }
    }
}

/// Who moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Red,
    Yellow,
    Random,
}

impl FirstPlayer {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Player {
        match self {
            FirstPlayer::Red => Player::Red,
            FirstPlayer::Yellow => Player::Yellow,
            FirstPlayer::Random => {
                if rng.random_bool(0.5) {
                    Player::Red
                } else {
                    Player::Yellow
                }
            }
        }
    }
}

/// Seating and randomness for a game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub red: AgentKind,
    pub yellow: AgentKind,
    pub first_player: FirstPlayer,
    /// Seed for the random agent and the first-player draw
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            red: AgentKind::Human,
            yellow: AgentKind::AlphaBeta,
            first_player: FirstPlayer::Random,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
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
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.minimax_depth == 0 {
            return Err(ConfigError::Validation(
                "search.minimax_depth must be >= 1".into(),
            ));
        }
        if self.search.alpha_beta_depth == 0 {
            return Err(ConfigError::Validation(
                "search.alpha_beta_depth must be >= 1".into(),
            ));
        }
        if !(0..=HEURISTIC_LIMIT).contains(&self.search.threat_weight) {
            return Err(ConfigError::Validation(format!(
                "search.threat_weight must be in 0..={HEURISTIC_LIMIT}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.search.minimax_depth, 4);
        assert_eq!(config.search.alpha_beta_depth, 6);
        assert_eq!(config.search.threat_weight, 5);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
minimax_depth = 3
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.minimax_depth, 3);
        // Other fields should be defaults
        assert_eq!(config.search.alpha_beta_depth, 6);
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_game_section_parses_kinds() {
        let toml_str = r#"
[game]
red = "minimax"
yellow = "random"
first_player = "yellow"
seed = 17
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.red, AgentKind::Minimax);
        assert_eq!(config.game.yellow, AgentKind::Random);
        assert_eq!(config.game.first_player, FirstPlayer::Yellow);
        assert_eq!(config.game.seed, Some(17));
    }

    #[test]
    fn test_unknown_agent_kind_is_rejected() {
        let toml_str = r#"
[game]
red = "oracle"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_depths() {
        let mut config = AppConfig::default();
        config.search.minimax_depth = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.search.alpha_beta_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_threat_weight() {
        let mut config = AppConfig::default();
        config.search.threat_weight = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_threat_weight() {
        let mut config = AppConfig::default();
        config.search.threat_weight = HEURISTIC_LIMIT;
        config.validate().expect("limit itself is allowed");

        config.search.threat_weight = HEURISTIC_LIMIT + 1;
        assert!(config.validate().is_err());

        config.search.threat_weight = i32::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[search]
alpha_beta_depth = 5
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.search.alpha_beta_depth, 5);
        assert_eq!(config.search.minimax_depth, 4);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[search]\nminimax_depth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_first_player_resolve() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(FirstPlayer::Red.resolve(&mut rng), Player::Red);
        assert_eq!(FirstPlayer::Yellow.resolve(&mut rng), Player::Yellow);

        let draws: Vec<Player> = (0..64).map(|_| FirstPlayer::Random.resolve(&mut rng)).collect();
        assert!(draws.contains(&Player::Red));
        assert!(draws.contains(&Player::Yellow));
    }
}
