use std::net::SocketAddr;

use serde::Deserialize;
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{Difficulty, Mark, ResetOptions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[value(name = "two_player")]
    TwoPlayer,
    #[default]
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub mode: GameMode,
    pub default_difficulty: Difficulty,
    pub default_human_symbol: Mark,
    /// Fixed seed for the bot's randomness; random when absent.
    pub rng_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            mode: GameMode::Bot,
            default_difficulty: Difficulty::Medium,
            default_human_symbol: Mark::X,
            rng_seed: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.bind_address
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind_address, e))
    }

    pub fn reset_defaults(&self) -> ResetOptions {
        ResetOptions::new(self.default_difficulty, self.default_human_symbol)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.socket_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.reset_defaults(), ResetOptions::new(Difficulty::Medium, Mark::X));
    }

    #[test]
    fn test_yaml_overrides() {
        let config: ServerConfig = parse_yaml(
            "bind_address: 127.0.0.1:8080\nmode: two_player\ndefault_difficulty: hard\ndefault_human_symbol: O\nrng_seed: 5\n",
        );
        assert_eq!(config.mode, GameMode::TwoPlayer);
        assert_eq!(config.default_difficulty, Difficulty::Hard);
        assert_eq!(config.default_human_symbol, Mark::O);
        assert_eq!(config.rng_seed, Some(5));
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_bad_bind_address_fails_validation() {
        let config = ServerConfig {
            bind_address: "not-an-address".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    fn parse_yaml(content: &str) -> ServerConfig {
        use tictactoe_common::config::{ConfigSerializer, YamlConfigSerializer};
        YamlConfigSerializer::new().deserialize(content).unwrap()
    }
}
