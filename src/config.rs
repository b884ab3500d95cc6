//! Game configuration loaded from TOML.

use crate::games::connect_four::Sign;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Session-wide settings.
///
/// ```toml
/// first_sign = "o"
/// second_sign = "*"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Token glyph of the player who moves first.
    #[serde(default = "default_first_sign")]
    first_sign: Sign,

    /// Token glyph of the other player.
    #[serde(default = "default_second_sign")]
    second_sign: Sign,
}

fn default_first_sign() -> Sign {
    Sign::FIRST
}

fn default_second_sign() -> Sign {
    Sign::SECOND
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_sign: default_first_sign(),
            second_sign: default_second_sign(),
        }
    }
}

impl GameConfig {
    /// Creates a validated configuration with the given signs.
    #[instrument]
    pub fn new(first_sign: Sign, second_sign: Sign) -> Result<Self, ConfigError> {
        let config = Self {
            first_sign,
            second_sign,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(first = %config.first_sign, second = %config.second_sign, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the two signs can be told apart on the board.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for sign in [self.first_sign, self.second_sign] {
            if sign.glyph().is_whitespace() || sign.glyph().is_control() {
                return Err(ConfigError::new(format!(
                    "Sign {:?} is not visible",
                    sign.glyph()
                )));
            }
            if matches!(sign.glyph(), '║' | '═' | '╚' | '╩' | '╝') {
                return Err(ConfigError::new(format!(
                    "Sign {:?} is used by the board frame",
                    sign.glyph()
                )));
            }
        }
        if self.first_sign == self.second_sign {
            return Err(ConfigError::new(format!(
                "Both players use sign {:?}",
                self.first_sign.glyph()
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
