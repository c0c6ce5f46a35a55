use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{Glyphs, Player};

/// Game setup options.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player making the first move.
    pub first_player: Player,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: Glyphs,
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
        let d = &self.display;
        let glyphs = [
            ("display.red", &d.red),
            ("display.yellow", &d.yellow),
            ("display.empty", &d.empty),
            ("display.win", &d.win),
            ("display.border", &d.border),
        ];
        for (name, glyph) in glyphs {
            if glyph.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }

        // The border may repeat a cell glyph; the cells themselves must be told apart.
        let cells = &glyphs[..4];
        for (i, (a_name, a)) in cells.iter().enumerate() {
            for (b_name, b) in &cells[i + 1..] {
                if a == b {
                    return Err(ConfigError::Validation(format!(
                        "{a_name} and {b_name} must differ"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
