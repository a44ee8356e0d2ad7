//! Configuration file for the `tetro` binary.
//!
//! The file is TOML. Every key is optional; a missing file is written out
//! with the defaults so players have something to edit.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Ticker;
use crate::term::BlockGeometry;
use crate::types::TICK_MS;

/// Environment variable that overrides the config path.
pub const CONFIG_ENV: &str = "TETRO_CONFIG";

// Used when the platform has no config directory.
const FALLBACK_PATH: &str = "config/tetro.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gravity period in milliseconds.
    pub tick_ms: u32,
    /// Fixed RNG seed. Derived from the clock when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Terminal columns per block.
    pub cell_width: u16,
    /// Terminal rows per block.
    pub cell_height: u16,
    pub log_file: PathBuf,
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: None,
            cell_width: 2,
            cell_height: 1,
            log_file: PathBuf::from("tetro.log"),
            log_level: "info".to_string(),
        }
    }
}

/// A value [`Config::normalize`] had to replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// `tick_ms = 0`, replaced by [`TICK_MS`].
    ZeroTick,
    /// A zero cell size, raised to 1. Holds the size as written.
    ZeroCellSize { width: u16, height: u16 },
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adjustment::ZeroTick => write!(f, "tick_ms = 0 is not allowed, using {TICK_MS}"),
            Adjustment::ZeroCellSize { width, height } => {
                write!(f, "cell size {width}x{height} raised to at least 1x1")
            }
        }
    }
}

impl Config {
    /// Replace values the game cannot run with and report each change.
    ///
    /// Loading never normalizes, so the caller can log the result once a
    /// logger is installed.
    pub fn normalize(&mut self) -> Vec<Adjustment> {
        let mut adjustments = Vec::new();
        if self.tick_ms == 0 {
            self.tick_ms = TICK_MS;
            adjustments.push(Adjustment::ZeroTick);
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            adjustments.push(Adjustment::ZeroCellSize {
                width: self.cell_width,
                height: self.cell_height,
            });
            self.cell_width = self.cell_width.max(1);
            self.cell_height = self.cell_height.max(1);
        }
        adjustments
    }

    pub fn geometry(&self) -> BlockGeometry {
        BlockGeometry::new(self.cell_width, self.cell_height)
    }

    pub fn ticker(&self) -> Ticker {
        Ticker::new(self.tick_ms)
    }
}

/// `$TETRO_CONFIG`, else the platform config dir, else `config/tetro.toml`.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("tetro").join("config.toml"),
        None => PathBuf::from(FALLBACK_PATH),
    }
}

/// Load from the default location.
pub fn load() -> Result<Config, ConfigError> {
    load_from_path(&config_path())
}

/// Load `path`, creating it with defaults if it does not exist.
///
/// The result is not normalized; see [`Config::normalize`].
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        let config = Config::default();
        save_to_path(&config, path)?;
        return Ok(config);
    }

    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let text = toml::to_string_pretty(config)?;
    fs::write(path, text)?;
    Ok(())
}
