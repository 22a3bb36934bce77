//! Experiment configuration for frontier
//!
//! Read from `--config <path>`, or `./frontier.toml` when present. Every
//! key is optional; explicit CLI flags take precedence over file values.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FrontierError, Result};

pub use types::{BfsConfig, ExperimentConfig, UcsConfig};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "frontier.toml";

impl ExperimentConfig {
    /// Load the explicit config file, or the default one if it exists.
    ///
    /// A missing explicit file is an error; a missing default file yields
    /// the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        if !path.exists() {
            if explicit {
                return Err(FrontierError::InvalidConfig {
                    path,
                    reason: "file does not exist".to_string(),
                });
            }
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(&path)?;
        Self::parse(&content).map_err(|reason| FrontierError::InvalidConfig { path, reason })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.message().to_string())?;
        if config.bfs.nodes < 2 {
            return Err(format!(
                "bfs.nodes must be at least 2, got {}",
                config.bfs.nodes
            ));
        }
        Ok(config)
    }
}
