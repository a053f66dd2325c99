// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optional `config.toml` in the state directory.
//!
//! ```toml
//! strict_windows = true     # reject pickup >= dropoff
//! checkpoint_every = 1000   # commits between snapshots, 0 = never
//! log_level = "info"        # used when FJ_LOG is unset
//! ```

use fj_engine::SchedulerOptions;
use fj_storage::StoreConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("invalid config {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub strict_windows: bool,
    pub checkpoint_every: u64,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_windows: true,
            checkpoint_every: StoreConfig::default().checkpoint_every,
            log_level: None,
        }
    }
}

impl Config {
    /// Load `<state_dir>/config.toml`; a missing file yields the defaults.
    pub fn load(state_dir: &Path) -> Result<Self, ConfigError> {
        let path = state_dir.join(CONFIG_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Read(path, e)),
        };
        toml::from_str(&text).map_err(|e| ConfigError::Parse(path, e))
    }

    pub fn store(&self) -> StoreConfig {
        StoreConfig { checkpoint_every: self.checkpoint_every }
    }

    pub fn scheduler(&self) -> SchedulerOptions {
        SchedulerOptions { strict_windows: self.strict_windows, ..SchedulerOptions::default() }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
