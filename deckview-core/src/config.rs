//! Viewer configuration, read from TOML.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Presenter tuning. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Horizontal drag distance, in terminal columns, that counts as a swipe.
    pub swipe_threshold: f64,
    /// Delay before the slide after the current one is prepared.
    pub preload_delay_ms: u64,
    /// Quiet period after the last resize before caches are rebuilt.
    pub resize_debounce_ms: u64,
    /// Delay before the first slide is announced at startup.
    pub initial_announce_delay_ms: u64,
    /// How long transient status messages stay visible.
    pub status_ttl_ms: u64,
    /// Event loop poll interval.
    pub tick_ms: u64,
    /// Show speaker notes under the slide body.
    pub show_notes: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 6.0,
            preload_delay_ms: 100,
            resize_debounce_ms: 250,
            initial_announce_delay_ms: 500,
            status_ttl_ms: 3_000,
            tick_ms: 50,
            show_notes: false,
        }
    }
}

impl ViewerConfig {
    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(DeckError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml_str(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, DeckError> {
        let config: ViewerConfig = toml::from_str(content).map_err(|source| DeckError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        if self.tick_ms == 0 {
            return Err(DeckError::Config("tick_ms must be greater than zero".into()));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(DeckError::Config(format!(
                "swipe_threshold must be a non-negative number, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }

    pub fn preload_delay(&self) -> Duration {
        Duration::from_millis(self.preload_delay_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn initial_announce_delay(&self) -> Duration {
        Duration::from_millis(self.initial_announce_delay_ms)
    }

    pub fn status_ttl(&self) -> Duration {
        Duration::from_millis(self.status_ttl_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
