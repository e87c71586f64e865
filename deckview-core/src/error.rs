//! Error types for deck loading and configuration.
//!
//! Navigation never produces an error: out-of-range jumps are ignored.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("deck has no slides")]
    NoSlides,

    #[error("invalid config: {0}")]
    Config(String),
}
