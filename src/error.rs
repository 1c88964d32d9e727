//! Crate-level error types.

use std::fmt;

/// Errors produced by the toque crate.
#[derive(Debug)]
pub enum ToqueError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background loader thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The showpiece model could not be loaded or decoded.
    AssetLoad(String),
    /// A replay script could not be parsed.
    Script(String),
}

impl fmt::Display for ToqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::AssetLoad(msg) => write!(f, "asset load error: {msg}"),
            Self::Script(msg) => write!(f, "replay script error: {msg}"),
        }
    }
}

impl std::error::Error for ToqueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ToqueError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
