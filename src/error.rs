//! Error types for pagenav
//!
//! Navigation commands never fail: boundary conditions are handled by
//! clamping, so the only explicit failure in the engine is a pagination mode
//! value outside the enumerated set.

use thiserror::Error;

/// The main error type for pagenav
#[derive(Error, Debug)]
pub enum Error {
    /// A mode string outside `none` / `client_side` / `server_side`
    #[error("Unknown pagination mode: '{mode}'")]
    UnknownMode {
        /// The rejected mode value
        mode: String,
    },

    /// A mode or commit payload that failed JSON deserialization
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown-mode error
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Self::UnknownMode { mode: mode.into() }
    }
}

/// Result type alias for pagenav
pub type Result<T> = std::result::Result<T, Error>;
