//! Error types for FMD Core
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! The query and aggregation paths never fail; errors only arise at the
//! snapshot loading boundary.

use snafu::Snafu;

/// Main error type for the engine
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid topology or equipment data
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (snapshot file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
