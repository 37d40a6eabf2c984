//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: background error (frame evaluation, bad dimensions)
//! - 11: I/O error (snapshot write)
//! - 12: input error (bad size, bad pixel ratio)
//! - 13: serialization error

use std::fmt;
use wavelines_core::BackgroundError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A frame evaluation error (bad dimensions, failed conversion).
    Background(BackgroundError),
    /// An I/O error (snapshot write).
    Io(String),
    /// A user input error (non-positive size or pixel ratio).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Background(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Background(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<BackgroundError> for CliError {
    fn from(e: BackgroundError) -> Self {
        match e {
            BackgroundError::Io(msg) => CliError::Io(msg),
            other => CliError::Background(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
