//! Error types for helpdoc with categorization:
//!
//! - **Validation errors**: configuration values (exit code 1)
//! - **System errors**: IO, writing, rendering (exit code 2)
//! - **Not found**: unknown module, missing presentation assets (exit code 3)
//! - **Invalid state**: metadata that does not match the descriptor contract (exit code 4)

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Top-level error type for every helpdoc operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// One or more required presentation assets are absent.
    #[error("missing required asset(s): {}", .0.join(", "))]
    MissingDependency(Vec<String>),

    /// The metadata source could not resolve the module name.
    #[error("module '{0}' not found")]
    ModuleNotFound(String),

    /// The metadata source returned something other than a module descriptor.
    #[error("unexpected metadata shape for module '{module}': {reason}")]
    UnexpectedMetadataShape { module: String, reason: String },

    /// The destination could not be written.
    #[error("failed to write '{}': {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },

    /// A configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO failure outside of the final write.
    #[error("IO error: {0}")]
    Io(String),

    /// The document template failed to render.
    #[error("failed to render document: {0}")]
    Render(String),
}

impl Error {
    pub fn unexpected_shape(module: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnexpectedMetadataShape {
            module: module.into(),
            reason: reason.into(),
        }
    }

    pub fn write_failure(path: &Path, reason: impl ToString) -> Self {
        Self::WriteFailure {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Returns the process exit code for this error.
    ///
    /// Exit code scheme:
    /// - 1: User error (bad configuration)
    /// - 2: System error (IO, write, render)
    /// - 3: Not found (module, presentation assets)
    /// - 4: Invalid state (malformed metadata)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig(_) => 1,
            Self::WriteFailure { .. } | Self::Io(_) | Self::Render(_) => 2,
            Self::ModuleNotFound(_) | Self::MissingDependency(_) => 3,
            Self::UnexpectedMetadataShape { .. } => 4,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<askama::Error> for Error {
    fn from(err: askama::Error) -> Self {
        Self::Render(err.to_string())
    }
}

/// Result type alias for helpdoc operations.
pub type Result<T> = std::result::Result<T, Error>;
