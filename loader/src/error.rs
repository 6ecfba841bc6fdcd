//! Error types for the `jarstrap` CLI.
//!
//! Each variant carries enough context to tell the operator what to change.

use jarstrap::error::{BootstrapError, ManifestError};
use thiserror::Error;

/// Errors that stop the CLI.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The manifest could not be loaded.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// At least one declared artifact failed to resolve.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// A `-D` definition was not of the form `key=value`.
    #[error("invalid property definition \"{definition}\"; expected KEY=VALUE")]
    InvalidProperty {
        /// The rejected definition.
        definition: String,
    },

    /// No local repository directory was given and none could be derived.
    #[error("could not determine a local repository directory; pass --cache-dir")]
    NoRepositoryDir,

    /// A resolved path contains the platform path-list separator.
    #[error("classpath entry cannot be joined: {0}")]
    Classpath(#[from] std::env::JoinPathsError),

    /// Failed to write output.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`LoaderError`].
pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_property_shows_expected_form() {
        let err = LoaderError::InvalidProperty {
            definition: "novalue".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("novalue"));
        assert!(msg.contains("KEY=VALUE"));
    }

    #[test]
    fn no_repository_dir_suggests_flag() {
        assert!(LoaderError::NoRepositoryDir.to_string().contains("--cache-dir"));
    }

    #[test]
    fn write_failed_preserves_source() {
        let err = LoaderError::WriteFailed {
            source: std::io::Error::other("broken pipe"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
