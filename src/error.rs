//! Error types for bootstrap resolution.
//!
//! Mirror selection never fails, so the taxonomy here covers the three places
//! that can: parsing declarations, a single resolver request, and the overall
//! bootstrap outcome handed back to the host.

use crate::coordinate::ArtifactCoordinate;
use crate::scope::DependencyScope;
use camino::Utf8PathBuf;
use std::fmt;
use thiserror::Error;

/// A coordinate string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// The string did not split into 3, 4 or 5 colon-separated parts.
    #[error("coordinate \"{input}\" has {found} segments; expected group:name[:extension[:classifier]]:version")]
    WrongArity {
        /// The rejected input.
        input: String,
        /// Number of segments found.
        found: usize,
    },

    /// One of the segments was empty.
    #[error("coordinate \"{input}\" has an empty {segment}")]
    EmptySegment {
        /// The rejected input.
        input: String,
        /// Which segment was empty.
        segment: &'static str,
    },

    /// A segment contained whitespace or a path separator.
    #[error("coordinate \"{input}\" contains invalid character '{character}'")]
    InvalidCharacter {
        /// The rejected input.
        input: String,
        /// The offending character.
        character: char,
    },

    /// A segment, or a dot-separated part of the group, is `.` or `..`, or
    /// the group has an empty part.
    #[error("coordinate \"{input}\" has a {segment} that is not a plain directory name")]
    RelativeSegment {
        /// The rejected input.
        input: String,
        /// Which segment was rejected.
        segment: &'static str,
    },
}

/// A scope name was not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dependency scope \"{0}\"")]
pub struct UnknownScope(pub String);

/// The bootstrap manifest could not be loaded.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest {path}")]
    Read {
        /// Location of the manifest.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or does not match the schema.
    #[error("invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A single resolution request failed.
///
/// Resolvers report failures through this type; the dispatcher records them
/// without retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The repository uses a layout the resolver cannot address.
    #[error("repository {repository} uses unsupported layout \"{layout}\"")]
    UnsupportedLayout {
        /// Repository identifier.
        repository: String,
        /// The unsupported layout name.
        layout: String,
    },

    /// The repository does not carry the artifact.
    #[error("artifact not found at {url}")]
    NotFound {
        /// The URL that was requested.
        url: String,
    },

    /// The transfer failed for a reason other than absence.
    #[error("transfer from {url} failed: {reason}")]
    Transfer {
        /// The URL that was requested.
        url: String,
        /// Human-readable description of the failure.
        reason: String,
    },

    /// The local repository could not be written.
    #[error("local repository error at {path}: {reason}")]
    LocalRepository {
        /// Path that could not be written.
        path: Utf8PathBuf,
        /// Human-readable description of the failure.
        reason: String,
    },
}

/// One declared artifact that did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedArtifact {
    /// The artifact that failed.
    pub coordinate: ArtifactCoordinate,
    /// The scope it was requested with.
    pub scope: DependencyScope,
    /// Why it failed.
    pub error: ResolveError,
}

impl fmt::Display for UnresolvedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.coordinate, self.scope, self.error)
    }
}

/// Failure of the bootstrap step as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// At least one declared artifact failed to resolve.
    ///
    /// The declared artifacts are hard prerequisites, so any failure makes the
    /// host unusable.
    #[error("{} of {requested} declared artifacts failed to resolve: {}", .failures.len(), summarise(.failures))]
    Unresolved {
        /// Number of requests that were submitted.
        requested: usize,
        /// Every failed request, in declaration order.
        failures: Vec<UnresolvedArtifact>,
    },
}

fn summarise(failures: &[UnresolvedArtifact]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias using [`BootstrapError`].
pub type Result<T> = std::result::Result<T, BootstrapError>;
