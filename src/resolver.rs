//! The artifact resolver seam.
//!
//! Fetching, caching and exposing artifacts is the resolver's job; the
//! dispatcher only submits requests through [`ArtifactResolver`]. Tests swap in
//! doubles, and the `jarstrap-loader` crate supplies an HTTP implementation.

use crate::coordinate::ArtifactCoordinate;
use crate::error::ResolveError;
use crate::repository::RepositoryDescriptor;
use crate::scope::DependencyScope;
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Arc;

/// A request to make one artifact available from one repository.
///
/// All requests of a bootstrap run share the same [`RepositoryDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    coordinate: ArtifactCoordinate,
    scope: DependencyScope,
    repository: Arc<RepositoryDescriptor>,
}

impl ResolutionRequest {
    /// Bind a coordinate and scope to a repository.
    #[must_use]
    pub const fn new(
        coordinate: ArtifactCoordinate,
        scope: DependencyScope,
        repository: Arc<RepositoryDescriptor>,
    ) -> Self {
        Self {
            coordinate,
            scope,
            repository,
        }
    }

    /// The requested artifact.
    #[must_use]
    pub const fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    /// The requested scope.
    #[must_use]
    pub const fn scope(&self) -> DependencyScope {
        self.scope
    }

    /// The repository to resolve against.
    #[must_use]
    pub fn repository(&self) -> &RepositoryDescriptor {
        &self.repository
    }

    /// Shared handle to the repository, for identity checks.
    #[must_use]
    pub const fn repository_handle(&self) -> &Arc<RepositoryDescriptor> {
        &self.repository
    }
}

/// A successfully resolved artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    coordinate: ArtifactCoordinate,
    scope: DependencyScope,
    path: Utf8PathBuf,
    fetched: bool,
}

impl ResolvedArtifact {
    /// Record that `request` resolved to the local file at `path`.
    ///
    /// `fetched` is `true` when the file was transferred during this request
    /// and `false` when it was already available locally.
    #[must_use]
    pub fn new(request: &ResolutionRequest, path: Utf8PathBuf, fetched: bool) -> Self {
        Self {
            coordinate: request.coordinate.clone(),
            scope: request.scope,
            path,
            fetched,
        }
    }

    /// The resolved artifact.
    #[must_use]
    pub const fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    /// The scope it was resolved in.
    #[must_use]
    pub const fn scope(&self) -> DependencyScope {
        self.scope
    }

    /// Local file that joins the code-search path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether the artifact was transferred rather than found locally.
    #[must_use]
    pub const fn fetched(&self) -> bool {
        self.fetched
    }
}

/// Turns a resolution request into a locally available artifact.
///
/// Implementations own their own fetch, cache and error policy. Submitting
/// the same request twice must be safe; implementations are expected to
/// serve repeats without a second transfer.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactResolver {
    /// Resolve one request.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] when the artifact cannot be made available.
    fn resolve(&self, request: &ResolutionRequest) -> Result<ResolvedArtifact, ResolveError>;
}
