//! Runtime dependency bootstrap for hosts that need library artifacts on their
//! code-search path before any of their own code runs.
//!
//! The crate declares which artifacts are required, decides which repository
//! mirror to fetch them from, and submits one resolution request per artifact
//! to an [`ArtifactResolver`](resolver::ArtifactResolver). Fetching and caching
//! live behind that trait; `jarstrap-loader` provides an HTTP implementation.
//!
//! # Modules
//!
//! - [`classpath`] - Ordered set of resolved artifact files
//! - [`config`] - `jarstrap.toml` manifest loading
//! - [`coordinate`] - Maven artifact coordinates
//! - [`declaration`] - Declared artifacts and the built-in list
//! - [`dispatcher`] - Mirror-bound request fan-out and reporting
//! - [`error`] - Error types
//! - [`mirror`] - Repository mirror selection
//! - [`properties`] - Process-level configuration properties
//! - [`repository`] - Remote repository descriptors
//! - [`resolver`] - The resolver seam
//! - [`scope`] - Dependency scopes

pub mod classpath;
pub mod config;
pub mod coordinate;
pub mod declaration;
pub mod dispatcher;
pub mod error;
pub mod mirror;
pub mod properties;
pub mod repository;
pub mod resolver;
pub mod scope;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use classpath::Classpath;
pub use coordinate::ArtifactCoordinate;
pub use declaration::{ArtifactDeclaration, ArtifactDeclarations};
pub use dispatcher::{BootstrapDispatcher, BootstrapReport, ResolutionPlan};
pub use error::{BootstrapError, ResolveError};
pub use mirror::{MirrorSelection, MirrorSelector};
pub use properties::ProcessProperties;
pub use repository::RepositoryDescriptor;
pub use resolver::{ArtifactResolver, ResolutionRequest, ResolvedArtifact};
pub use scope::DependencyScope;

/// Resolve the built-in declarations against the process environment.
///
/// This is the host's startup hook: it either yields the classpath to load or
/// an error that must abort startup.
///
/// # Errors
///
/// Returns [`BootstrapError::Unresolved`] if any declared artifact failed.
pub fn bootstrap(resolver: &dyn ArtifactResolver) -> error::Result<Classpath> {
    BootstrapDispatcher::default()
        .resolve_all(resolver, &ProcessProperties::new())
        .into_classpath()
}
