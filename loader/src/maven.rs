//! Maven repository resolver backed by a local artifact cache.
//!
//! Artifacts already present in the local repository are served without a
//! transfer, which is what makes repeated bootstrap runs cheap. Missing
//! artifacts are downloaded into a temporary file beside their final location
//! and moved into place only once the transfer completes, so an interrupted
//! download never leaves a truncated jar in the cache.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use jarstrap::resolver::{ArtifactResolver, ResolutionRequest, ResolvedArtifact};
use jarstrap::ResolveError;
use log::{debug, info};

use crate::download::{ArtifactFetcher, HttpFetcher};
use crate::layout::{artifact_url, local_path};

/// A directory holding artifacts in the default Maven layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepository {
    root: Utf8PathBuf,
}

impl LocalRepository {
    /// Use `root` as the repository directory. It is created on demand.
    #[must_use]
    pub const fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    /// The repository directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Where `request`'s artifact lives in this repository.
    #[must_use]
    pub fn path_for(&self, request: &ResolutionRequest) -> Utf8PathBuf {
        local_path(&self.root, request.coordinate())
    }
}

/// Resolves requests from a remote Maven repository into a [`LocalRepository`].
pub struct MavenResolver {
    local: LocalRepository,
    fetcher: Box<dyn ArtifactFetcher>,
}

impl std::fmt::Debug for MavenResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MavenResolver")
            .field("local", &self.local)
            .finish_non_exhaustive()
    }
}

impl MavenResolver {
    /// A resolver that fetches over HTTP.
    #[must_use]
    pub fn new(local: LocalRepository) -> Self {
        Self::with_fetcher(local, Box::new(HttpFetcher))
    }

    /// A resolver with an injected fetcher.
    #[must_use]
    pub const fn with_fetcher(local: LocalRepository, fetcher: Box<dyn ArtifactFetcher>) -> Self {
        Self { local, fetcher }
    }

    /// The local repository artifacts are placed in.
    #[must_use]
    pub const fn local(&self) -> &LocalRepository {
        &self.local
    }

    fn download(&self, url: &str, target: &Utf8Path) -> Result<(), ResolveError> {
        let parent = target.parent().unwrap_or(self.local.root());
        std::fs::create_dir_all(parent).map_err(|e| local_error(parent, &e))?;

        let partial = tempfile::Builder::new()
            .prefix(".jarstrap-")
            .suffix(".part")
            .tempfile_in(parent)
            .map_err(|e| local_error(parent, &e))?
            .into_temp_path();

        let partial_path = Utf8Path::from_path(&partial).ok_or_else(|| ResolveError::LocalRepository {
            path: parent.to_path_buf(),
            reason: "temporary file path is not UTF-8".to_owned(),
        })?;
        self.fetcher.fetch(url, partial_path)?;
        partial
            .persist(target)
            .map_err(|e| local_error(target, &e.error))?;
        Ok(())
    }
}

impl ArtifactResolver for MavenResolver {
    fn resolve(&self, request: &ResolutionRequest) -> Result<ResolvedArtifact, ResolveError> {
        let url = artifact_url(request.repository(), request.coordinate())?;
        let target = self.local.path_for(request);
        if escapes_root(self.local.root(), &target) {
            return Err(ResolveError::LocalRepository {
                path: target,
                reason: "artifact path leaves the local repository".to_owned(),
            });
        }

        if target.is_file() {
            debug!(
                target: "jarstrap::maven",
                "{} already present at {target}",
                request.coordinate()
            );
            return Ok(ResolvedArtifact::new(request, target, false));
        }

        info!(target: "jarstrap::maven", "downloading {url}");
        self.download(&url, &target)?;
        Ok(ResolvedArtifact::new(request, target, true))
    }
}

fn escapes_root(root: &Utf8Path, target: &Utf8Path) -> bool {
    match target.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .any(|component| matches!(component, Utf8Component::ParentDir)),
        Err(_) => true,
    }
}

fn local_error(path: &Utf8Path, err: &std::io::Error) -> ResolveError {
    ResolveError::LocalRepository {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
#[path = "maven_tests.rs"]
mod tests;
