//! HTTP transfer of artifact files.
//!
//! Transfers are behind [`ArtifactFetcher`] so the resolver can be exercised
//! without network access. Failures are reported directly as
//! [`ResolveError`]s.

use camino::Utf8Path;
use jarstrap::ResolveError;
use std::sync::OnceLock;
use std::time::Duration;

/// Upper bound on a single artifact transfer, connection included.
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(60);

/// Copies a remote file to a local path.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use jarstrap_loader::download::{ArtifactFetcher, HttpFetcher};
///
/// HttpFetcher.fetch(
///     "https://repo.maven.apache.org/maven2/org/bstats/bstats-bukkit/3.1.0/bstats-bukkit-3.1.0.jar",
///     Utf8Path::new("bstats-bukkit-3.1.0.jar"),
/// )?;
/// # Ok::<(), jarstrap::ResolveError>(())
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactFetcher {
    /// Write the body of `url` to `dest`, replacing its contents.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotFound`] when the server has no such file,
    /// [`ResolveError::Transfer`] for any other request failure and
    /// [`ResolveError::LocalRepository`] when `dest` cannot be written.
    fn fetch(&self, url: &str, dest: &Utf8Path) -> Result<(), ResolveError>;
}

/// Fetches over HTTP(S) with a process-wide `ureq` agent.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl ArtifactFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Utf8Path) -> Result<(), ResolveError> {
        let response = agent()
            .get(url)
            .call()
            .map_err(|e| status_to_resolve_error(url, &e))?;
        let write_error = |e: std::io::Error| ResolveError::LocalRepository {
            path: dest.to_path_buf(),
            reason: e.to_string(),
        };
        let mut file = std::fs::File::create(dest).map_err(write_error)?;
        std::io::copy(&mut response.into_body().as_reader(), &mut file).map_err(|e| {
            ResolveError::Transfer {
                url: url.to_owned(),
                reason: e.to_string(),
            }
        })?;
        Ok(())
    }
}

fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(Some(TRANSFER_TIMEOUT))
                .build(),
        )
    })
}

/// A 404 means the repository lacks the artifact; anything else is a failed
/// transfer.
fn status_to_resolve_error(url: &str, err: &ureq::Error) -> ResolveError {
    if matches!(err, ureq::Error::StatusCode(404)) {
        ResolveError::NotFound {
            url: url.to_owned(),
        }
    } else {
        ResolveError::Transfer {
            url: url.to_owned(),
            reason: err.to_string(),
        }
    }
}
