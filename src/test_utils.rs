//! Shared test doubles for the bootstrap dispatcher.

use crate::error::ResolveError;
use crate::resolver::{ArtifactResolver, ResolutionRequest, ResolvedArtifact};
use camino::Utf8PathBuf;
use std::cell::RefCell;
use std::collections::HashSet;

/// A resolver that records every request and resolves without I/O.
///
/// Artifacts resolve to `<root>/<file name>`; names registered with
/// [`RecordingResolver::failing_on`] fail with [`ResolveError::NotFound`].
#[derive(Debug)]
pub struct RecordingResolver {
    root: Utf8PathBuf,
    failing: HashSet<String>,
    requests: RefCell<Vec<ResolutionRequest>>,
}

impl Default for RecordingResolver {
    fn default() -> Self {
        Self::new(Utf8PathBuf::from("/repository"))
    }
}

impl RecordingResolver {
    /// Creates a resolver that places artifacts under `root`.
    #[must_use]
    pub fn new(root: Utf8PathBuf) -> Self {
        Self {
            root,
            failing: HashSet::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Makes requests for the artifact called `name` fail.
    #[must_use]
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_owned());
        self
    }

    /// Returns every request received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<ResolutionRequest> {
        self.requests.borrow().clone()
    }

    /// Forgets recorded requests.
    pub fn clear(&self) {
        self.requests.borrow_mut().clear();
    }
}

impl ArtifactResolver for RecordingResolver {
    fn resolve(&self, request: &ResolutionRequest) -> Result<ResolvedArtifact, ResolveError> {
        self.requests.borrow_mut().push(request.clone());

        let coordinate = request.coordinate();
        if self.failing.contains(coordinate.name()) {
            return Err(ResolveError::NotFound {
                url: format!("{}/{coordinate}", request.repository().base_url()),
            });
        }
        Ok(ResolvedArtifact::new(
            request,
            self.root.join(coordinate.file_name()),
            true,
        ))
    }
}
