//! Bootstrap dispatch.
//!
//! The dispatcher selects the mirror once, builds the single `central`
//! repository descriptor from it, and submits one request per declared
//! artifact in declaration order. Each submission is independent: a failure
//! is recorded and the remaining requests are still submitted. Whether the
//! run as a whole succeeded is decided afterwards by
//! [`BootstrapReport::into_classpath`].

use crate::classpath::Classpath;
use crate::declaration::ArtifactDeclarations;
use crate::error::{BootstrapError, ResolveError, Result, UnresolvedArtifact};
use crate::mirror::{MirrorSelection, MirrorSelector};
use crate::properties::ProcessProperties;
use crate::repository::RepositoryDescriptor;
use crate::resolver::{ArtifactResolver, ResolutionRequest, ResolvedArtifact};
use log::{debug, info, warn};
use std::sync::Arc;

/// Owns the declarations and the mirror chain for a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapDispatcher {
    declarations: ArtifactDeclarations,
    selector: MirrorSelector,
}

impl Default for BootstrapDispatcher {
    /// The built-in declarations with the default mirror chain.
    fn default() -> Self {
        Self::new(ArtifactDeclarations::builtin(), MirrorSelector::default())
    }
}

impl BootstrapDispatcher {
    /// Build a dispatcher over explicit declarations and mirror chain.
    #[must_use]
    pub const fn new(declarations: ArtifactDeclarations, selector: MirrorSelector) -> Self {
        Self {
            declarations,
            selector,
        }
    }

    /// The declared artifacts.
    #[must_use]
    pub const fn declarations(&self) -> &ArtifactDeclarations {
        &self.declarations
    }

    /// Plan a run against the process environment.
    #[must_use]
    pub fn plan(&self, properties: &ProcessProperties) -> ResolutionPlan {
        self.plan_with(|name| std::env::var(name).ok(), properties)
    }

    /// Plan a run with an injected environment lookup.
    #[must_use]
    pub fn plan_with<F>(&self, environment: F, properties: &ProcessProperties) -> ResolutionPlan
    where
        F: Fn(&str) -> Option<String>,
    {
        let mirror = self.selector.select_with(environment, properties);
        mirror.log_outcome();

        let repository = Arc::new(RepositoryDescriptor::from_mirror(&mirror));
        let requests = self
            .declarations
            .iter()
            .map(|declaration| {
                ResolutionRequest::new(
                    declaration.coordinate.clone(),
                    declaration.scope,
                    Arc::clone(&repository),
                )
            })
            .collect();

        ResolutionPlan {
            mirror,
            repository,
            requests,
        }
    }

    /// Resolve every declared artifact against the process environment.
    ///
    /// Safe to call repeatedly; each call re-issues the same requests.
    #[must_use]
    pub fn resolve_all(
        &self,
        resolver: &dyn ArtifactResolver,
        properties: &ProcessProperties,
    ) -> BootstrapReport {
        self.plan(properties).submit(resolver)
    }

    /// Resolve every declared artifact with an injected environment lookup.
    #[must_use]
    pub fn resolve_all_with<F>(
        &self,
        resolver: &dyn ArtifactResolver,
        environment: F,
        properties: &ProcessProperties,
    ) -> BootstrapReport
    where
        F: Fn(&str) -> Option<String>,
    {
        self.plan_with(environment, properties).submit(resolver)
    }
}

/// The requests a run will submit, bound to one repository.
#[derive(Debug, Clone)]
pub struct ResolutionPlan {
    mirror: MirrorSelection,
    repository: Arc<RepositoryDescriptor>,
    requests: Vec<ResolutionRequest>,
}

impl ResolutionPlan {
    /// The selected mirror and its provenance.
    #[must_use]
    pub const fn mirror(&self) -> &MirrorSelection {
        &self.mirror
    }

    /// The repository shared by every request.
    #[must_use]
    pub const fn repository(&self) -> &Arc<RepositoryDescriptor> {
        &self.repository
    }

    /// Requests in declaration order.
    #[must_use]
    pub fn requests(&self) -> &[ResolutionRequest] {
        &self.requests
    }

    /// Submit every request to `resolver`, sequentially and in order.
    #[must_use]
    pub fn submit(self, resolver: &dyn ArtifactResolver) -> BootstrapReport {
        info!(
            target: "jarstrap::dispatch",
            "resolving {} artifacts from {}",
            self.requests.len(),
            self.repository
        );
        let outcomes = self
            .requests
            .into_iter()
            .map(|request| {
                let outcome = resolver.resolve(&request);
                match &outcome {
                    Ok(resolved) => debug!(
                        target: "jarstrap::dispatch",
                        "resolved {} to {}",
                        request.coordinate(),
                        resolved.path()
                    ),
                    Err(e) => warn!(
                        target: "jarstrap::dispatch",
                        "failed to resolve {}: {e}",
                        request.coordinate()
                    ),
                }
                (request, outcome)
            })
            .collect();

        BootstrapReport {
            mirror: self.mirror,
            repository: self.repository,
            outcomes,
        }
    }
}

/// Outcome of one bootstrap run, one entry per submitted request.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    mirror: MirrorSelection,
    repository: Arc<RepositoryDescriptor>,
    outcomes: Vec<(ResolutionRequest, std::result::Result<ResolvedArtifact, ResolveError>)>,
}

impl BootstrapReport {
    /// The mirror the run used.
    #[must_use]
    pub const fn mirror(&self) -> &MirrorSelection {
        &self.mirror
    }

    /// The repository every request was bound to.
    #[must_use]
    pub const fn repository(&self) -> &Arc<RepositoryDescriptor> {
        &self.repository
    }

    /// Every request with its outcome, in submission order.
    #[must_use]
    pub fn outcomes(
        &self,
    ) -> &[(ResolutionRequest, std::result::Result<ResolvedArtifact, ResolveError>)] {
        &self.outcomes
    }

    /// Number of submitted requests.
    #[must_use]
    pub const fn requested(&self) -> usize {
        self.outcomes.len()
    }

    /// Successfully resolved artifacts, in submission order.
    pub fn resolved(&self) -> impl Iterator<Item = &ResolvedArtifact> {
        self.outcomes.iter().filter_map(|(_, outcome)| outcome.as_ref().ok())
    }

    /// Failed requests, in submission order.
    #[must_use]
    pub fn failures(&self) -> Vec<UnresolvedArtifact> {
        self.outcomes
            .iter()
            .filter_map(|(request, outcome)| {
                outcome.as_ref().err().map(|error| UnresolvedArtifact {
                    coordinate: request.coordinate().clone(),
                    scope: request.scope(),
                    error: error.clone(),
                })
            })
            .collect()
    }

    /// Whether every request resolved.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }

    /// The classpath of resolved artifacts.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Unresolved`] if any request failed; the host
    /// must not start with a partial classpath.
    pub fn into_classpath(self) -> Result<Classpath> {
        let failures = self.failures();
        if !failures.is_empty() {
            return Err(BootstrapError::Unresolved {
                requested: self.requested(),
                failures,
            });
        }

        let mut classpath = Classpath::new();
        classpath.extend(
            self.outcomes
                .into_iter()
                .filter_map(|(_, outcome)| outcome.ok())
                .map(|resolved| resolved.path().to_path_buf()),
        );
        Ok(classpath)
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
