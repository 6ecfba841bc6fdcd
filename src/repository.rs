//! Remote repository descriptors.

use crate::mirror::MirrorSelection;
use serde::Serialize;
use std::fmt;

/// Identifier of the single repository built for each bootstrap run.
pub const CENTRAL_ID: &str = "central";

/// The Maven 2 repository layout.
pub const DEFAULT_LAYOUT: &str = "default";

/// Names a remote source of artifacts.
///
/// # Examples
///
/// ```
/// use jarstrap::repository::RepositoryDescriptor;
///
/// let central = RepositoryDescriptor::central("https://repo.maven.apache.org/maven2");
/// assert_eq!(central.id(), "central");
/// assert_eq!(central.layout(), "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDescriptor {
    id: String,
    layout: String,
    base_url: String,
}

impl RepositoryDescriptor {
    /// Build a descriptor from its parts.
    #[must_use]
    pub fn new(id: impl Into<String>, layout: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layout: layout.into(),
            base_url: base_url.into(),
        }
    }

    /// The `central` repository in the default layout at `base_url`.
    #[must_use]
    pub fn central(base_url: impl Into<String>) -> Self {
        Self::new(CENTRAL_ID, DEFAULT_LAYOUT, base_url)
    }

    /// The `central` repository rooted at a selected mirror.
    #[must_use]
    pub fn from_mirror(selection: &MirrorSelection) -> Self {
        Self::central(selection.url())
    }

    /// Repository identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Repository layout name.
    #[must_use]
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Base URL as configured, possibly with a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Display for RepositoryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.id, self.layout, self.base_url)
    }
}
