//! Bootstrap manifest loading.
//!
//! A `jarstrap.toml` manifest replaces the built-in declaration list and may
//! seed process properties:
//!
//! ```toml
//! [properties]
//! "org.bukkit.plugin.java.LibraryLoader.centralURL" = "https://internal.mirror/maven2"
//!
//! [[artifact]]
//! coordinate = "org.jetbrains.kotlin:kotlin-stdlib:2.2.10"
//! scope = "provided"
//! ```
//!
//! Coordinates are validated here, at configuration time, so the dispatcher
//! never has to.

use crate::declaration::{ArtifactDeclaration, ArtifactDeclarations};
use crate::error::ManifestError;
use crate::properties::ProcessProperties;
use camino::Utf8Path;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Conventional manifest file name.
pub const MANIFEST_FILE: &str = "jarstrap.toml";

/// Parsed contents of a bootstrap manifest.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapManifest {
    /// Process properties, applied beneath any given on the command line.
    properties: BTreeMap<String, String>,
    /// Declared artifacts, in order. An absent table declares nothing.
    #[serde(rename = "artifact")]
    artifacts: Vec<ArtifactDeclaration>,
}

impl BootstrapManifest {
    /// Parse a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] for malformed TOML, unknown keys, bad
    /// coordinates or unknown scopes.
    ///
    /// # Examples
    ///
    /// ```
    /// use jarstrap::config::BootstrapManifest;
    ///
    /// let manifest = BootstrapManifest::parse(
    ///     "[[artifact]]\ncoordinate = \"g:a:1.0\"\n",
    /// ).expect("valid manifest");
    /// assert_eq!(manifest.declarations().len(), 1);
    /// ```
    pub fn parse(contents: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Read`] if the file cannot be read, or any
    /// error from [`Self::parse`].
    pub fn load(path: &Utf8Path) -> Result<Self, ManifestError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// The declared artifacts.
    #[must_use]
    pub fn declarations(&self) -> ArtifactDeclarations {
        ArtifactDeclarations::new(self.artifacts.clone())
    }

    /// The manifest's process properties.
    #[must_use]
    pub fn properties(&self) -> ProcessProperties {
        ProcessProperties::from_pairs(self.properties.clone())
    }
}
