//! Declared bootstrap artifacts.
//!
//! The declaration list is an immutable value handed to the dispatcher at
//! construction. [`ArtifactDeclarations::builtin`] returns the runtime
//! libraries the host needs before any of its own code can load.

use crate::coordinate::ArtifactCoordinate;
use crate::scope::DependencyScope;
use serde::Deserialize;

/// Built-in runtime prerequisites, in declaration order.
pub const BUILTIN_ARTIFACTS: &[(&str, &str, &str)] = &[
    ("org.jetbrains.kotlin", "kotlin-stdlib", "2.2.10"),
    ("org.jetbrains.kotlin", "kotlin-reflect", "2.2.10"),
    ("org.jetbrains.kotlinx", "kotlinx-coroutines-core", "1.10.2"),
    ("com.corundumstudio.socketio", "netty-socketio", "1.7.19"),
    ("com.github.shynixn.mccoroutine", "mccoroutine-bukkit-api", "2.22.0"),
    ("com.github.shynixn.mccoroutine", "mccoroutine-bukkit-core", "2.22.0"),
    ("io.ktor", "ktor-server-core-jvm", "2.3.12"),
    ("io.ktor", "ktor-server-netty-jvm", "2.3.12"),
    ("org.jetbrains.kotlinx", "kotlinx-serialization-core", "1.8.1"),
    ("org.bstats", "bstats-bukkit", "3.1.0"),
];

/// One required artifact and the scope it is requested with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactDeclaration {
    /// The artifact to resolve.
    pub coordinate: ArtifactCoordinate,
    /// How the artifact is made available.
    #[serde(default)]
    pub scope: DependencyScope,
}

impl ArtifactDeclaration {
    /// Declare `coordinate` with `scope`.
    #[must_use]
    pub const fn new(coordinate: ArtifactCoordinate, scope: DependencyScope) -> Self {
        Self { coordinate, scope }
    }

    /// Declare `coordinate` in the `provided` scope.
    #[must_use]
    pub const fn provided(coordinate: ArtifactCoordinate) -> Self {
        Self::new(coordinate, DependencyScope::Provided)
    }
}

/// An ordered, immutable list of declarations.
///
/// Order does not affect correctness but is preserved so logs and reports are
/// reproducible.
///
/// # Examples
///
/// ```
/// use jarstrap::declaration::ArtifactDeclarations;
///
/// let builtin = ArtifactDeclarations::builtin();
/// assert_eq!(builtin.len(), 10);
/// assert!(ArtifactDeclarations::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactDeclarations(Vec<ArtifactDeclaration>);

impl ArtifactDeclarations {
    /// Wrap an explicit list.
    #[must_use]
    pub const fn new(declarations: Vec<ArtifactDeclaration>) -> Self {
        Self(declarations)
    }

    /// The built-in runtime prerequisites, all in the `provided` scope.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_ARTIFACTS
            .iter()
            .map(|&(group, name, version)| {
                ArtifactDeclaration::provided(ArtifactCoordinate::new(group, name, version))
            })
            .collect()
    }

    /// Iterate declarations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ArtifactDeclaration> {
        self.0.iter()
    }

    /// Number of declarations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ArtifactDeclaration> for ArtifactDeclarations {
    fn from_iter<I: IntoIterator<Item = ArtifactDeclaration>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ArtifactDeclarations {
    type Item = &'a ArtifactDeclaration;
    type IntoIter = std::slice::Iter<'a, ArtifactDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_is_provided_and_ordered() {
        let builtin = ArtifactDeclarations::builtin();
        assert!(builtin.iter().all(|d| d.scope == DependencyScope::Provided));

        let names: Vec<&str> = builtin.iter().map(|d| d.coordinate.name()).collect();
        assert_eq!(names.first(), Some(&"kotlin-stdlib"));
        assert_eq!(names.last(), Some(&"bstats-bukkit"));
    }

    #[test]
    fn builtin_list_has_no_duplicates() {
        let builtin = ArtifactDeclarations::builtin();
        let unique: std::collections::HashSet<_> = builtin.iter().collect();
        assert_eq!(unique.len(), builtin.len());
    }

    #[test]
    fn scope_defaults_to_provided_when_deserialised() {
        #[derive(Deserialize)]
        struct Wrapper {
            artifact: ArtifactDeclaration,
        }
        let parsed: Wrapper = toml::from_str("artifact = { coordinate = \"g:a:1.0\" }")
            .expect("valid declaration");
        assert_eq!(parsed.artifact.scope, DependencyScope::Provided);
        assert_eq!(parsed.artifact.coordinate, ArtifactCoordinate::new("g", "a", "1.0"));
    }
}
