//! Dependency scopes.

use crate::error::UnknownScope;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a resolved artifact is made available to the host.
///
/// Bootstrap declarations almost always use [`DependencyScope::Provided`]:
/// the artifact must be present at runtime but is not bundled into the
/// host's redistributable package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    /// Needed to compile and run; bundled.
    Compile,
    /// Present at runtime, supplied by the environment rather than bundled.
    #[default]
    Provided,
    /// Needed only at runtime.
    Runtime,
    /// Needed only by tests.
    Test,
    /// Supplied by the host system from an explicit path.
    System,
}

impl DependencyScope {
    /// Every scope, in Maven's conventional order.
    pub const ALL: [Self; 5] = [
        Self::Compile,
        Self::Provided,
        Self::Runtime,
        Self::Test,
        Self::System,
    ];

    /// The lowercase Maven name of the scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Provided => "provided",
            Self::Runtime => "runtime",
            Self::Test => "test",
            Self::System => "system",
        }
    }
}

impl FromStr for DependencyScope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| UnknownScope(s.to_owned()))
    }
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
