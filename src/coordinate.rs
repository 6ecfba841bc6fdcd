//! Maven artifact coordinates.
//!
//! A coordinate names one library release. The textual form follows the
//! Aether convention `group:name[:extension[:classifier]]:version`, with the
//! three-part `group:name:version` form being by far the most common.

use crate::error::CoordinateError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Packaging extension used when a coordinate does not name one.
pub const DEFAULT_EXTENSION: &str = "jar";

/// An immutable `(group, name, version)` triple identifying a library release.
///
/// # Examples
///
/// ```
/// use jarstrap::coordinate::ArtifactCoordinate;
///
/// let coordinate: ArtifactCoordinate = "org.bstats:bstats-bukkit:3.1.0"
///     .parse()
///     .expect("valid coordinate");
/// assert_eq!(coordinate.group(), "org.bstats");
/// assert_eq!(coordinate.name(), "bstats-bukkit");
/// assert_eq!(coordinate.version(), "3.1.0");
/// assert_eq!(coordinate.extension(), "jar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    group: String,
    name: String,
    version: String,
    extension: String,
    classifier: Option<String>,
}

impl ArtifactCoordinate {
    /// Build a coordinate from its three mandatory parts.
    ///
    /// No validation is performed; coordinates built in code are trusted.
    /// Use [`str::parse`] for coordinates that come from configuration.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            extension: DEFAULT_EXTENSION.to_owned(),
            classifier: None,
        }
    }

    /// Replace the packaging extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Attach a classifier such as `sources` or `linux-x86_64`.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// The dotted group identifier, e.g. `org.jetbrains.kotlin`.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The artifact identifier, e.g. `kotlin-stdlib`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The release version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The packaging extension (`jar` unless stated otherwise).
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The classifier, if any.
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// File name of the artifact within its version directory.
    ///
    /// ```
    /// use jarstrap::coordinate::ArtifactCoordinate;
    ///
    /// let coordinate = ArtifactCoordinate::new("g", "a", "1.0").with_classifier("sources");
    /// assert_eq!(coordinate.file_name(), "a-1.0-sources.jar");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}-{}-{classifier}.{}",
                self.name, self.version, self.extension
            ),
            None => format!("{}-{}.{}", self.name, self.version, self.extension),
        }
    }
}

fn require_segment(
    input: &str,
    segment: &'static str,
    value: &str,
) -> Result<String, CoordinateError> {
    if value.is_empty() {
        return Err(CoordinateError::EmptySegment {
            input: input.to_owned(),
            segment,
        });
    }
    if let Some(bad) = value
        .chars()
        .find(|c| c.is_whitespace() || matches!(*c, '/' | '\\'))
    {
        return Err(CoordinateError::InvalidCharacter {
            input: input.to_owned(),
            character: bad,
        });
    }
    let relative = |part: &str| matches!(part, "" | "." | "..");
    let escapes = if segment == "group" {
        value.split('.').any(relative)
    } else {
        relative(value)
    };
    if escapes {
        return Err(CoordinateError::RelativeSegment {
            input: input.to_owned(),
            segment,
        });
    }
    Ok(value.to_owned())
}

impl FromStr for ArtifactCoordinate {
    type Err = CoordinateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input.trim().split(':').collect();
        let (group, name, extension, classifier, version) = match parts.as_slice() {
            [group, name, version] => (*group, *name, None, None, *version),
            [group, name, extension, version] => (*group, *name, Some(*extension), None, *version),
            [group, name, extension, classifier, version] => {
                (*group, *name, Some(*extension), Some(*classifier), *version)
            }
            _ => {
                return Err(CoordinateError::WrongArity {
                    input: input.to_owned(),
                    found: parts.len(),
                });
            }
        };

        let mut coordinate = Self::new(
            require_segment(input, "group", group)?,
            require_segment(input, "name", name)?,
            require_segment(input, "version", version)?,
        );
        if let Some(extension) = extension {
            coordinate.extension = require_segment(input, "extension", extension)?;
        }
        if let Some(classifier) = classifier {
            coordinate.classifier = Some(require_segment(input, "classifier", classifier)?);
        }
        Ok(coordinate)
    }
}

impl<'de> Deserialize<'de> for ArtifactCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)?;
        let explicit_extension = self.extension != DEFAULT_EXTENSION || self.classifier.is_some();
        if explicit_extension {
            write!(f, ":{}", self.extension)?;
        }
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, ":{}", self.version)
    }
}
