//! Process-level configuration properties.
//!
//! A read-only key/value map playing the part JVM system properties play for
//! a Java host. The CLI fills it from the manifest `[properties]` table and
//! from `-D key=value` flags.

use std::collections::BTreeMap;

/// Read-only process properties consulted by mirror selection.
///
/// # Examples
///
/// ```
/// use jarstrap::properties::ProcessProperties;
///
/// let properties = ProcessProperties::from_pairs([("answer", "42")]);
/// assert_eq!(properties.get("answer"), Some("42"));
/// assert_eq!(properties.get("question"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessProperties(BTreeMap<String, String>);

impl ProcessProperties {
    /// An empty property set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build a property set from key/value pairs; later pairs win.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Look up a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Layer `overrides` on top of `self`, with `overrides` winning.
    #[must_use]
    pub fn overlay(mut self, overrides: Self) -> Self {
        self.0.extend(overrides.0);
        self
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Split a `key=value` definition as given to `-D`.
///
/// Returns `None` when there is no `=` or the key is blank. The value may be
/// empty, which mirror selection treats as unset.
///
/// ```
/// use jarstrap::properties::parse_definition;
///
/// assert_eq!(parse_definition("a=b=c"), Some(("a".to_owned(), "b=c".to_owned())));
/// assert_eq!(parse_definition("novalue"), None);
/// ```
#[must_use]
pub fn parse_definition(raw: &str) -> Option<(String, String)> {
    let (key, value) = raw.split_once('=')?;
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some((trimmed.to_owned(), value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn overlay_prefers_overrides() {
        let base = ProcessProperties::from_pairs([("a", "base"), ("b", "base")]);
        let merged = base.overlay(ProcessProperties::from_pairs([("b", "cli")]));
        assert_eq!(merged.get("a"), Some("base"));
        assert_eq!(merged.get("b"), Some("cli"));
        assert_eq!(merged.len(), 2);
    }

    #[rstest]
    #[case::plain("k=v", Some(("k", "v")))]
    #[case::empty_value("k=", Some(("k", "")))]
    #[case::padded_key(" k =v", Some(("k", "v")))]
    #[case::missing_equals("k", None)]
    #[case::blank_key("=v", None)]
    fn parses_definitions(#[case] raw: &str, #[case] expected: Option<(&str, &str)>) {
        let expected = expected.map(|(k, v)| (k.to_owned(), v.to_owned()));
        assert_eq!(parse_definition(raw), expected);
    }
}
