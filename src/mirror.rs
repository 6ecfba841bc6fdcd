//! Repository mirror selection.
//!
//! Operators can redirect artifact fetches to an internal mirror or an
//! air-gapped cache without touching the declared artifact list. The
//! selector walks an ordered chain of sources and takes the first non-empty
//! value; when every source is silent the built-in default is used, so the
//! result is never empty.

use crate::properties::ProcessProperties;
use log::{debug, trace};
use std::fmt;

/// Environment variable that overrides the repository mirror.
pub const MIRROR_ENV_VAR: &str = "PAPER_DEFAULT_CENTRAL_REPOSITORY";

/// Process property that overrides the repository mirror when the
/// environment variable is unset.
pub const MIRROR_PROPERTY: &str = "org.bukkit.plugin.java.LibraryLoader.centralURL";

/// Mirror used when no override is configured.
pub const DEFAULT_MIRROR_URL: &str = "https://maven-central.storage-download.googleapis.com/maven2";

/// One lookup strategy in the mirror chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorSource {
    /// Read the named environment variable.
    EnvironmentVariable(String),
    /// Read the named process property.
    Property(String),
    /// A fixed URL supplied by the caller.
    Literal(String),
    /// The built-in [`DEFAULT_MIRROR_URL`].
    BuiltinDefault,
}

impl MirrorSource {
    fn lookup<F>(&self, environment: &F, properties: &ProcessProperties) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = match self {
            Self::EnvironmentVariable(name) => environment(name),
            Self::Property(key) => properties.get(key).map(str::to_owned),
            Self::Literal(url) => Some(url.clone()),
            Self::BuiltinDefault => Some(DEFAULT_MIRROR_URL.to_owned()),
        };
        raw.filter(|value| !value.is_empty())
    }
}

impl fmt::Display for MirrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvironmentVariable(name) => write!(f, "environment variable {name}"),
            Self::Property(key) => write!(f, "property {key}"),
            Self::Literal(url) => write!(f, "literal {url}"),
            Self::BuiltinDefault => f.write_str("built-in default"),
        }
    }
}

/// The outcome of mirror selection: a non-empty URL and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSelection {
    url: String,
    source: MirrorSource,
}

impl MirrorSelection {
    /// The selected base URL. Never empty.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The source that supplied the URL.
    #[must_use]
    pub const fn source(&self) -> &MirrorSource {
        &self.source
    }

    /// Consume the selection, yielding the URL.
    #[must_use]
    pub fn into_url(self) -> String {
        self.url
    }

    /// Emit a debug log summarising the selection.
    pub fn log_outcome(&self) {
        debug!(target: "jarstrap::mirror", "resolved mirror `{}` from {}", self.url, self.source);
    }
}

/// Ordered chain of mirror sources with a guaranteed fallback.
///
/// # Examples
///
/// ```
/// use jarstrap::mirror::{DEFAULT_MIRROR_URL, MirrorSelector};
/// use jarstrap::properties::ProcessProperties;
///
/// let selector = MirrorSelector::default();
/// let selection = selector.select_with(|_| None, &ProcessProperties::new());
/// assert_eq!(selection.url(), DEFAULT_MIRROR_URL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSelector {
    sources: Vec<MirrorSource>,
}

impl Default for MirrorSelector {
    /// Environment variable, then process property, then the default URL.
    fn default() -> Self {
        Self::new(vec![
            MirrorSource::EnvironmentVariable(MIRROR_ENV_VAR.to_owned()),
            MirrorSource::Property(MIRROR_PROPERTY.to_owned()),
            MirrorSource::BuiltinDefault,
        ])
    }
}

impl MirrorSelector {
    /// Build a selector over a custom chain, consulted in order.
    #[must_use]
    pub const fn new(sources: Vec<MirrorSource>) -> Self {
        Self { sources }
    }

    /// The configured sources in priority order.
    #[must_use]
    pub fn sources(&self) -> &[MirrorSource] {
        &self.sources
    }

    /// Select a mirror using the process environment.
    #[must_use]
    pub fn select(&self, properties: &ProcessProperties) -> MirrorSelection {
        self.select_with(|name| std::env::var(name).ok(), properties)
    }

    /// Select a mirror with an injected environment lookup.
    ///
    /// Sources are consulted lazily: once a source yields a non-empty value,
    /// later sources are not read. The winning value is returned exactly as
    /// found; only an empty string counts as unset.
    #[must_use]
    pub fn select_with<F>(&self, environment: F, properties: &ProcessProperties) -> MirrorSelection
    where
        F: Fn(&str) -> Option<String>,
    {
        self.sources
            .iter()
            .find_map(|source| {
                let found = source.lookup(&environment, properties);
                if found.is_none() {
                    trace!(target: "jarstrap::mirror", "{source} is unset; trying next source");
                }
                found.map(|url| MirrorSelection {
                    url,
                    source: source.clone(),
                })
            })
            .unwrap_or_else(|| MirrorSelection {
                url: DEFAULT_MIRROR_URL.to_owned(),
                source: MirrorSource::BuiltinDefault,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    const ENV_URL: &str = "https://env.mirror/maven2";
    const PROPERTY_URL: &str = "https://internal.mirror/maven2";

    fn properties(value: Option<&str>) -> ProcessProperties {
        value.map_or_else(ProcessProperties::new, |url| {
            ProcessProperties::from_pairs([(MIRROR_PROPERTY, url)])
        })
    }

    fn environment(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |name| {
            assert_eq!(name, MIRROR_ENV_VAR);
            value.map(str::to_owned)
        }
    }

    #[rstest]
    #[case::neither(None, None, DEFAULT_MIRROR_URL)]
    #[case::env_only(Some(ENV_URL), None, ENV_URL)]
    #[case::property_only(None, Some(PROPERTY_URL), PROPERTY_URL)]
    #[case::both_env_wins(Some(ENV_URL), Some(PROPERTY_URL), ENV_URL)]
    #[case::empty_env_falls_through(Some(""), Some(PROPERTY_URL), PROPERTY_URL)]
    #[case::blank_env_is_kept(Some("   "), Some(PROPERTY_URL), "   ")]
    #[case::empty_property_falls_through(None, Some(""), DEFAULT_MIRROR_URL)]
    fn selects_by_priority(
        #[case] env: Option<&'static str>,
        #[case] property: Option<&str>,
        #[case] expected: &str,
    ) {
        let selection = MirrorSelector::default().select_with(environment(env), &properties(property));
        assert_eq!(selection.url(), expected);
        assert!(!selection.url().is_empty());
    }

    #[test]
    fn records_winning_source() {
        let selection =
            MirrorSelector::default().select_with(environment(None), &properties(Some(PROPERTY_URL)));
        assert_eq!(
            selection.source(),
            &MirrorSource::Property(MIRROR_PROPERTY.to_owned())
        );
    }

    #[rstest]
    #[case::padded_env(Some(" https://env.mirror/maven2 "), None, " https://env.mirror/maven2 ")]
    #[case::padded_property(None, Some("\thttps://p.test/\n"), "\thttps://p.test/\n")]
    fn returns_selected_value_unchanged(
        #[case] env: Option<&'static str>,
        #[case] property: Option<&str>,
        #[case] expected: &str,
    ) {
        let selection = MirrorSelector::default().select_with(environment(env), &properties(property));
        assert_eq!(selection.url(), expected);
    }

    #[test]
    fn default_source_is_reported_as_builtin() {
        let selection = MirrorSelector::default().select_with(environment(None), &properties(None));
        assert_eq!(selection.source(), &MirrorSource::BuiltinDefault);
        assert_eq!(selection.source().to_string(), "built-in default");
    }

    #[test]
    fn custom_literal_displays_its_url() {
        let source = MirrorSource::Literal(PROPERTY_URL.to_owned());
        assert_eq!(source.to_string(), format!("literal {PROPERTY_URL}"));
    }

    #[test]
    fn later_sources_are_not_read_after_a_match() {
        let reads = Cell::new(0_u32);
        let selector = MirrorSelector::new(vec![
            MirrorSource::Literal(PROPERTY_URL.to_owned()),
            MirrorSource::EnvironmentVariable(MIRROR_ENV_VAR.to_owned()),
        ]);
        let selection = selector.select_with(
            |_| {
                reads.set(reads.get() + 1);
                Some(ENV_URL.to_owned())
            },
            &ProcessProperties::new(),
        );
        assert_eq!(selection.url(), PROPERTY_URL);
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn empty_chain_uses_default() {
        let selection = MirrorSelector::new(Vec::new()).select_with(|_| None, &ProcessProperties::new());
        assert_eq!(selection.url(), DEFAULT_MIRROR_URL);
    }

    #[test]
    fn empty_literal_still_yields_default() {
        let selector = MirrorSelector::new(vec![MirrorSource::Literal(String::new())]);
        let selection = selector.select_with(|_| None, &ProcessProperties::new());
        assert_eq!(selection.url(), DEFAULT_MIRROR_URL);
    }

    #[test]
    fn select_reads_process_environment() {
        temp_env::with_var(MIRROR_ENV_VAR, Some(ENV_URL), || {
            let selection = MirrorSelector::default().select(&properties(Some(PROPERTY_URL)));
            assert_eq!(selection.url(), ENV_URL);
        });
        temp_env::with_var_unset(MIRROR_ENV_VAR, || {
            let selection = MirrorSelector::default().select(&properties(Some(PROPERTY_URL)));
            assert_eq!(selection.url(), PROPERTY_URL);
        });
    }
}
