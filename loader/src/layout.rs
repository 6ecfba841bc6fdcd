//! Maven 2 ("default") repository layout.
//!
//! An artifact lives at
//! `<group with dots as slashes>/<name>/<version>/<name>-<version>[-<classifier>].<extension>`
//! relative to the repository root, both remotely and in the local cache.

use camino::Utf8PathBuf;
use jarstrap::coordinate::ArtifactCoordinate;
use jarstrap::repository::{DEFAULT_LAYOUT, RepositoryDescriptor};
use jarstrap::ResolveError;

/// Path segments of `coordinate` relative to a repository root.
fn segments(coordinate: &ArtifactCoordinate) -> Vec<String> {
    let mut segments: Vec<String> = coordinate.group().split('.').map(str::to_owned).collect();
    segments.push(coordinate.name().to_owned());
    segments.push(coordinate.version().to_owned());
    segments.push(coordinate.file_name());
    segments
}

/// The artifact's path relative to a repository root, `/`-separated.
///
/// # Examples
///
/// ```
/// use jarstrap::coordinate::ArtifactCoordinate;
/// use jarstrap_loader::layout::relative_path;
///
/// let coordinate = ArtifactCoordinate::new("org.bstats", "bstats-bukkit", "3.1.0");
/// assert_eq!(
///     relative_path(&coordinate),
///     "org/bstats/bstats-bukkit/3.1.0/bstats-bukkit-3.1.0.jar",
/// );
/// ```
#[must_use]
pub fn relative_path(coordinate: &ArtifactCoordinate) -> String {
    segments(coordinate).join("/")
}

/// The artifact's location under a local directory, using native separators.
#[must_use]
pub fn local_path(root: &camino::Utf8Path, coordinate: &ArtifactCoordinate) -> Utf8PathBuf {
    segments(coordinate)
        .iter()
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

/// The artifact's URL within `repository`.
///
/// # Errors
///
/// Returns [`ResolveError::UnsupportedLayout`] unless the repository uses the
/// `default` layout.
pub fn artifact_url(
    repository: &RepositoryDescriptor,
    coordinate: &ArtifactCoordinate,
) -> Result<String, ResolveError> {
    if repository.layout() != DEFAULT_LAYOUT {
        return Err(ResolveError::UnsupportedLayout {
            repository: repository.id().to_owned(),
            layout: repository.layout().to_owned(),
        });
    }
    let base = repository.base_url().trim_end_matches('/');
    Ok(format!("{base}/{}", relative_path(coordinate)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("https://repo.test/maven2")]
    #[case::trailing_slash("https://repo.test/maven2/")]
    #[case::many_slashes("https://repo.test/maven2///")]
    fn url_joins_base_without_double_slash(#[case] base: &str) {
        let repository = RepositoryDescriptor::central(base);
        let coordinate = ArtifactCoordinate::new("org.jetbrains.kotlin", "kotlin-stdlib", "2.2.10");
        let url = artifact_url(&repository, &coordinate).expect("default layout");
        assert_eq!(
            url,
            "https://repo.test/maven2/org/jetbrains/kotlin/kotlin-stdlib/2.2.10/kotlin-stdlib-2.2.10.jar"
        );
    }

    #[test]
    fn classifier_and_extension_reach_the_file_name() {
        let coordinate = ArtifactCoordinate::new("io.netty", "netty-transport-native-epoll", "4.1.118")
            .with_classifier("linux-x86_64");
        assert_eq!(
            relative_path(&coordinate),
            "io/netty/netty-transport-native-epoll/4.1.118/netty-transport-native-epoll-4.1.118-linux-x86_64.jar"
        );
    }

    #[test]
    fn rejects_non_default_layout() {
        let repository = RepositoryDescriptor::new("legacy-repo", "legacy", "https://repo.test");
        let err = artifact_url(&repository, &ArtifactCoordinate::new("g", "a", "1"))
            .expect_err("legacy layout is unsupported");
        assert!(matches!(err, ResolveError::UnsupportedLayout { .. }));
    }

    #[test]
    fn local_path_nests_by_group() {
        let root = camino::Utf8Path::new("cache");
        let path = local_path(root, &ArtifactCoordinate::new("a.b", "c", "1.0"));
        assert_eq!(path, Utf8PathBuf::from("cache").join("a").join("b").join("c").join("1.0").join("c-1.0.jar"));
    }
}
