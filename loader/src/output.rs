//! Output formatting for the `jarstrap` CLI.
//!
//! Progress goes to stderr; results (the classpath, plans, listings) go to
//! stdout so they can be captured by a launcher script.

use jarstrap::declaration::ArtifactDeclarations;
use jarstrap::dispatcher::{BootstrapReport, ResolutionPlan};
use jarstrap::mirror::MirrorSelection;
use jarstrap::resolver::ResolutionRequest;
use jarstrap::Classpath;
use serde_json::{Value, json};
use std::io::Write;

use crate::layout::artifact_url;

/// Write a line to stderr, ignoring failures.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort progress output; ignore write failures.
    }
}

/// Describe a mirror selection on one line.
///
/// ```
/// use jarstrap::mirror::MirrorSelector;
/// use jarstrap::properties::ProcessProperties;
/// use jarstrap_loader::output::format_mirror;
///
/// let selection = MirrorSelector::default().select_with(|_| None, &ProcessProperties::new());
/// assert!(format_mirror(&selection).ends_with("(built-in default)"));
/// ```
#[must_use]
pub fn format_mirror(selection: &MirrorSelection) -> String {
    format!("{} ({})", selection.url(), selection.source())
}

fn request_line(request: &ResolutionRequest) -> String {
    let url = artifact_url(request.repository(), request.coordinate())
        .unwrap_or_else(|e| format!("<{e}>"));
    format!("  {} [{}]\n    {url}", request.coordinate(), request.scope())
}

/// Render a resolution plan for `--dry-run`.
#[must_use]
pub fn format_plan(plan: &ResolutionPlan) -> String {
    let mut lines = vec![
        format!("Mirror: {}", format_mirror(plan.mirror())),
        format!("Repository: {}", plan.repository()),
        format!("Requests ({}):", plan.requests().len()),
    ];
    lines.extend(plan.requests().iter().map(request_line));
    lines.join("\n")
}

/// Render declarations for `list`.
#[must_use]
pub fn format_declarations(declarations: &ArtifactDeclarations) -> String {
    declarations
        .iter()
        .map(|d| format!("{} [{}]", d.coordinate, d.scope))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One progress line per submitted request.
#[must_use]
pub fn report_lines(report: &BootstrapReport) -> Vec<String> {
    report
        .outcomes()
        .iter()
        .map(|(request, outcome)| match outcome {
            Ok(resolved) if resolved.fetched() => format!("  fetched {}", request.coordinate()),
            Ok(_) => format!("  cached  {}", request.coordinate()),
            Err(e) => format!("  FAILED  {}: {e}", request.coordinate()),
        })
        .collect()
}

/// The classpath as a shell-friendly assignment.
///
/// # Errors
///
/// Returns an error if an entry cannot be joined with the platform separator.
pub fn format_classpath(classpath: &Classpath) -> Result<String, std::env::JoinPathsError> {
    let joined = classpath.join()?;
    Ok(format!("CLASSPATH={}", joined.to_string_lossy()))
}

/// The outcome of a run as JSON.
#[must_use]
pub fn report_json(mirror: &MirrorSelection, classpath: &Classpath) -> Value {
    json!({
        "mirror": {
            "url": mirror.url(),
            "source": mirror.source().to_string(),
        },
        "classpath": classpath.iter().map(camino::Utf8Path::as_str).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use jarstrap::coordinate::ArtifactCoordinate;
    use jarstrap::declaration::ArtifactDeclaration;
    use jarstrap::dispatcher::BootstrapDispatcher;
    use jarstrap::mirror::MirrorSelector;
    use jarstrap::properties::ProcessProperties;
    use jarstrap::test_utils::RecordingResolver;

    fn dispatcher() -> BootstrapDispatcher {
        BootstrapDispatcher::new(
            ArtifactDeclarations::new(vec![
                ArtifactDeclaration::provided(ArtifactCoordinate::new("g", "a", "1.0")),
                ArtifactDeclaration::provided(ArtifactCoordinate::new("g", "b", "2.0")),
            ]),
            MirrorSelector::default(),
        )
    }

    #[test]
    fn plan_lists_every_request_with_url() {
        let plan = dispatcher().plan_with(|_| Some("https://m.test".to_owned()), &ProcessProperties::new());
        let text = format_plan(&plan);
        assert!(text.contains("Mirror: https://m.test (environment variable"), "{text}");
        assert!(text.contains("Requests (2):"), "{text}");
        assert!(text.contains("https://m.test/g/a/1.0/a-1.0.jar"), "{text}");
        assert!(text.contains("g:b:2.0 [provided]"), "{text}");
    }

    #[test]
    fn report_lines_mark_failures() {
        let resolver = RecordingResolver::default().failing_on("b");
        let report = dispatcher().resolve_all_with(&resolver, |_| None, &ProcessProperties::new());
        let lines = report_lines(&report);
        assert_eq!(lines.len(), 2);
        assert!(lines.first().is_some_and(|l| l.contains("fetched g:a:1.0")));
        assert!(lines.last().is_some_and(|l| l.contains("FAILED  g:b:2.0")));
    }

    #[test]
    fn declarations_render_one_per_line() {
        let text = format_declarations(dispatcher().declarations());
        assert_eq!(text, "g:a:1.0 [provided]\ng:b:2.0 [provided]");
    }

    #[test]
    fn json_includes_mirror_and_classpath() {
        let mirror = MirrorSelector::default().select_with(|_| None, &ProcessProperties::new());
        let mut classpath = Classpath::new();
        classpath.push(Utf8PathBuf::from("/r/a.jar"));
        let value = report_json(&mirror, &classpath);
        assert_eq!(value["mirror"]["url"], mirror.url());
        assert_eq!(value["classpath"][0], "/r/a.jar");
    }

    #[cfg(unix)]
    #[test]
    fn classpath_assignment_joins_entries() {
        let mut classpath = Classpath::new();
        classpath.push(Utf8PathBuf::from("/r/a.jar"));
        classpath.push(Utf8PathBuf::from("/r/b.jar"));
        assert_eq!(
            format_classpath(&classpath).expect("joinable"),
            "CLASSPATH=/r/a.jar:/r/b.jar"
        );
    }
}
