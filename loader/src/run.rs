//! Command orchestration.
//!
//! Each subcommand loads its declarations and properties, then either
//! previews, reports, or resolves. Resolution is split so tests can inject a
//! resolver in place of the HTTP-backed [`MavenResolver`].

use camino::{Utf8Path, Utf8PathBuf};
use jarstrap::config::BootstrapManifest;
use jarstrap::declaration::ArtifactDeclarations;
use jarstrap::dispatcher::BootstrapDispatcher;
use jarstrap::mirror::MirrorSelector;
use jarstrap::properties::{ProcessProperties, parse_definition};
use jarstrap::resolver::ArtifactResolver;
use log::debug;
use std::io::Write;

use crate::cli::{Command, ResolveArgs, SourceArgs};
use crate::dirs::{BaseDirs, SystemBaseDirs, default_repository_dir};
use crate::error::{LoaderError, Result};
use crate::maven::{LocalRepository, MavenResolver};
use crate::output::{
    format_classpath, format_declarations, format_mirror, format_plan, report_json, report_lines,
    write_stderr_line,
};

/// Declarations and properties for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    /// Artifacts to resolve.
    pub declarations: ArtifactDeclarations,
    /// Process properties, command line layered over manifest.
    pub properties: ProcessProperties,
}

impl Sources {
    /// A dispatcher over these declarations with the default mirror chain.
    #[must_use]
    pub fn dispatcher(&self) -> BootstrapDispatcher {
        BootstrapDispatcher::new(self.declarations.clone(), MirrorSelector::default())
    }
}

/// Load declarations and properties from the manifest (or the built-in list)
/// and `-D` definitions.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or a definition is
/// malformed.
pub fn load_sources(args: &SourceArgs) -> Result<Sources> {
    let (declarations, manifest_properties) = match &args.manifest {
        Some(path) => {
            debug!(target: "jarstrap::cli", "loading manifest {path}");
            let manifest = BootstrapManifest::load(path)?;
            (manifest.declarations(), manifest.properties())
        }
        None => (ArtifactDeclarations::builtin(), ProcessProperties::new()),
    };

    let definitions = args
        .define
        .iter()
        .map(|raw| {
            parse_definition(raw).ok_or_else(|| LoaderError::InvalidProperty {
                definition: raw.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Sources {
        declarations,
        properties: manifest_properties.overlay(ProcessProperties::from_pairs(definitions)),
    })
}

/// The local repository directory: `--cache-dir` if given, else the platform
/// default.
///
/// # Errors
///
/// Returns [`LoaderError::NoRepositoryDir`] when neither is available.
pub fn repository_dir(cache_dir: Option<&Utf8Path>, dirs: &dyn BaseDirs) -> Result<Utf8PathBuf> {
    cache_dir
        .map(Utf8Path::to_path_buf)
        .or_else(|| default_repository_dir(dirs))
        .ok_or(LoaderError::NoRepositoryDir)
}

/// Run a parsed command.
///
/// # Errors
///
/// Returns the first error that stops the command.
pub fn run(command: &Command, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    match command {
        Command::Resolve(args) => run_resolve(args, &SystemBaseDirs, stdout, stderr),
        Command::Mirror(args) => run_mirror(args, stdout),
        Command::List(args) => run_list(args, stdout),
    }
}

fn write_stdout(stdout: &mut dyn Write, text: impl std::fmt::Display) -> Result<()> {
    writeln!(stdout, "{text}").map_err(|source| LoaderError::WriteFailed { source })
}

/// Print the selected mirror and its source.
///
/// # Errors
///
/// Returns an error if sources cannot be loaded or output cannot be written.
pub fn run_mirror(args: &SourceArgs, stdout: &mut dyn Write) -> Result<()> {
    let sources = load_sources(args)?;
    let selection = MirrorSelector::default().select(&sources.properties);
    write_stdout(stdout, format_mirror(&selection))
}

/// Print the declared artifacts.
///
/// # Errors
///
/// Returns an error if sources cannot be loaded or output cannot be written.
pub fn run_list(args: &SourceArgs, stdout: &mut dyn Write) -> Result<()> {
    let sources = load_sources(args)?;
    if sources.declarations.is_empty() {
        return Ok(());
    }
    write_stdout(stdout, format_declarations(&sources.declarations))
}

/// Resolve declared artifacts with the HTTP resolver, or preview them.
///
/// # Errors
///
/// Returns an error if sources cannot be loaded, no repository directory is
/// available, any artifact fails, or output cannot be written.
pub fn run_resolve(
    args: &ResolveArgs,
    dirs: &dyn BaseDirs,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    let sources = load_sources(&args.source)?;

    if args.dry_run {
        let plan = sources.dispatcher().plan(&sources.properties);
        return write_stdout(stdout, format_plan(&plan));
    }

    let root = repository_dir(args.cache_dir.as_deref(), dirs)?;
    let resolver = MavenResolver::new(LocalRepository::new(root));
    resolve_with(args, &sources, &resolver, stdout, stderr)
}

/// Resolve `sources` through `resolver` and print the classpath.
///
/// # Errors
///
/// Returns [`LoaderError::Bootstrap`] if any artifact failed, after every
/// request has been submitted and reported.
pub fn resolve_with(
    args: &ResolveArgs,
    sources: &Sources,
    resolver: &dyn ArtifactResolver,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    let report = sources.dispatcher().resolve_all(resolver, &sources.properties);
    if !args.quiet {
        write_stderr_line(
            stderr,
            format!(
                "Resolved {} artifacts from {}",
                report.requested(),
                format_mirror(report.mirror())
            ),
        );
        for line in report_lines(&report) {
            write_stderr_line(stderr, line);
        }
    }

    let mirror = report.mirror().clone();
    let classpath = report.into_classpath()?;
    if args.json {
        write_stdout(stdout, report_json(&mirror, &classpath))
    } else {
        write_stdout(stdout, format_classpath(&classpath)?)
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
