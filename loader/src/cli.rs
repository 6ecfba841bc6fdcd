//! CLI argument definitions for `jarstrap`.
//!
//! Kept apart from the entrypoint so the binary stays focused on
//! orchestration and the parser can be tested directly.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Resolve a host's runtime library artifacts from a Maven repository.
#[derive(Parser, Debug, Default)]
#[command(name = "jarstrap")]
#[command(version, about)]
#[command(long_about = concat!(
    "Resolve a host's runtime library artifacts from a Maven repository.\n\n",
    "Each declared artifact is fetched into a local repository unless it is ",
    "already there, and the resulting classpath is printed on stdout. Any ",
    "artifact that fails to resolve makes the whole run fail.\n\n",
    "The repository mirror is taken from the PAPER_DEFAULT_CENTRAL_REPOSITORY ",
    "environment variable, then the ",
    "org.bukkit.plugin.java.LibraryLoader.centralURL property, then the ",
    "built-in default.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Resolve the built-in artifacts:\n",
    "    $ jarstrap\n\n",
    "  Resolve a manifest through an internal mirror:\n",
    "    $ jarstrap --manifest jarstrap.toml \\\n",
    "        -D org.bukkit.plugin.java.LibraryLoader.centralURL=https://mirror.internal/maven2\n\n",
    "  Show which mirror would be used:\n",
    "    $ jarstrap mirror\n\n",
    "  Preview requests without downloading:\n",
    "    $ jarstrap --dry-run\n",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Resolve arguments (used when no subcommand is given).
    #[command(flatten)]
    pub resolve: ResolveArgs,
}

impl Cli {
    /// The subcommand to run, defaulting to `resolve` with the top-level
    /// arguments.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Resolve(self.resolve))
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve declared artifacts (default when no subcommand given).
    Resolve(ResolveArgs),

    /// Print the selected repository mirror and where it came from.
    Mirror(SourceArgs),

    /// List declared artifacts.
    List(SourceArgs),
}

/// Where declarations and properties come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Manifest declaring artifacts and properties [default: built-in list].
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<Utf8PathBuf>,

    /// Set a process property (repeatable), e.g. -D key=value.
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub define: Vec<String>,
}

/// Arguments for the resolve command.
#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Declaration and property sources.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Local repository directory [default: platform-specific].
    #[arg(short, long, value_name = "DIR")]
    pub cache_dir: Option<Utf8PathBuf>,

    /// Show the resolution plan and exit without downloading.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}
