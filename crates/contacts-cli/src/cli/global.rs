//! Flags shared by every subcommand, flattened into [`super::Cli`].
//!
//! Grouped under three help headings: where the contacts come from, how
//! results are printed, and how much gets logged to stderr.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

const CONTACTS: &str = "Contacts";
const OUTPUT: &str = "Output";
const LOGGING: &str = "Logging";

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Contacts book to load, `.toml` or `.json`.
    ///
    /// Falls back to `file` under `[contacts]` in the config.
    #[arg(
        short = 'f',
        long,
        global = true,
        env = "CONTACTS_FILE",
        value_name = "BOOK",
        help_heading = CONTACTS
    )]
    pub file: Option<PathBuf>,

    /// Config file to use instead of the per-user one.
    #[arg(short = 'c', long, global = true, value_name = "FILE", help_heading = CONTACTS)]
    pub config: Option<PathBuf>,

    /// How results are printed on stdout.
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help_heading = OUTPUT
    )]
    pub output_format: OutputFormat,

    /// Plain output without ANSI colors. Also set by `NO_COLOR`.
    #[arg(long, global = true, env = "NO_COLOR", help_heading = OUTPUT)]
    pub no_color: bool,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// The `-v` / `-q` pair. Logs go to stderr only, so neither flag changes
/// what lands on stdout apart from status lines hidden by `-q`.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct Verbosity {
    /// Log more: `-v` for import summaries, `-vv` for per-command detail,
    /// `-vvv` for everything including dependencies.
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = LOGGING)]
    pub verbose: u8,

    /// Log errors only and hide status lines.
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = LOGGING)]
    pub quiet: bool,
}

/// Rendering for everything except raw contact data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colored text.
    Human,
    Plain,
    /// JSON documents.
    Json,
}
