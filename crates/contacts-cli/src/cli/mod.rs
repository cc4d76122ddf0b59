//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "contacts",
    bin_name = "contacts",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Browse a validated contacts book",
    long_about = "Loads contacts from a TOML or JSON file into an in-memory \
                  address book, then pages through it, searches it by name \
                  prefix, or counts down to birthdays.",
    after_help = "EXAMPLES:\n\
        \x20 contacts --file book.toml browse --page-size 2\n\
        \x20 contacts --file book.toml find Bo\n\
        \x20 contacts --file book.toml birthday Bob\n\
        \x20 contacts completions bash > /usr/share/bash-completion/completions/contacts",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Page through every contact.
    #[command(
        visible_alias = "ls",
        about = "Page through contacts",
        after_help = "Press ENTER for the next page; type anything else to stop.\n\n\
            EXAMPLES:\n\
            \x20 contacts -f book.toml browse\n\
            \x20 contacts -f book.toml browse --page-size 5\n\
            \x20 contacts -f book.toml browse --no-pause"
    )]
    Browse(BrowseArgs),

    /// Find contacts whose name starts with a prefix.
    #[command(
        visible_alias = "search",
        about = "Find contacts by name prefix",
        after_help = "EXAMPLES:\n\
            \x20 contacts -f book.toml find Bo\n\
            \x20 contacts -f book.toml find B --format csv"
    )]
    Find(FindArgs),

    /// Days until a contact's next birthday.
    #[command(
        visible_alias = "bday",
        about = "Days until a contact's birthday",
        after_help = "EXAMPLES:\n\
            \x20 contacts -f book.toml birthday Bob"
    )]
    Birthday(BirthdayArgs),

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 contacts init           # default location\n\
            \x20 contacts init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 contacts completions bash > ~/.local/share/bash-completion/completions/contacts\n\
            \x20 contacts completions zsh  > ~/.zfunc/_contacts\n\
            \x20 contacts completions fish > ~/.config/fish/completions/contacts.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 contacts config get pager.page_size\n\
            \x20 contacts config list\n\
            \x20 contacts config path"
    )]
    Config(ConfigCommands),
}

// ── browse ────────────────────────────────────────────────────────────────────

/// Arguments for `contacts browse`.
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Records per page (defaults to `pager.page_size`).
    #[arg(
        short = 'n',
        long = "page-size",
        value_name = "N",
        help = "Contacts per page"
    )]
    pub page_size: Option<usize>,

    /// Print every page without waiting for input.
    #[arg(long = "no-pause", help = "Print all pages without prompting")]
    pub no_pause: bool,
}

// ── find ──────────────────────────────────────────────────────────────────────

/// Arguments for `contacts find`.
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Case-sensitive name prefix.
    #[arg(value_name = "PREFIX", help = "Name prefix (case-sensitive)")]
    pub prefix: String,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `find` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── birthday ──────────────────────────────────────────────────────────────────

/// Arguments for `contacts birthday`.
#[derive(Debug, Args)]
pub struct BirthdayArgs {
    /// Exact contact name.
    #[arg(value_name = "NAME", help = "Contact name (exact match)")]
    pub name: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `contacts init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `contacts completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `contacts config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `pager.page_size`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
