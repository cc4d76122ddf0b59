//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use contacts_core::{
    application::ContactInfo,
    domain::{BirthdayCountdown, NO_BIRTHDAY_MARKER},
};

use crate::cli::{
    ListFormat,
    global::{GlobalArgs, OutputFormat},
};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins; `output.format` from config fills in for Auto.
        let requested = match args.output_format {
            OutputFormat::Auto => parse_format(&config.output.format),
            explicit => explicit,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.verbosity.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Data line; written even in quiet mode.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON on stdout.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Render found contacts in the requested format.
    ///
    /// A global `--output-format json` overrides `format`.
    pub fn contacts(&self, contacts: &[ContactInfo], format: ListFormat) -> io::Result<()> {
        let format = if self.resolved_format == OutputFormat::Json {
            ListFormat::Json
        } else {
            format
        };

        match format {
            ListFormat::Json => self.json(contacts),
            ListFormat::List => {
                for c in contacts {
                    self.data(&c.name)?;
                }
                Ok(())
            }
            ListFormat::Csv => self.term.write_str(&csv_text(contacts)?),
            ListFormat::Table => {
                for line in table_lines(contacts) {
                    if line.is_header && !self.no_color {
                        self.data(&line.text.bold().to_string())?;
                    } else {
                        self.data(&line.text)?;
                    }
                }
                Ok(())
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

fn parse_format(raw: &str) -> OutputFormat {
    match raw.to_ascii_lowercase().as_str() {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}

fn countdown_text(c: &ContactInfo) -> String {
    match (&c.days_to_birthday, &c.days_to_birthday_error) {
        (Some(countdown), _) => countdown.to_string(),
        (None, Some(error)) => format!("error: {error}"),
        (None, None) => NO_BIRTHDAY_MARKER.to_owned(),
    }
}

const CSV_HEADER: [&str; 4] = ["name", "phones", "birthday", "days_to_birthday"];

/// CSV document for `contacts`. Phones go in one cell as a JSON array so
/// any phone text survives a round trip.
fn csv_text(contacts: &[ContactInfo]) -> io::Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for c in contacts {
        wtr.write_record([
            c.name.clone(),
            serde_json::to_string(&c.phones)?,
            c.birthday.clone().unwrap_or_default(),
            c.days_to_birthday.as_ref().map(ToString::to_string).unwrap_or_default(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(io::Error::other)
}

struct TableLine {
    text: String,
    is_header: bool,
}

fn table_lines(contacts: &[ContactInfo]) -> Vec<TableLine> {
    let rows: Vec<[String; 4]> = contacts
        .iter()
        .map(|c| {
            [
                c.name.clone(),
                c.phones.join(", "),
                c.birthday.clone().unwrap_or_else(|| NO_BIRTHDAY_MARKER.to_owned()),
                countdown_text(c),
            ]
        })
        .collect();

    let header = ["NAME", "PHONES", "BIRTHDAY", "DAYS"].map(String::from);
    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let render = |cells: &[String; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut lines = vec![TableLine {
        text: render(&header),
        is_header: true,
    }];
    lines.extend(rows.iter().map(|row| TableLine {
        text: render(row),
        is_header: false,
    }));
    lines
}

// ── tests ─────────────────────────────────────────────────────────────────────
