//! Log setup for the `contacts` binary.
//!
//! Events always go to stderr. Stdout carries pager pages, the pager prompt,
//! and CSV or JSON documents, and a log line in between would corrupt them.
//!
//! | Flags    | contacts crates | dependencies |
//! |----------|-----------------|--------------|
//! | `-q`     | error           | error        |
//! | (none)   | warn            | warn         |
//! | `-v`     | info            | warn         |
//! | `-vv`    | debug           | warn         |
//! | `-vvv`   | trace           | trace        |
//!
//! `RUST_LOG`, when set, replaces the table entirely.

use std::io::IsTerminal as _;

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt::MakeWriter, layer::SubscriberExt,
};

use crate::cli::{GlobalArgs, global::Verbosity};

/// Targets that follow `-v`; everything else stays at `warn` until `-vvv`.
const APP_TARGETS: [&str; 3] = ["contacts", "contacts_core", "contacts_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| app_filter(args.verbosity));
    let ansi = !args.no_color && std::io::stderr().is_terminal();

    tracing::subscriber::set_global_default(subscriber(filter, ansi, std::io::stderr))
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn subscriber<W>(filter: EnvFilter, ansi: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .without_time()
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(writer),
    )
}

/// Level for this workspace's own crates.
fn app_level(verbosity: Verbosity) -> LevelFilter {
    if verbosity.quiet {
        return LevelFilter::ERROR;
    }
    match verbosity.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Level for every other target.
fn dependency_level(verbosity: Verbosity) -> LevelFilter {
    let app = app_level(verbosity);
    if app == LevelFilter::ERROR || app == LevelFilter::TRACE {
        app
    } else {
        LevelFilter::WARN
    }
}

fn app_filter(verbosity: Verbosity) -> EnvFilter {
    let level = app_level(verbosity);
    let mut directives = vec![dependency_level(verbosity).to_string()];
    directives.extend(APP_TARGETS.iter().map(|target| format!("{target}={level}")));
    EnvFilter::builder().parse_lossy(directives.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn verbosity(verbose: u8, quiet: bool) -> Verbosity {
        Verbosity { verbose, quiet }
    }

    /// Emit one event per level from an app target and from a foreign one.
    fn logged(v: Verbosity) -> String {
        let captured = Captured::default();
        let sink = captured.clone();
        let sub = subscriber(app_filter(v), false, move || sink.clone());

        tracing::subscriber::with_default(sub, || {
            tracing::error!(target: "contacts_core::service", "core-error");
            tracing::warn!(target: "contacts_adapters::source", "adapter-warn");
            tracing::info!(target: "contacts_core::service", "core-info");
            tracing::debug!(target: "contacts::pager", "pager-debug");
            tracing::trace!(target: "contacts_core::book", "book-trace");
            tracing::info!(target: "config::source", "dep-info");
        });
        captured.text()
    }

    #[test]
    fn default_shows_warnings_only() {
        let text = logged(verbosity(0, false));
        assert!(text.contains("core-error"));
        assert!(text.contains("adapter-warn"));
        assert!(!text.contains("core-info"));
    }

    #[test]
    fn one_v_adds_import_summaries() {
        let text = logged(verbosity(1, false));
        assert!(text.contains("core-info"));
        assert!(!text.contains("pager-debug"));
    }

    #[test]
    fn two_v_keeps_dependencies_at_warn() {
        let text = logged(verbosity(2, false));
        assert!(text.contains("pager-debug"));
        assert!(!text.contains("book-trace"));
        assert!(!text.contains("dep-info"));
    }

    #[test]
    fn three_v_opens_everything() {
        let text = logged(verbosity(3, false));
        assert!(text.contains("book-trace"));
        assert!(text.contains("dep-info"));
    }

    #[test]
    fn quiet_keeps_errors() {
        let text = logged(verbosity(0, true));
        assert!(text.contains("core-error"));
        assert!(!text.contains("adapter-warn"));
    }

    #[test]
    fn log_lines_carry_no_ansi_when_disabled() {
        assert!(!logged(verbosity(0, false)).contains('\u{1b}'));
    }
}
