//! `contacts browse`: page through every contact.

use std::io;

use tracing::{info, instrument};

use crate::{
    cli::{BrowseArgs, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    pager::{Pager, PagerOutcome},
};

#[instrument(skip_all, fields(page_size = ?args.page_size, no_pause = args.no_pause))]
pub fn execute(
    args: BrowseArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::load_service(&global, &config)?;
    let page_size = args.page_size.unwrap_or(config.pager.page_size);
    let pages = service.pages(page_size)?;

    if output.format() == OutputFormat::Json {
        let all: Vec<_> = pages.collect();
        output.json(&all)?;
        return Ok(());
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut pager = Pager::new(stdin, stdout);
    if args.no_pause {
        pager = pager.without_pause();
    }

    let outcome = pager
        .run(pages)
        .with_cli_context(|| "Failed to write page")?;

    match outcome {
        PagerOutcome::Finished { pages } => info!(pages, "Browsed every page"),
        PagerOutcome::Stopped { pages } => info!(pages, "Browsing stopped early"),
    }
    Ok(())
}
