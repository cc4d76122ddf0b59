//! `contacts find`: prefix search over names.

use tracing::instrument;

use crate::{
    cli::{FindArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(prefix = %args.prefix))]
pub fn execute(
    args: FindArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::load_service(&global, &config)?;
    let found = service.find(&args.prefix);

    if found.is_empty() {
        output.warning(&format!("No contacts start with '{}'", args.prefix))?;
    }
    output.contacts(&found, args.format)?;
    Ok(())
}
