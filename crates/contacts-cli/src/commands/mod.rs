//! Command handlers, one module per subcommand.

use std::path::PathBuf;

use tracing::{debug, instrument};

use contacts_adapters::FileSource;
use contacts_core::application::ContactService;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod birthday;
pub mod browse;
pub mod completions;
pub mod config;
pub mod find;
pub mod init;

/// `--file` first, then `contacts.file` from config.
fn contacts_file(global: &GlobalArgs, config: &AppConfig) -> CliResult<PathBuf> {
    global
        .file
        .clone()
        .or_else(|| config.contacts.file.clone())
        .ok_or(CliError::NoContactsFile)
}

/// Build a service with the configured contacts file already imported.
#[instrument(skip_all)]
pub(crate) fn load_service(global: &GlobalArgs, config: &AppConfig) -> CliResult<ContactService> {
    let path = contacts_file(global, config)?;
    debug!(path = %path.display(), "Loading contacts");

    let mut service = ContactService::new();
    service.import(&FileSource::new(path))?;
    Ok(service)
}
