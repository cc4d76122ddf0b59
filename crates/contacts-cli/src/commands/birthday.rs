//! `contacts birthday`: days until a contact's next birthday.

use serde_json::json;
use tracing::instrument;

use contacts_core::domain::BirthdayCountdown;

use crate::{
    cli::{BirthdayArgs, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: BirthdayArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::load_service(&global, &config)?;
    let countdown = service.birthday(&args.name)?;

    if output.format() == OutputFormat::Json {
        output.json(&json!({ "name": args.name, "countdown": countdown }))?;
    } else {
        output.data(&describe(&args.name, countdown))?;
    }
    Ok(())
}

fn describe(name: &str, countdown: BirthdayCountdown) -> String {
    match countdown {
        BirthdayCountdown::Days(0) => format!("{name}: birthday is today"),
        BirthdayCountdown::Days(1) => format!("{name}: 1 day to birthday"),
        BirthdayCountdown::Days(days) => format!("{name}: {days} days to birthday"),
        BirthdayCountdown::LongLivedPerson => format!("{name}: {countdown}"),
    }
}
