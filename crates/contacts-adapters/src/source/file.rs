//! Read-only contacts file source (TOML or JSON).

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use contacts_core::{
    application::{ApplicationError, ports::ContactSource},
    domain::Record,
    error::ContactsResult,
};

use super::entry::ContactFile;

/// Encoding of a contacts file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// Pick a format from the file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Loads contacts from a file on disk. Never writes.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: FileFormat,
}

impl FileSource {
    /// Create a source, inferring the format from the extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = FileFormat::from_path(&path);
        Self { path, format }
    }

    /// Override the inferred format.
    pub fn with_format(mut self, format: FileFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, text: &str) -> ContactsResult<ContactFile> {
        let parsed: Result<ContactFile, String> = match self.format {
            FileFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            FileFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| {
            ApplicationError::SourceFormat {
                location: self.describe(),
                reason,
            }
            .into()
        })
    }
}

impl ContactSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> ContactsResult<Vec<Record>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| map_io_error(&self.path, e))?;
        debug!(bytes = text.len(), format = ?self.format, "Contacts file read");

        self.parse(&text)?.into_records(&self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn map_io_error(path: &Path, e: io::Error) -> contacts_core::error::ContactsError {
    ApplicationError::SourceUnavailable {
        location: path.display().to_string(),
        reason: format!("Failed to read file: {e}"),
    }
    .into()
}
