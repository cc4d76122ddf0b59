//! Contact source adapters.

mod entry;
mod file;
mod memory;

pub use entry::{ContactEntry, ContactFile};
pub use file::{FileFormat, FileSource};
pub use memory::MemorySource;
