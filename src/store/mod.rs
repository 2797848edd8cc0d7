mod base;
mod json_file;

pub use base::{Store, StoreEntries};
pub use json_file::JsonFileStore;
