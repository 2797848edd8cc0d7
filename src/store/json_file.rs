use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{Store, StoreEntries};
use crate::result::{Result, StashlineError, StashlineErrorVariants};

/// A store backed by a single JSON file containing one object of string pairs:
///
/// ```json
/// { "gh": "https://github.com", "todo": "notepad $HOME/todo.txt" }
/// ```
///
/// The file is read in full on every [`Store::load`] call. Duplicate keys in
/// the object resolve to the value listed last. The store never writes to the
/// file after [`JsonFileStore::with_file`] has made sure it exists.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Uses `path` as the backing file without touching the filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Associates the store with `file`, creating parent directories and an
    /// empty file when absent.
    ///
    /// An existing file is left exactly as it is, whatever it contains.
    pub fn with_file(file: PathBuf) -> Result<Self> {
        if let Some(base_dir) = file.parent() {
            fs::create_dir_all(base_dir)?;
        }
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)?;

        Ok(Self { path: file })
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the backing file, surfacing the cause of a failure.
    ///
    /// A blank file counts as an empty store rather than a parse error, since
    /// that is how the file is bootstrapped.
    pub fn try_load(&self) -> Result<StoreEntries> {
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(StoreEntries::new());
        }

        serde_json::from_str(&text)
            .map_err(|err| StashlineError(StashlineErrorVariants::MalformedStore(err)))
    }
}

impl Store for JsonFileStore {
    /// Fail-open wrapper around [`JsonFileStore::try_load`]: a missing,
    /// unreadable or malformed file yields zero entries instead of an error,
    /// so an interactive caller never has anything to report mid-keystroke.
    fn load(&self) -> StoreEntries {
        match self.try_load() {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "store unreadable, no entries");
                StoreEntries::new()
            }
        }
    }
}
