use std::collections::HashMap;

/// Entries of one key→value store: short names mapped to their expansion text
pub type StoreEntries = HashMap<String, String>;

/// A readable key→value store backing one trigger prefix.
///
/// Implementations load fresh on every call so that a lookup always reflects
/// the latest contents of the backing data; nothing in this crate caches or
/// writes entries. Loading never fails from the caller's point of view:
/// whatever goes wrong degrades to an empty set of entries.
pub trait Store: Send {
    /// Load all entries, degrading to an empty set when the backing data
    /// cannot be read
    fn load(&self) -> StoreEntries;
}
