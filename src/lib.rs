//! # stashline
//! Trigger-prefix suggestion lookup for interactive shells
//!
//! When the line being typed ends in a recognized trigger such as `bm:gh` or
//! `snip:lla`, a [`StashPredictor`] looks the partial key up in a JSON
//! key→value store file and returns the matching expansions as inline
//! suggestions. The crate is host-agnostic: an embedding shell or editor
//! hands over the current line and gets `(text, label)` pairs back through
//! the [`Predictor`] trait, nothing more.
//!
//! ## Example
//!
//! ```rust
//! use stashline::{CancellationHandle, Predictor, StashPredictor, Store, StoreEntries};
//!
//! struct FixedStore;
//!
//! impl Store for FixedStore {
//!     fn load(&self) -> StoreEntries {
//!         StoreEntries::from([("gh".to_string(), "https://github.com".to_string())])
//!     }
//! }
//!
//! let predictor = StashPredictor::new("demo", "Demo", "demo bookmarks", "bm", FixedStore)
//!     .unwrap()
//!     .with_prepend_preceding(true);
//!
//! let suggestions = predictor.predict("git clone bm:gh", &CancellationHandle::new());
//! assert_eq!(suggestions[0].value, "git clone https://github.com");
//! assert_eq!(suggestions[0].label.as_deref(), Some("[gh]"));
//! ```
//!
//! The stock deployment registers two predictors over files in the home
//! directory: [`StashPredictor::bookmarks`] (`bm:` → `ps-bookmarks.json`,
//! keeping the rest of the typed line) and [`StashPredictor::snippets`]
//! (`snip:` → `ps-snippets.json`, replacing the line). Store files are read
//! fresh on every keystroke and never written after first-run bootstrap, and
//! every failure along the prediction path degrades to "no suggestions"
//! instead of disturbing the terminal.
mod pattern;
pub use pattern::KeyPattern;

mod predictor;
pub use predictor::{
    CancellationHandle, FeedbackKind, Predictor, PredictorRegistry, StashPredictor, Suggestion,
    BOOKMARKS_PREDICTOR_ID, SNIPPETS_PREDICTOR_ID,
};

mod result;
pub use result::{Result, StashlineError};

mod store;
pub use store::{JsonFileStore, Store, StoreEntries};

mod trigger;
pub use trigger::{TriggerMatch, TriggerMatcher};
