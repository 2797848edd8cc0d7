use super::{CancellationHandle, Predictor, Suggestion};
use crate::{
    pattern::KeyPattern,
    result::{Result, StashlineError, StashlineErrorVariants},
    store::{JsonFileStore, Store},
    trigger::TriggerMatcher,
};

/// Identifier of the stock bookmark predictor
pub const BOOKMARKS_PREDICTOR_ID: &str = "stashline.bookmarks";
/// Identifier of the stock snippet predictor
pub const SNIPPETS_PREDICTOR_ID: &str = "stashline.snippets";

const BOOKMARKS_FILE: &str = "ps-bookmarks.json";
const SNIPPETS_FILE: &str = "ps-snippets.json";

/// A [`Predictor`] that expands `<prefix>:<partial key>` triggers from a
/// key→value store.
///
/// Each instance is immutable configuration over a [`Store`]: a trigger
/// prefix, whether to keep the text typed before the trigger, and the store
/// itself. Every prediction is an independent pass over the line and the
/// store's current contents; nothing is cached between keystrokes.
pub struct StashPredictor {
    id: String,
    name: String,
    description: String,
    matcher: TriggerMatcher,
    prepend_preceding: bool,
    store: Box<dyn Store>,
}

impl StashPredictor {
    /// Configures a predictor that reacts to `<prefix>:` triggers with entries
    /// of `store`. Suggestions replace the whole line with the matched value
    /// unless [`StashPredictor::with_prepend_preceding`] says otherwise.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        prefix: &str,
        store: impl Store + 'static,
    ) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            matcher: TriggerMatcher::new(prefix)?,
            prepend_preceding: false,
            store: Box::new(store),
        })
    }

    /// A builder that keeps the text typed before the trigger in front of
    /// every suggestion, so accepting one preserves the rest of the line
    #[must_use]
    pub fn with_prepend_preceding(mut self, prepend: bool) -> Self {
        self.prepend_preceding = prepend;
        self
    }

    /// The stock `bm:` bookmark predictor over `ps-bookmarks.json` in the home
    /// directory, creating the file on first use. Bookmarks keep the rest of
    /// the typed line.
    pub fn bookmarks() -> Result<Self> {
        Ok(Self::home_stash(
            BOOKMARKS_PREDICTOR_ID,
            "Bookmarks",
            "Suggests bm: bookmarks from ps-bookmarks.json in the home directory",
            "bm",
            BOOKMARKS_FILE,
        )?
        .with_prepend_preceding(true))
    }

    /// The stock `snip:` snippet predictor over `ps-snippets.json` in the home
    /// directory, creating the file on first use. Snippets replace the whole
    /// line.
    pub fn snippets() -> Result<Self> {
        Self::home_stash(
            SNIPPETS_PREDICTOR_ID,
            "Snippets",
            "Suggests snip: snippets from ps-snippets.json in the home directory",
            "snip",
            SNIPPETS_FILE,
        )
    }

    fn home_stash(
        id: &str,
        name: &str,
        description: &str,
        prefix: &str,
        file_name: &str,
    ) -> Result<Self> {
        let home =
            dirs::home_dir().ok_or(StashlineError(StashlineErrorVariants::NoHomeDirectory))?;
        let store = JsonFileStore::with_file(home.join(file_name))?;

        Self::new(id, name, description, prefix, store)
    }
}

impl Predictor for StashPredictor {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    /// Runs the whole pipeline for one keystroke: trigger extraction, store
    /// load, wildcard filter, suggestion formatting. Entries come back in no
    /// particular order.
    fn predict(&self, line: &str, cancellation: &CancellationHandle) -> Vec<Suggestion> {
        if cancellation.is_cancelled() {
            return Vec::new();
        }

        let Some(found) = self.matcher.find(line) else {
            return Vec::new();
        };

        let Ok(pattern) = KeyPattern::for_partial_key(found.partial_key) else {
            return Vec::new();
        };

        let mut suggestions = Vec::new();
        for (key, value) in self.store.load() {
            if value.is_empty() || !pattern.matches(&key) {
                continue;
            }

            let text = if self.prepend_preceding {
                format!("{}{}", found.preceding, value)
            } else {
                value
            };

            suggestions.push(Suggestion {
                value: text,
                label: Some(format!("[{key}]")),
            });
        }

        suggestions
    }
}
