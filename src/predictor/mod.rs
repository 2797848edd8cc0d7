mod base;
mod registry;
mod stash;

pub use base::{CancellationHandle, FeedbackKind, Predictor, Suggestion};
pub use registry::PredictorRegistry;
pub use stash::{StashPredictor, BOOKMARKS_PREDICTOR_ID, SNIPPETS_PREDICTOR_ID};
