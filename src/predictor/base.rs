use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serde::{Deserialize, Serialize};

/// Suggestion returned by a [`Predictor`]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Replacement text offered for the current line
    pub value: String,
    /// Optional annotation shown alongside the suggestion, never inserted
    pub label: Option<String>,
}

/// Feedback kinds a host can offer back to a predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Suggestions of this predictor were rendered to the user
    SuggestionDisplayed,
    /// A suggestion of this predictor was taken into the line
    SuggestionAccepted,
    /// The user submitted a command line
    CommandLineAccepted,
    /// A submitted command line finished executing
    CommandLineExecuted,
}

/// Cooperative cancellation flag shared between a host and in-flight
/// predictions.
///
/// Cloning hands out another handle to the same flag. Predictors check the
/// flag once before doing any I/O and return nothing when it is set; there is
/// no mid-read interruption, the store files are small and local.
#[derive(Debug, Clone, Default)]
pub struct CancellationHandle(Arc<AtomicBool>);

impl CancellationHandle {
    /// Create a fresh, uncancelled handle
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Ask predictions holding a clone of this handle to bail out
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether [`CancellationHandle::cancel`] has been called on this flag
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// A provider of inline suggestions for a partially typed line.
///
/// This is the boundary an embedding shell or editor talks to: it supplies the
/// line as plain text and gets `(text, label)` pairs back, without the
/// predictor depending on any host types. The feedback hooks exist so a host
/// can wire its notifications through; the stock predictors consume none of
/// them.
pub trait Predictor: Send {
    /// Stable unique identifier, used for registration bookkeeping
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Short description of what this predictor suggests
    fn description(&self) -> &str;

    /// Produce suggestions for `line`.
    ///
    /// Never fails: a missing trigger, an unreadable store or a cancelled
    /// handle all yield an empty list.
    fn predict(&self, line: &str, cancellation: &CancellationHandle) -> Vec<Suggestion>;

    /// Whether this predictor wants `kind` feedback delivered at all
    fn accepts_feedback(&self, _kind: FeedbackKind) -> bool {
        false
    }

    /// `count` suggestions from the last prediction were shown to the user
    fn on_suggestion_displayed(&mut self, _count: usize) {}

    /// One of this predictor's suggestions was accepted into the line
    fn on_suggestion_accepted(&mut self, _suggestion: &str) {}

    /// A command line was submitted; `history` holds the latest lines
    fn on_command_line_accepted(&mut self, _history: &[String]) {}

    /// A submitted command line finished executing
    fn on_command_line_executed(&mut self, _command_line: &str, _success: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_is_visible_through_clones() {
        let handle = CancellationHandle::new();
        let observer = handle.clone();
        assert!(!observer.is_cancelled());

        handle.cancel();
        assert!(observer.is_cancelled());
    }
}
