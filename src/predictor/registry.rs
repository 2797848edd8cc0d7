use super::{CancellationHandle, Predictor, Suggestion};

/// Keeps the set of registered predictors and fans prediction requests out to
/// them.
///
/// Each predictor is independent; one producing nothing (or being slow to read
/// its store) has no effect on the others. Predictors are consulted in
/// registration order, the suggestions inside each answer carry no order of
/// their own.
#[derive(Default)]
pub struct PredictorRegistry {
    predictors: Vec<Box<dyn Predictor>>,
}

impl PredictorRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `predictor`, replacing any previously registered predictor
    /// with the same id
    pub fn register(&mut self, predictor: Box<dyn Predictor>) {
        let id = predictor.id().to_string();
        self.unregister(&id);
        self.predictors.push(predictor);
    }

    /// Removes the predictor with `id`, reporting whether one was registered
    pub fn unregister(&mut self, id: &str) -> bool {
        let before = self.predictors.len();
        self.predictors.retain(|predictor| predictor.id() != id);
        before != self.predictors.len()
    }

    /// Number of registered predictors
    pub fn len(&self) -> usize {
        self.predictors.len()
    }

    /// Whether no predictor is registered
    pub fn is_empty(&self) -> bool {
        self.predictors.is_empty()
    }

    /// The registered predictors, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Predictor> {
        self.predictors.iter().map(|predictor| predictor.as_ref())
    }

    /// Mutable access for hosts that deliver feedback notifications
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Predictor>> {
        self.predictors.iter_mut()
    }

    /// Asks every registered predictor for suggestions on `line`, pairing each
    /// non-empty answer with the id of the predictor that produced it
    pub fn predict_all(
        &self,
        line: &str,
        cancellation: &CancellationHandle,
    ) -> Vec<(String, Vec<Suggestion>)> {
        self.predictors
            .iter()
            .filter_map(|predictor| {
                let suggestions = predictor.predict(line, cancellation);
                (!suggestions.is_empty()).then(|| (predictor.id().to_string(), suggestions))
            })
            .collect()
    }
}
