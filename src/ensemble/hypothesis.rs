use serde::Serialize;

use crate::classifier::Classifier;
use crate::sample::{Example, Label};

use super::boosting::PLACEHOLDER_WEIGHT;


/// Aggregate training state of a [`BoostingEnsemble`](super::BoostingEnsemble).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnsembleStatus {
    /// Not trained, or a previous training run was aborted;
    /// hypothesis weights are meaningless.
    Untrained,
    /// A full training run completed; weights are valid.
    Trained,
}


/// One component classifier together with its ensemble weight.
///
/// The weight starts at the placeholder `1.0` when the hypothesis is added
/// and is overwritten every time the ensemble is (re)trained. It may be
/// zero (a near-perfect component, see
/// [`PERFECT_TOLERANCE`](super::PERFECT_TOLERANCE)) or negative (a
/// component worse than random), but never infinite or NaN.
pub struct Hypothesis {
    classifier: Box<dyn Classifier>,
    weight: f64,
}


impl Hypothesis {
    /// Wrap a classifier with the placeholder weight.
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self { classifier, weight: PLACEHOLDER_WEIGHT }
    }


    /// The component classifier.
    #[inline]
    pub fn classifier(&self) -> &dyn Classifier {
        &*self.classifier
    }


    /// Mutable access to the component classifier, e.g. to call
    /// [`configure_dimensions`](crate::Classifier::configure_dimensions)
    /// before training.
    #[inline]
    pub fn classifier_mut(&mut self) -> &mut dyn Classifier {
        &mut *self.classifier
    }


    /// The current ensemble weight.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }


    #[inline]
    pub(super) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }


    #[inline]
    pub(super) fn into_classifier(self) -> Box<dyn Classifier> {
        self.classifier
    }


    /// Whether the component reports itself trained.
    #[inline]
    pub fn is_trained(&self) -> bool {
        self.classifier.is_trained()
    }


    /// The component's name.
    #[inline]
    pub fn name(&self) -> &str {
        self.classifier.name()
    }


    /// Delegate prediction to the component.
    #[inline]
    pub fn classify(&self, example: &Example) -> Label {
        self.classifier.classify(example)
    }


    /// Delegate scoring to the component.
    #[inline]
    pub fn score(&self, example: &Example) -> f64 {
        self.classifier.score(example)
    }
}


impl std::fmt::Debug for Hypothesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hypothesis")
            .field("name", &self.name())
            .field("weight", &self.weight)
            .field("trained", &self.is_trained())
            .finish()
    }
}
