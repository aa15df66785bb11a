//! The capability the boosting engine requires from a component classifier.

use crate::sample::{Example, Label, WeightedDataset};


/// Error type produced by a component classifier.
///
/// The engine never inspects these; a component failure is wrapped in
/// [`BoostError::Component`](crate::error::BoostError::Component) and
/// propagated verbatim to the caller.
pub type ComponentError = Box<dyn std::error::Error + Send + Sync + 'static>;


/// An independently trainable binary classifier.
///
/// Every component in a [`BoostingEnsemble`](crate::BoostingEnsemble) is
/// consumed uniformly through this trait; the engine never special-cases
/// concrete classifier kinds. Implementations that care about the shape of
/// the data (a feed-forward network binding its layer sizes, say) can
/// override [`configure_dimensions`](Self::configure_dimensions), which the
/// ensemble owner calls during setup.
///
/// The `Send` bound exists because training runs on a dedicated worker
/// thread; the ensemble, and therefore every component, must be movable
/// across threads.
pub trait Classifier: Send {
    /// Train this classifier on `training`, optionally consulting
    /// `validation`.
    ///
    /// Implementations are free to read the training examples' *current*
    /// weights; during boosting those weights emphasize the examples earlier
    /// hypotheses got wrong.
    fn train(
        &mut self,
        training: &WeightedDataset,
        validation: &WeightedDataset,
    ) -> Result<(), ComponentError>;


    /// Predict the label of `example`.
    fn classify(&self, example: &Example) -> Label;


    /// Continuous confidence for `example`, by convention in `[0, 1]`
    /// with values above `0.5` leaning positive.
    fn score(&self, example: &Example) -> f64;


    /// Whether [`train`](Self::train) has completed successfully at least
    /// once. Untrained classifiers are skipped by the ensemble's
    /// prediction paths.
    fn is_trained(&self) -> bool;


    /// A human-readable name, used in progress reports and errors.
    fn name(&self) -> &str;


    /// Bind input/output dimensionality before training.
    /// The default does nothing; kinds without a fixed shape ignore it.
    fn configure_dimensions(&mut self, _n_inputs: usize, _n_outputs: usize) {}
}
