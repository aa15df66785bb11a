//! Errors surfaced by the boosting engine.

use thiserror::Error;

use crate::classifier::ComponentError;


/// Failure modes of [`BoostingEnsemble::train`](crate::BoostingEnsemble::train).
#[derive(Debug, Error)]
pub enum BoostError {
    /// The cancellation token was set mid-training.
    /// Weights committed by already-completed rounds stand, but the
    /// ensemble stays untrained and must not be used for prediction.
    #[error("training was cancelled")]
    Cancelled,

    /// `train` was called on an ensemble with no hypotheses.
    #[error("cannot train an ensemble with no hypotheses")]
    EmptyEnsemble,

    /// `train` was called with an empty training set.
    #[error("cannot train on an empty dataset")]
    EmptyDataset,

    /// A component classifier's own training procedure failed.
    /// Never retried; the ensemble is left untrained.
    #[error("component classifier `{name}` failed to train")]
    Component {
        /// Name of the failing classifier.
        name: String,
        /// The component's error, propagated verbatim.
        #[source]
        source: ComponentError,
    },
}
