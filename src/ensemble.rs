//! The boosting ensemble: an ordered list of weighted hypotheses plus the
//! discrete-AdaBoost training loop that assigns the weights.

mod boosting;
mod hypothesis;

pub use boosting::{BoostingEnsemble, PERFECT_TOLERANCE, PLACEHOLDER_WEIGHT};
pub use hypothesis::{EnsembleStatus, Hypothesis};
