//! Training data for the boosting engine.
//!
//! A [`WeightedDataset`] is an ordered, fixed-size collection of
//! [`WeightedExample`]s. The boosting loop re-weights the examples every
//! round; component classifiers are free to read the current weights during
//! their own training, which is the mechanism that biases later learners
//! toward previously-misclassified examples.

mod example;
mod weighted;

pub use example::{Example, Label};
pub use weighted::{WeightedDataset, WeightedExample};
