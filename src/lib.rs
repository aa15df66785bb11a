#![warn(missing_docs)]

//! Discrete AdaBoost over independently trainable binary classifiers.
//!
//! A [`BoostingEnsemble`] owns an ordered list of component classifiers
//! (anything implementing the [`Classifier`] capability) and combines them
//! into a single weighted-vote meta-classifier. Training runs the classic
//! AdaBoost loop, one round per component in ensemble order: each round
//! trains its component on the current example-weight distribution, then
//! shrinks the weights of the examples that component already gets right,
//! so the next component concentrates on the leftovers.
//!
//! The engine is deliberately narrow. It does not know how a component
//! trains internally, how features were extracted, or how results get
//! displayed; it consumes components through [`Classifier`], reports
//! progress through a [`TrainingProgressSink`], and honors a
//! [`CancelToken`] at round boundaries.
//!
//! ```
//! use voteboost::prelude::*;
//!
//! # fn demo(examples: Vec<Example>) -> Result<(), BoostError> {
//! let mut training = WeightedDataset::from_examples(examples);
//! let validation = WeightedDataset::from_examples(Vec::new());
//!
//! let mut ensemble = BoostingEnsemble::new();
//! ensemble.add_hypothesis(Box::new(DecisionStump::new("stump-1")));
//! ensemble.add_hypothesis(Box::new(DecisionStump::new("stump-2")));
//!
//! let token = CancelToken::new();
//! ensemble.train(&mut training, &validation, &token, &mut NullSink)?;
//! # Ok(())
//! # }
//! ```

pub mod cancellation;
pub mod classifier;
pub mod ensemble;
pub mod error;
pub mod prelude;
pub mod progress;
pub mod sample;
pub mod stump;

pub use cancellation::CancelToken;
pub use classifier::{Classifier, ComponentError};
pub use ensemble::{
    BoostingEnsemble,
    EnsembleStatus,
    Hypothesis,
    PERFECT_TOLERANCE,
    PLACEHOLDER_WEIGHT,
};
pub use error::BoostError;
pub use progress::{
    ChannelSink,
    ConsoleSink,
    HypothesisReport,
    JsonlSink,
    NullSink,
    ProgressEvent,
    ProgressEventKind,
    ProgressSnapshot,
    TrainingProgressSink,
};
pub use sample::{Example, Label, WeightedDataset, WeightedExample};
pub use stump::DecisionStump;
