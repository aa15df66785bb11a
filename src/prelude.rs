//! Exports the types most callers need.

pub use crate::cancellation::CancelToken;

pub use crate::classifier::{Classifier, ComponentError};

pub use crate::ensemble::{
    BoostingEnsemble,
    EnsembleStatus,
    Hypothesis,
};

pub use crate::error::BoostError;

pub use crate::progress::{
    ChannelSink,
    ConsoleSink,
    JsonlSink,
    NullSink,
    ProgressEvent,
    ProgressEventKind,
    ProgressSnapshot,
    TrainingProgressSink,
};

pub use crate::sample::{
    Example,
    Label,
    WeightedDataset,
    WeightedExample,
};

pub use crate::stump::DecisionStump;
