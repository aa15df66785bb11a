use serde::Serialize;

use crate::sample::WeightedDataset;


/// Per-hypothesis line of a [`ProgressSnapshot`].
#[derive(Debug, Clone, Serialize)]
pub struct HypothesisReport {
    /// The classifier's name.
    pub name: String,
    /// Its current ensemble weight.
    pub weight: f64,
    /// Whether its component reports itself trained.
    pub trained: bool,
}


/// The structured bag of state handed to a
/// [`TrainingProgressSink`](super::TrainingProgressSink).
///
/// Borrows the training set (example list and current weights) for the
/// duration of the callback; sinks that need to keep data past the call,
/// like [`ChannelSink`](super::ChannelSink), copy out what they want.
#[derive(Debug, Serialize)]
pub struct ProgressSnapshot<'a> {
    /// 1-based index of the round just finished; `0` before the first round.
    pub round: usize,
    /// Total number of rounds, i.e. the number of hypotheses.
    pub total_rounds: usize,
    /// Name of the hypothesis this round trained, when applicable.
    pub hypothesis: Option<&'a str>,
    /// Every hypothesis with its current weight, in ensemble order.
    pub hypotheses: Vec<HypothesisReport>,
    /// The training set, with each example's current weight.
    pub examples: &'a WeightedDataset,
    /// This round's weighted error, when applicable.
    pub weighted_error: Option<f64>,
    /// This round's raw misclassification count (diagnostic only).
    pub misclassified: Option<usize>,
    /// This round's unweighted error fraction on the validation set,
    /// when one was supplied.
    pub validation_error: Option<f64>,
    /// Free-text status line.
    pub status: String,
    /// Completed fraction of the run as a percentage in `[0, 100]`.
    pub progress: f64,
}
