//! Observational progress reporting for a training run.
//!
//! The training loop emits three kinds of events through a
//! [`TrainingProgressSink`]: one at the start, one per boosting round, and
//! one after the final round. The events are fire-and-forget; nothing a sink
//! does can fail or block the loop, and none of the reported data feeds back
//! into the algorithm.

mod sinks;
mod snapshot;

pub use sinks::{
    ChannelSink,
    ConsoleSink,
    JsonlSink,
    NullSink,
    ProgressEvent,
    ProgressEventKind,
};
pub use snapshot::{HypothesisReport, ProgressSnapshot};


/// Receiver of training progress events.
///
/// Implementations must not panic; the training loop calls them directly.
/// Sinks that talk to fallible or slow transports should swallow their own
/// failures, the way [`ChannelSink`] and [`JsonlSink`] do.
pub trait TrainingProgressSink {
    /// Training is about to begin. Weights in the snapshot are the
    /// placeholders.
    fn on_start(&mut self, snapshot: &ProgressSnapshot<'_>);

    /// One boosting round finished: the snapshot carries the round's
    /// weighted error, raw misclassification count, and the weight just
    /// assigned to the round's hypothesis.
    fn on_round(&mut self, snapshot: &ProgressSnapshot<'_>);

    /// Every round finished and the ensemble is trained; the snapshot lists
    /// every hypothesis with its final weight.
    fn on_finished(&mut self, snapshot: &ProgressSnapshot<'_>);
}
