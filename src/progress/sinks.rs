use colored::Colorize;
use serde::Serialize;

use std::io::Write;
use std::sync::mpsc::{self, Receiver, Sender};

use super::snapshot::{HypothesisReport, ProgressSnapshot};
use super::TrainingProgressSink;


const WIDTH: usize = 10;
const PREC_WIDTH: usize = 5;


/// A sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;


impl TrainingProgressSink for NullSink {
    fn on_start(&mut self, _snapshot: &ProgressSnapshot<'_>) {}
    fn on_round(&mut self, _snapshot: &ProgressSnapshot<'_>) {}
    fn on_finished(&mut self, _snapshot: &ProgressSnapshot<'_>) {}
}


/// A sink that prints a colored per-round table to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;


impl ConsoleSink {
    /// A fresh console sink.
    pub fn new() -> Self {
        Self
    }
}


impl TrainingProgressSink for ConsoleSink {
    fn on_start(&mut self, snapshot: &ProgressSnapshot<'_>) {
        println!(
            "boosting {} hypotheses over {} examples\n",
            snapshot.total_rounds,
            snapshot.examples.len(),
        );
        println!(
            "{:>WIDTH$}  {:>WIDTH$}  {:>WIDTH$}  {:>WIDTH$}  {:>WIDTH$}",
            "ROUND".bold().red(),
            "W. ERROR".bold().blue(),
            "MISSED".bold().green(),
            "WEIGHT".bold().yellow(),
            "DONE".bold().cyan(),
        );
    }


    fn on_round(&mut self, snapshot: &ProgressSnapshot<'_>) {
        let weight = snapshot.hypotheses
            .get(snapshot.round.wrapping_sub(1))
            .map(|h| h.weight)
            .unwrap_or(f64::NAN);
        println!(
            "{:>WIDTH$}  {:>WIDTH$.PREC_WIDTH$}  {:>WIDTH$}  \
             {:>WIDTH$.PREC_WIDTH$}  {:>WIDTH$}",
            snapshot.round,
            snapshot.weighted_error.unwrap_or(f64::NAN),
            snapshot.misclassified.unwrap_or(0),
            weight,
            format!("{:.0}%", snapshot.progress),
        );
    }


    fn on_finished(&mut self, snapshot: &ProgressSnapshot<'_>) {
        println!("\n{}", "FINAL WEIGHTS".bold());
        for h in &snapshot.hypotheses {
            println!("  {:<24} {:>WIDTH$.PREC_WIDTH$}", h.name, h.weight);
        }
    }
}


#[derive(Serialize)]
struct JsonlRecord<'a> {
    event: &'static str,
    round: usize,
    total_rounds: usize,
    hypothesis: Option<&'a str>,
    weighted_error: Option<f64>,
    misclassified: Option<usize>,
    validation_error: Option<f64>,
    hypotheses: &'a [HypothesisReport],
    example_weights: Vec<f64>,
    status: &'a str,
    progress: f64,
}


impl<'a> JsonlRecord<'a> {
    fn from_snapshot(event: &'static str, s: &'a ProgressSnapshot<'_>) -> Self {
        Self {
            event,
            round: s.round,
            total_rounds: s.total_rounds,
            hypothesis: s.hypothesis,
            weighted_error: s.weighted_error,
            misclassified: s.misclassified,
            validation_error: s.validation_error,
            hypotheses: &s.hypotheses[..],
            example_weights: s.examples.weights(),
            status: s.status.as_str(),
            progress: s.progress,
        }
    }
}


/// A sink that writes one JSON object per event to a writer.
///
/// Serialization or I/O failures are swallowed; a broken log destination
/// must not take the training run down with it.
pub struct JsonlSink<W> {
    writer: W,
}


impl<W: Write> JsonlSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }


    /// Unwrap the writer, e.g. to flush or close it.
    pub fn into_inner(self) -> W {
        self.writer
    }


    fn emit(&mut self, event: &'static str, snapshot: &ProgressSnapshot<'_>) {
        let record = JsonlRecord::from_snapshot(event, snapshot);
        if let Ok(line) = serde_json::to_string(&record) {
            let _ = self.writer.write_all(line.as_bytes());
            let _ = self.writer.write_all(b"\n");
        }
    }
}


impl<W: Write> TrainingProgressSink for JsonlSink<W> {
    fn on_start(&mut self, snapshot: &ProgressSnapshot<'_>) {
        self.emit("start", snapshot);
    }

    fn on_round(&mut self, snapshot: &ProgressSnapshot<'_>) {
        self.emit("round", snapshot);
    }

    fn on_finished(&mut self, snapshot: &ProgressSnapshot<'_>) {
        self.emit("finished", snapshot);
    }
}


/// Which callback produced a [`ProgressEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressEventKind {
    /// Training is about to begin.
    Started,
    /// One boosting round finished.
    Round,
    /// All rounds finished.
    Finished,
}


/// An owned copy of a snapshot, suitable for crossing a thread boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressEvent {
    /// Which callback produced this event.
    pub kind: ProgressEventKind,
    /// 1-based round index; `0` for the start event.
    pub round: usize,
    /// Total number of rounds.
    pub total_rounds: usize,
    /// Name of the round's hypothesis, when applicable.
    pub hypothesis: Option<String>,
    /// Every hypothesis with its current weight, in ensemble order.
    pub hypotheses: Vec<HypothesisReport>,
    /// The training examples' current weights, in example order.
    pub example_weights: Vec<f64>,
    /// The round's weighted error, when applicable.
    pub weighted_error: Option<f64>,
    /// The round's raw misclassification count.
    pub misclassified: Option<usize>,
    /// The round's unweighted validation error fraction.
    pub validation_error: Option<f64>,
    /// Free-text status line.
    pub status: String,
    /// Completed fraction of the run as a percentage.
    pub progress: f64,
}


impl ProgressEvent {
    fn from_snapshot(kind: ProgressEventKind, s: &ProgressSnapshot<'_>) -> Self {
        Self {
            kind,
            round: s.round,
            total_rounds: s.total_rounds,
            hypothesis: s.hypothesis.map(str::to_string),
            hypotheses: s.hypotheses.clone(),
            example_weights: s.examples.weights(),
            weighted_error: s.weighted_error,
            misclassified: s.misclassified,
            validation_error: s.validation_error,
            status: s.status.clone(),
            progress: s.progress,
        }
    }
}


/// A sink that forwards owned [`ProgressEvent`]s over an `mpsc` channel.
///
/// A dropped receiver is ignored, which keeps the notification path unable
/// to fail the training loop. This is the natural sink for a GUI thread
/// watching a training worker.
pub struct ChannelSink {
    tx: Sender<ProgressEvent>,
}


impl ChannelSink {
    /// Wrap an existing sender.
    pub fn new(tx: Sender<ProgressEvent>) -> Self {
        Self { tx }
    }


    /// Create a sink together with the receiving end of its channel.
    pub fn channel() -> (Self, Receiver<ProgressEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }


    fn send(&self, kind: ProgressEventKind, snapshot: &ProgressSnapshot<'_>) {
        let _ = self.tx.send(ProgressEvent::from_snapshot(kind, snapshot));
    }
}


impl TrainingProgressSink for ChannelSink {
    fn on_start(&mut self, snapshot: &ProgressSnapshot<'_>) {
        self.send(ProgressEventKind::Started, snapshot);
    }

    fn on_round(&mut self, snapshot: &ProgressSnapshot<'_>) {
        self.send(ProgressEventKind::Round, snapshot);
    }

    fn on_finished(&mut self, snapshot: &ProgressSnapshot<'_>) {
        self.send(ProgressEventKind::Finished, snapshot);
    }
}
