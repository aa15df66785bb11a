//! Provides [`BoostingEnsemble`]: discrete AdaBoost by Freund & Schapire,
//! run over a fixed, ordered list of component classifiers.

use crate::cancellation::CancelToken;
use crate::classifier::Classifier;
use crate::error::BoostError;
use crate::progress::{
    HypothesisReport,
    ProgressSnapshot,
    TrainingProgressSink,
};
use crate::sample::{Example, Label, WeightedDataset};

use super::hypothesis::{EnsembleStatus, Hypothesis};


/// Weighted errors below this threshold count as a perfect hypothesis.
///
/// The canonical weight `ln((1 - eps) / eps)` diverges as `eps -> 0`;
/// a hypothesis this accurate gets weight `0` instead, removing its
/// influence from the vote rather than letting it dominate unboundedly.
/// The value is an empirically chosen tolerance, kept away from exact
/// zero to dodge float-equality pitfalls, and is part of the engine's
/// observable behavior.
pub const PERFECT_TOLERANCE: f64 = 0.005;

/// The weight a hypothesis carries before training assigns a real one.
pub const PLACEHOLDER_WEIGHT: f64 = 1.0;


/// A weighted-vote meta-classifier over independently trainable binary
/// classifiers, trained with the classic discrete AdaBoost weight-update
/// rule.
///
/// The ensemble owns an *ordered* list of [`Hypothesis`] entries. Training
/// runs one boosting round per hypothesis, in ensemble order; the order is
/// never re-selected by performance, and it stays observable afterwards
/// because tied votes resolve in favor of the label seen first.
///
/// # Example
/// ```
/// use voteboost::prelude::*;
///
/// # fn demo(examples: Vec<Example>, held_out: Example)
/// #     -> Result<(), BoostError> {
/// let mut training = WeightedDataset::from_examples(examples);
/// let validation = WeightedDataset::from_examples(Vec::new());
///
/// let mut ensemble = BoostingEnsemble::new();
/// ensemble.add_hypothesis(Box::new(DecisionStump::new("stump-1")));
/// ensemble.add_hypothesis(Box::new(DecisionStump::new("stump-2")));
/// ensemble.add_hypothesis(Box::new(DecisionStump::new("stump-3")));
///
/// let token = CancelToken::new();
/// let mut sink = ConsoleSink::new();
/// ensemble.train(&mut training, &validation, &token, &mut sink)?;
///
/// let predicted = ensemble.classify(&held_out);
/// let confidence = ensemble.score(&held_out);
/// println!("{predicted:?} (confidence {confidence:.3})");
/// # Ok(())
/// # }
/// ```
pub struct BoostingEnsemble {
    hypotheses: Vec<Hypothesis>,
    status: EnsembleStatus,
}


impl Default for BoostingEnsemble {
    fn default() -> Self {
        Self::new()
    }
}


impl BoostingEnsemble {
    /// An empty, untrained ensemble.
    pub fn new() -> Self {
        Self {
            hypotheses: Vec::new(),
            status: EnsembleStatus::Untrained,
        }
    }


    /// Append a component classifier with the placeholder weight.
    /// Does not trigger retraining.
    pub fn add_hypothesis(&mut self, classifier: Box<dyn Classifier>) {
        self.hypotheses.push(Hypothesis::new(classifier));
    }


    /// Remove the `index`-th hypothesis and return its classifier.
    ///
    /// Every remaining hypothesis is reset to the placeholder weight and
    /// the ensemble drops back to [`EnsembleStatus::Untrained`]: weights
    /// computed against the old roster are meaningless, and leaving them
    /// in place would make a stale ensemble look valid.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove_hypothesis(&mut self, index: usize) -> Box<dyn Classifier> {
        let removed = self.hypotheses.remove(index);
        for h in &mut self.hypotheses {
            h.set_weight(PLACEHOLDER_WEIGHT);
        }
        self.status = EnsembleStatus::Untrained;
        removed.into_classifier()
    }


    /// The hypotheses in ensemble order.
    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses[..]
    }


    /// Mutable access to the `index`-th hypothesis, e.g. to configure a
    /// component's dimensionality before training. Must not be used to
    /// mutate a component while a training call is in flight; the borrow
    /// checker enforces exactly that.
    pub fn hypothesis_mut(&mut self, index: usize) -> Option<&mut Hypothesis> {
        self.hypotheses.get_mut(index)
    }


    /// The number of hypotheses.
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Whether the ensemble holds no hypotheses.
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Current aggregate training status.
    pub fn status(&self) -> EnsembleStatus {
        self.status
    }


    /// Run discrete AdaBoost: one boosting round per hypothesis, in
    /// ensemble order.
    ///
    /// Each round trains its component on `training` (whose example
    /// weights at that point emphasize what earlier rounds got wrong),
    /// measures the weighted error `eps`, shrinks the weight of every
    /// correctly classified example by `eps / (1 - eps)`, re-normalizes,
    /// and assigns the hypothesis the weight `ln((1 - eps) / eps)`.
    /// A near-perfect round (`eps < `[`PERFECT_TOLERANCE`]) assigns
    /// weight `0` and leaves the example weights alone.
    ///
    /// `eps > 0.5` is *not* rejected: a component worse than random
    /// silently receives a negative weight, inverting its vote. Supplying
    /// components no worse than random is the caller's responsibility.
    ///
    /// `token` is polled at the top of every round and again between the
    /// component's training call and the weight update. On cancellation
    /// the call returns [`BoostError::Cancelled`]; weights committed by
    /// completed rounds stand, later hypotheses keep the placeholder, and
    /// the ensemble stays untrained.
    ///
    /// Component training failures propagate as
    /// [`BoostError::Component`], also leaving the ensemble untrained.
    ///
    /// `sink` receives one `on_start`, one `on_round` per round, and one
    /// `on_finished`; the events are purely observational.
    pub fn train(
        &mut self,
        training: &mut WeightedDataset,
        validation: &WeightedDataset,
        token: &CancelToken,
        sink: &mut dyn TrainingProgressSink,
    ) -> Result<(), BoostError>
    {
        if self.hypotheses.is_empty() {
            return Err(BoostError::EmptyEnsemble);
        }
        if training.is_empty() {
            return Err(BoostError::EmptyDataset);
        }

        self.status = EnsembleStatus::Untrained;
        for h in &mut self.hypotheses {
            h.set_weight(PLACEHOLDER_WEIGHT);
        }

        // Uniform reset, then one normalization so round 1 sees `1/n`.
        training.reset_weights();
        training.normalize_weights();

        let total_rounds = self.hypotheses.len();
        sink.on_start(&self.snapshot(
            training,
            0,
            None,
            RoundStats::default(),
            "starting".into(),
        ));

        for round in 0..total_rounds {
            if token.is_cancelled() {
                return Err(BoostError::Cancelled);
            }

            {
                let hyp = &mut self.hypotheses[round];
                let name = hyp.name().to_string();
                hyp.classifier_mut()
                    .train(training, validation)
                    .map_err(|source| BoostError::Component { name, source })?;
            }

            if token.is_cancelled() {
                return Err(BoostError::Cancelled);
            }

            let hyp = &self.hypotheses[round];
            let correct = correctness_mask(hyp, training);
            let eps = training.iter()
                .zip(&correct)
                .filter(|(_, &c)| !c)
                .map(|(e, _)| e.weight())
                .sum::<f64>();
            let missed = correct.iter().filter(|&&c| !c).count();

            if eps < PERFECT_TOLERANCE {
                // A perfect hypothesis would get an unbounded weight from
                // the canonical rule; give it none instead, and leave the
                // example weights as they are.
                self.hypotheses[round].set_weight(0.0);
            } else {
                training.scale_weights(eps / (1.0 - eps), &correct);
                training.normalize_weights();
                self.hypotheses[round].set_weight(((1.0 - eps) / eps).ln());
            }

            let stats = RoundStats {
                weighted_error: Some(eps),
                misclassified: Some(missed),
                validation_error:
                    unweighted_error(&self.hypotheses[round], validation),
            };
            let hypothesis_ix = Some(round);
            sink.on_round(&self.snapshot(
                training,
                round + 1,
                hypothesis_ix,
                stats,
                format!("finished round {} of {total_rounds}", round + 1),
            ));
        }

        self.status = EnsembleStatus::Trained;
        sink.on_finished(&self.snapshot(
            training,
            total_rounds,
            None,
            RoundStats::default(),
            "finished".into(),
        ));
        Ok(())
    }


    /// Weighted-vote classification.
    ///
    /// Every hypothesis whose component reports itself trained casts its
    /// ensemble weight for the label it predicts; untrained hypotheses are
    /// skipped, not treated as errors. The label with the largest running
    /// total wins, and ties break **first-seen-wins**: the label that
    /// reached the current maximum first keeps it, so iteration order over
    /// hypotheses is observable for tied votes.
    ///
    /// Returns `None` when no hypothesis is trained.
    pub fn classify(&self, example: &Example) -> Option<Label> {
        let mut totals: Vec<(Label, f64)> = Vec::with_capacity(2);
        let mut best: Option<(Label, f64)> = None;

        let trained = self.hypotheses.iter().filter(|h| h.is_trained());
        for hyp in trained {
            let label = hyp.classify(example);
            let total = match totals.iter_mut().find(|(l, _)| *l == label) {
                Some((_, t)) => {
                    *t += hyp.weight();
                    *t
                }
                None => {
                    totals.push((label, hyp.weight()));
                    hyp.weight()
                }
            };

            // Strict comparison keeps the incumbent on equal totals.
            match best {
                Some((_, top)) if total <= top => {}
                _ => best = Some((label, total)),
            }
        }

        best.map(|(label, _)| label)
    }


    /// Weight-normalized average of the trained components' continuous
    /// scores: `sum(w_h * score_h) / sum(w_h)`.
    ///
    /// Distinct from the discrete vote of [`classify`](Self::classify).
    /// When the trained weights sum to zero (every component degenerated
    /// to weight `0`, or nothing is trained) the average is undefined and
    /// this returns [`f64::NAN`].
    pub fn score(&self, example: &Example) -> f64 {
        let (weighted_sum, weight_total) = self.hypotheses.iter()
            .filter(|h| h.is_trained())
            .fold((0.0, 0.0), |(acc, total), h| {
                (acc + h.weight() * h.score(example), total + h.weight())
            });

        if weight_total == 0.0 {
            f64::NAN
        } else {
            weighted_sum / weight_total
        }
    }


    fn snapshot<'a>(
        &'a self,
        training: &'a WeightedDataset,
        round: usize,
        hypothesis_ix: Option<usize>,
        stats: RoundStats,
        status: String,
    ) -> ProgressSnapshot<'a>
    {
        let total_rounds = self.hypotheses.len();
        let hypotheses = self.hypotheses.iter()
            .map(|h| HypothesisReport {
                name: h.name().to_string(),
                weight: h.weight(),
                trained: h.is_trained(),
            })
            .collect();
        let progress = if total_rounds == 0 {
            100.0
        } else {
            100.0 * round as f64 / total_rounds as f64
        };

        ProgressSnapshot {
            round,
            total_rounds,
            hypothesis: hypothesis_ix.map(|i| self.hypotheses[i].name()),
            hypotheses,
            examples: training,
            weighted_error: stats.weighted_error,
            misclassified: stats.misclassified,
            validation_error: stats.validation_error,
            status,
            progress,
        }
    }
}


#[derive(Default)]
struct RoundStats {
    weighted_error: Option<f64>,
    misclassified: Option<usize>,
    validation_error: Option<f64>,
}


/// One flag per training example: `true` where `hyp` predicts the
/// ground-truth label.
fn correctness_mask(hyp: &Hypothesis, training: &WeightedDataset) -> Vec<bool> {
    training.iter()
        .map(|e| hyp.classify(e.example()) == e.label())
        .collect()
}


/// Unweighted misclassification fraction of `hyp` on `sample`,
/// or `None` for an empty sample.
fn unweighted_error(hyp: &Hypothesis, sample: &WeightedDataset) -> Option<f64> {
    if sample.is_empty() {
        return None;
    }
    let missed = sample.iter()
        .filter(|e| hyp.classify(e.example()) != e.label())
        .count();
    Some(missed as f64 / sample.len() as f64)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ComponentError;
    use crate::progress::NullSink;

    /// A component with a fixed prediction and score.
    struct Stub {
        name: &'static str,
        label: Label,
        score: f64,
        trained: bool,
    }

    impl Stub {
        fn trained(name: &'static str, label: Label, score: f64) -> Self {
            Self { name, label, score, trained: true }
        }
    }

    impl Classifier for Stub {
        fn train(
            &mut self,
            _training: &WeightedDataset,
            _validation: &WeightedDataset,
        ) -> Result<(), ComponentError> {
            self.trained = true;
            Ok(())
        }

        fn classify(&self, _example: &Example) -> Label {
            self.label
        }

        fn score(&self, _example: &Example) -> f64 {
            self.score
        }

        fn is_trained(&self) -> bool {
            self.trained
        }

        fn name(&self) -> &str {
            self.name
        }
    }


    fn example() -> Example {
        Example::new(vec![0.0], Label::Positive)
    }


    #[test]
    fn tie_goes_to_first_seen_label() {
        let mut ensemble = BoostingEnsemble::new();
        ensemble.add_hypothesis(
            Box::new(Stub::trained("pos", Label::Positive, 1.0)));
        ensemble.add_hypothesis(
            Box::new(Stub::trained("neg", Label::Negative, 0.0)));

        // Both hypotheses carry the placeholder weight 1.0: a tied vote.
        assert_eq!(ensemble.classify(&example()), Some(Label::Positive));

        // Reversed order, same weights: the other label wins the tie.
        let mut reversed = BoostingEnsemble::new();
        reversed.add_hypothesis(
            Box::new(Stub::trained("neg", Label::Negative, 0.0)));
        reversed.add_hypothesis(
            Box::new(Stub::trained("pos", Label::Positive, 1.0)));
        assert_eq!(reversed.classify(&example()), Some(Label::Negative));
    }


    #[test]
    fn vote_respects_weights() {
        let mut ensemble = BoostingEnsemble::new();
        ensemble.add_hypothesis(
            Box::new(Stub::trained("pos", Label::Positive, 1.0)));
        ensemble.add_hypothesis(
            Box::new(Stub::trained("neg", Label::Negative, 0.0)));
        ensemble.hypotheses[1].set_weight(2.5);

        assert_eq!(ensemble.classify(&example()), Some(Label::Negative));
    }


    #[test]
    fn untrained_hypotheses_are_skipped() {
        let mut ensemble = BoostingEnsemble::new();
        ensemble.add_hypothesis(Box::new(Stub {
            name: "raw",
            label: Label::Negative,
            score: 0.0,
            trained: false,
        }));
        ensemble.add_hypothesis(
            Box::new(Stub::trained("pos", Label::Positive, 1.0)));

        assert_eq!(ensemble.classify(&example()), Some(Label::Positive));
    }


    #[test]
    fn classify_returns_none_without_trained_hypotheses() {
        let mut ensemble = BoostingEnsemble::new();
        assert_eq!(ensemble.classify(&example()), None);

        ensemble.add_hypothesis(Box::new(Stub {
            name: "raw",
            label: Label::Positive,
            score: 1.0,
            trained: false,
        }));
        assert_eq!(ensemble.classify(&example()), None);
    }


    #[test]
    fn score_is_weight_normalized_average() {
        let mut ensemble = BoostingEnsemble::new();
        ensemble.add_hypothesis(
            Box::new(Stub::trained("a", Label::Positive, 0.8)));
        ensemble.add_hypothesis(
            Box::new(Stub::trained("b", Label::Negative, 0.2)));
        ensemble.hypotheses[0].set_weight(2.0);
        ensemble.hypotheses[1].set_weight(1.0);

        let got = ensemble.score(&example());
        assert!((got - 0.6).abs() < 1e-12);
    }


    #[test]
    fn score_is_nan_when_weights_sum_to_zero() {
        let mut ensemble = BoostingEnsemble::new();
        ensemble.add_hypothesis(
            Box::new(Stub::trained("a", Label::Positive, 0.8)));
        ensemble.hypotheses[0].set_weight(0.0);

        assert!(ensemble.score(&example()).is_nan());
    }


    #[test]
    fn train_rejects_empty_ensemble_and_dataset() {
        let token = CancelToken::new();
        let mut sink = NullSink;

        let mut empty = BoostingEnsemble::new();
        let mut sample = WeightedDataset::from_examples(vec![example()]);
        let validation = WeightedDataset::from_examples(Vec::new());
        let got = empty.train(&mut sample, &validation, &token, &mut sink);
        assert!(matches!(got, Err(BoostError::EmptyEnsemble)));

        let mut ensemble = BoostingEnsemble::new();
        ensemble.add_hypothesis(
            Box::new(Stub::trained("a", Label::Positive, 1.0)));
        let mut no_data = WeightedDataset::from_examples(Vec::new());
        let got = ensemble.train(&mut no_data, &validation, &token, &mut sink);
        assert!(matches!(got, Err(BoostError::EmptyDataset)));
    }


    #[test]
    fn remove_resets_weights_and_status() {
        let mut ensemble = BoostingEnsemble::new();
        ensemble.add_hypothesis(
            Box::new(Stub::trained("a", Label::Positive, 1.0)));
        ensemble.add_hypothesis(
            Box::new(Stub::trained("b", Label::Negative, 0.0)));
        ensemble.hypotheses[0].set_weight(3.0);
        ensemble.hypotheses[1].set_weight(0.5);
        ensemble.status = EnsembleStatus::Trained;

        let removed = ensemble.remove_hypothesis(0);
        assert_eq!(removed.name(), "a");
        assert_eq!(ensemble.len(), 1);
        assert_eq!(ensemble.hypotheses[0].weight(), PLACEHOLDER_WEIGHT);
        assert_eq!(ensemble.status(), EnsembleStatus::Untrained);
    }
}
