//! A minimal built-in component classifier: a single-feature threshold cut.

use crate::classifier::{Classifier, ComponentError};
use crate::sample::{Example, Label, WeightedDataset};


/// A decision stump: one feature compared against one threshold.
///
/// Training scans every feature and every candidate cut point and keeps the
/// split with the smallest *weighted* error under the dataset's current
/// example weights, so a stump trained mid-boosting concentrates on the
/// examples earlier hypotheses got wrong. The validation set is ignored by
/// this learner.
///
/// Shipped mostly as the smallest real implementation of the
/// [`Classifier`] capability; anything with an actual training procedure
/// (a feed-forward network, say) plugs into the ensemble the same way.
#[derive(Debug, Clone)]
pub struct DecisionStump {
    name: String,
    feature: usize,
    threshold: f64,
    above: Label,
    trained: bool,
}


impl DecisionStump {
    /// A fresh, untrained stump.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feature: 0,
            threshold: 0.0,
            above: Label::Positive,
            trained: false,
        }
    }


    /// The chosen feature index. Meaningful only once trained.
    pub fn feature(&self) -> usize {
        self.feature
    }


    /// The chosen threshold. Meaningful only once trained.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    fn weighted_error(
        &self,
        training: &WeightedDataset,
        feature: usize,
        threshold: f64,
        above: Label,
    ) -> f64
    {
        training.iter()
            .map(|e| {
                let predicted = if e.example().feature(feature) >= threshold {
                    above
                } else {
                    above.opposite()
                };
                if predicted != e.label() { e.weight() } else { 0.0 }
            })
            .sum()
    }
}


impl Classifier for DecisionStump {
    fn train(
        &mut self,
        training: &WeightedDataset,
        _validation: &WeightedDataset,
    ) -> Result<(), ComponentError> {
        let n_feature = training.iter()
            .next()
            .map(|e| e.example().dimension())
            .unwrap_or(0);
        if n_feature == 0 {
            return Err("cannot train a stump on featureless data".into());
        }

        let mut best_error = f64::INFINITY;
        for feature in 0..n_feature {
            let mut values = training.iter()
                .map(|e| e.example().feature(feature))
                .collect::<Vec<_>>();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap());
            values.dedup();

            // Candidate cuts: below the smallest value, then between each
            // pair of adjacent distinct values.
            let candidates = std::iter::once(values[0] - 1.0)
                .chain(values.windows(2).map(|w| (w[0] + w[1]) / 2.0));

            for threshold in candidates {
                for above in [Label::Positive, Label::Negative] {
                    let error = self.weighted_error(
                        training, feature, threshold, above,
                    );
                    if error < best_error {
                        best_error = error;
                        self.feature = feature;
                        self.threshold = threshold;
                        self.above = above;
                    }
                }
            }
        }

        self.trained = true;
        Ok(())
    }


    fn classify(&self, example: &Example) -> Label {
        if example.feature(self.feature) >= self.threshold {
            self.above
        } else {
            self.above.opposite()
        }
    }


    fn score(&self, example: &Example) -> f64 {
        match self.classify(example) {
            Label::Positive => 1.0,
            Label::Negative => 0.0,
        }
    }


    fn is_trained(&self) -> bool {
        self.trained
    }


    fn name(&self) -> &str {
        &self.name
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample(points: &[(f64, Label)]) -> WeightedDataset {
        let examples = points.iter()
            .map(|&(x, label)| Example::new(vec![x], label))
            .collect();
        WeightedDataset::from_examples(examples)
    }


    #[test]
    fn finds_a_separating_threshold() {
        let mut training = sample(&[
            (0.0, Label::Negative),
            (1.0, Label::Negative),
            (2.0, Label::Negative),
            (5.0, Label::Positive),
            (6.0, Label::Positive),
            (7.0, Label::Positive),
        ]);
        training.normalize_weights();
        let validation = WeightedDataset::from_examples(Vec::new());

        let mut stump = DecisionStump::new("sep");
        stump.train(&training, &validation).unwrap();

        assert!(stump.is_trained());
        for e in training.iter() {
            assert_eq!(stump.classify(e.example()), e.label());
        }
    }


    #[test]
    fn weights_steer_the_split() {
        // Unweighted, the cheapest cut misclassifies only the outlier at
        // x = 10. Once the outlier carries most of the mass, the stump
        // must get it right even at the cost of other examples.
        let mut training = sample(&[
            (0.0, Label::Negative),
            (1.0, Label::Negative),
            (2.0, Label::Positive),
            (3.0, Label::Positive),
            (10.0, Label::Negative),
        ]);
        training.normalize_weights();
        let validation = WeightedDataset::from_examples(Vec::new());

        let mut stump = DecisionStump::new("weighted");
        stump.train(&training, &validation).unwrap();
        let outlier = Example::new(vec![10.0], Label::Negative);
        assert_eq!(stump.classify(&outlier), Label::Positive);

        for i in 0..4 {
            training.set_weight(i, 0.02);
        }
        training.set_weight(4, 0.92);
        stump.train(&training, &validation).unwrap();
        assert_eq!(stump.classify(&outlier), Label::Negative);
    }


    #[test]
    fn rejects_featureless_examples() {
        let training = WeightedDataset::from_examples(vec![
            Example::new(Vec::new(), Label::Positive),
        ]);
        let validation = WeightedDataset::from_examples(Vec::new());

        let mut stump = DecisionStump::new("empty");
        assert!(stump.train(&training, &validation).is_err());
        assert!(!stump.is_trained());
    }
}
