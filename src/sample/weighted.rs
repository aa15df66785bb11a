use rand::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use super::example::{Example, Label};


/// An [`Example`] carrying a mutable non-negative weight.
///
/// Across a dataset the weights are either uniform (freshly reset) or
/// normalized to sum to one; the boosting loop re-normalizes after every
/// update.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedExample {
    example: Example,
    weight: f64,
}


impl WeightedExample {
    /// Wrap an example with the initial uniform weight `1.0`.
    #[inline]
    pub fn new(example: Example) -> Self {
        Self { example, weight: 1.0 }
    }


    /// Returns the wrapped example.
    #[inline]
    pub fn example(&self) -> &Example {
        &self.example
    }


    /// Returns the current weight.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }


    /// Overwrite the weight.
    /// No clamping is performed; callers must keep `w >= 0`.
    #[inline]
    pub fn set_weight(&mut self, w: f64) {
        self.weight = w;
    }


    /// Shorthand for the wrapped example's label.
    #[inline]
    pub fn label(&self) -> Label {
        self.example.label()
    }
}


/// An ordered collection of [`WeightedExample`]s.
///
/// The insertion order is stable and used only for deterministic iteration;
/// it carries no semantics. The size is fixed once constructed, and a
/// non-empty dataset is required for training to proceed.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedDataset {
    examples: Vec<WeightedExample>,
}


impl WeightedDataset {
    /// Build a dataset from a list of examples,
    /// every weight starting at the uniform `1.0`.
    #[inline]
    pub fn from_examples(examples: Vec<Example>) -> Self {
        let examples = examples.into_iter()
            .map(WeightedExample::new)
            .collect();
        Self { examples }
    }


    /// Returns the number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.examples.len()
    }


    /// Returns `true` if the dataset holds no examples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }


    /// Iterate over the examples in their current order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, WeightedExample> {
        self.examples.iter()
    }


    /// Returns the `i`-th weighted example.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> &WeightedExample {
        &self.examples[i]
    }


    /// Returns the weight of the `i`-th example.
    #[inline]
    pub fn weight(&self, i: usize) -> f64 {
        self.examples[i].weight()
    }


    /// Overwrite the weight of the `i`-th example.
    /// No clamping is performed; callers must keep `w >= 0`.
    #[inline]
    pub fn set_weight(&mut self, i: usize, w: f64) {
        self.examples[i].set_weight(w);
    }


    /// Collect the current weights into a fresh vector,
    /// in example order.
    #[inline]
    pub fn weights(&self) -> Vec<f64> {
        self.examples.iter()
            .map(WeightedExample::weight)
            .collect()
    }


    /// Reset every weight to the uniform constant `1.0`.
    ///
    /// The exact value is irrelevant to the algorithm as long as it is
    /// positive and identical across examples; the first call to
    /// [`normalize_weights`](Self::normalize_weights) turns it into the
    /// uniform distribution `1/n`.
    #[inline]
    pub fn reset_weights(&mut self) {
        self.examples.par_iter_mut()
            .for_each(|e| e.set_weight(1.0));
    }


    /// Divide every weight by the current sum so the weights sum to one.
    ///
    /// # Panics
    /// Panics if the weight sum is not positive. All weights driven to zero
    /// cannot happen under correct operation, so this is treated as a fatal
    /// programming error rather than a recoverable condition.
    #[inline]
    pub fn normalize_weights(&mut self) {
        let total = self.examples.iter()
            .map(WeightedExample::weight)
            .sum::<f64>();
        assert!(
            total > 0.0,
            "cannot normalize example weights: sum is {total}",
        );

        self.examples.par_iter_mut()
            .for_each(|e| {
                let w = e.weight();
                e.set_weight(w / total);
            });
    }


    /// Multiply the weight of every example whose `mask` entry is `true`
    /// by `factor`, leaving the others untouched.
    ///
    /// `mask` must have one entry per example, in example order.
    pub(crate) fn scale_weights(&mut self, factor: f64, mask: &[bool]) {
        debug_assert_eq!(self.examples.len(), mask.len());
        self.examples.par_iter_mut()
            .zip(mask)
            .for_each(|(e, &m)| {
                if m {
                    let w = e.weight();
                    e.set_weight(w * factor);
                }
            });
    }


    /// Reorder the examples at random.
    ///
    /// Intended to run before a full training pass to avoid order-dependent
    /// artifacts in component classifiers. Weights are untouched; each
    /// example travels with its weight.
    #[inline]
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.examples.shuffle(rng);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOLERANCE: f64 = 1e-9;

    fn dataset(n: usize) -> WeightedDataset {
        let examples = (0..n)
            .map(|i| {
                let label = if i % 2 == 0 {
                    Label::Positive
                } else {
                    Label::Negative
                };
                Example::new(vec![i as f64], label)
            })
            .collect();
        WeightedDataset::from_examples(examples)
    }


    #[test]
    fn normalize_sums_to_one() {
        let mut sample = dataset(7);
        sample.set_weight(0, 3.5);
        sample.set_weight(4, 0.25);

        sample.normalize_weights();

        let total = sample.weights().iter().sum::<f64>();
        assert!((total - 1.0).abs() < TOLERANCE);
    }


    #[test]
    fn reset_then_normalize_is_uniform() {
        let mut sample = dataset(10);
        sample.set_weight(3, 100.0);

        sample.reset_weights();
        sample.normalize_weights();

        for i in 0..sample.len() {
            assert!((sample.weight(i) - 0.1).abs() < TOLERANCE);
        }
    }


    #[test]
    #[should_panic]
    fn normalize_panics_on_zero_sum() {
        let mut sample = dataset(3);
        for i in 0..3 {
            sample.set_weight(i, 0.0);
        }
        sample.normalize_weights();
    }


    #[test]
    fn scale_touches_only_masked_examples() {
        let mut sample = dataset(4);
        sample.normalize_weights();

        // Shrink examples 0 and 2, keep 1 and 3 untouched.
        sample.scale_weights(0.5, &[true, false, true, false]);

        assert!((sample.weight(0) - 0.125).abs() < TOLERANCE);
        assert!((sample.weight(1) - 0.25).abs() < TOLERANCE);
        assert!((sample.weight(2) - 0.125).abs() < TOLERANCE);
        assert!((sample.weight(3) - 0.25).abs() < TOLERANCE);
    }


    #[test]
    fn shuffle_preserves_weights_and_size() {
        let mut sample = dataset(20);
        for i in 0..sample.len() {
            sample.set_weight(i, i as f64);
        }

        let mut rng = StdRng::seed_from_u64(42);
        sample.shuffle(&mut rng);

        assert_eq!(sample.len(), 20);
        // Each example still carries its own weight.
        for e in sample.iter() {
            assert_eq!(e.weight(), e.example().feature(0));
        }
    }
}
