use serde::{Deserialize, Serialize};
use std::fmt;


/// A two-valued class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// The positive class.
    Positive,
    /// The negative class.
    Negative,
}


impl Label {
    /// Returns the other label.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}


/// A single labeled training instance:
/// an immutable feature vector together with its ground-truth [`Label`].
///
/// Examples are created once when the dataset is constructed and are never
/// mutated by the boosting engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    features: Vec<f64>,
    label: Label,
}


impl Example {
    /// Construct a new `Example` from a feature vector and its label.
    #[inline]
    pub fn new(features: Vec<f64>, label: Label) -> Self {
        Self { features, label }
    }


    /// Returns the feature vector as a slice.
    #[inline]
    pub fn features(&self) -> &[f64] {
        &self.features[..]
    }


    /// Returns the `i`-th feature value.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn feature(&self, i: usize) -> f64 {
        self.features[i]
    }


    /// Returns the number of features.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.features.len()
    }


    /// Returns the ground-truth label.
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }
}
