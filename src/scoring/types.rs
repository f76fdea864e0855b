use crate::resolver::UNRESOLVED;

/// Counts accumulated over the full output set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    /// Number of annotations scored.
    pub total: usize,
    /// Predictions matching the expected identifier.
    pub correct: usize,
    /// Predictions left at the unresolved sentinel.
    pub unresolved: usize,
}

impl ScoreTally {
    /// Tallies `(expected, predicted)` pairs.
    ///
    /// A prediction equal to the expected identifier counts as correct;
    /// otherwise a sentinel prediction counts as unresolved. Annotations
    /// without an expected identifier can never be correct.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Option<u64>, u64)>,
    {
        let mut tally = Self::default();

        for (expected, predicted) in pairs {
            tally.total += 1;
            if expected == Some(predicted) {
                tally.correct += 1;
            } else if predicted == UNRESOLVED {
                tally.unresolved += 1;
            }
        }

        tally
    }

    /// Number of annotations the resolver committed to an identifier for.
    pub fn guessed(&self) -> usize {
        self.total - self.unresolved
    }
}

/// Why a metric could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateMetric {
    /// Every prediction was the unresolved sentinel.
    NoGuesses,
    /// Precision and recall are both zero, leaving F1 without a denominator.
    ZeroPrecisionAndRecall,
    /// The dataset contained no annotations.
    EmptyDataset,
}

impl DegenerateMetric {
    /// Short human-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            DegenerateMetric::NoGuesses => "no guesses made",
            DegenerateMetric::ZeroPrecisionAndRecall => "zero precision and recall",
            DegenerateMetric::EmptyDataset => "empty dataset",
        }
    }
}

/// A metric that is either a number or an explicit undefined state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Computed value in `[0, 1]`.
    Value(f64),
    /// The metric's denominator was degenerate.
    Undefined(DegenerateMetric),
}

impl MetricValue {
    /// Returns the value, if defined.
    pub fn value(&self) -> Option<f64> {
        match self {
            MetricValue::Value(v) => Some(*v),
            MetricValue::Undefined(_) => None,
        }
    }

    /// Returns `true` if the metric was computable.
    pub fn is_defined(&self) -> bool {
        matches!(self, MetricValue::Value(_))
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Value(v) => write!(f, "{v:.4}"),
            MetricValue::Undefined(reason) => write!(f, "undefined ({})", reason.reason()),
        }
    }
}
