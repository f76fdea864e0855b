use super::types::{DegenerateMetric, MetricValue, ScoreTally};

/// Agreement between predicted and expected identifiers over a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct AgreementReport {
    /// Raw counts.
    pub tally: ScoreTally,
    /// correct / guessed.
    pub precision: MetricValue,
    /// correct / total.
    pub recall: MetricValue,
    /// Harmonic mean of precision and recall.
    pub f1: MetricValue,
}

impl AgreementReport {
    /// Computes the report from `(expected, predicted)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Option<u64>, u64)>,
    {
        Self::from_tally(ScoreTally::from_pairs(pairs))
    }

    /// Computes the report from an existing tally.
    pub fn from_tally(tally: ScoreTally) -> Self {
        let precision = ratio(tally.correct, tally.guessed(), DegenerateMetric::NoGuesses);
        let recall = ratio(tally.correct, tally.total, DegenerateMetric::EmptyDataset);
        let f1 = harmonic_mean(precision, recall);

        Self {
            tally,
            precision,
            recall,
            f1,
        }
    }
}

impl std::fmt::Display for AgreementReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Agreement between predicted and expected identifiers:")?;
        writeln!(f)?;
        writeln!(f, "Total number of annotations: {}", self.tally.total)?;
        writeln!(f, "Precision: {}", self.precision)?;
        writeln!(f, "Recall:    {}", self.recall)?;
        write!(f, "F1-score:  {}", self.f1)
    }
}

fn ratio(numerator: usize, denominator: usize, degenerate: DegenerateMetric) -> MetricValue {
    if denominator == 0 {
        MetricValue::Undefined(degenerate)
    } else {
        MetricValue::Value(numerator as f64 / denominator as f64)
    }
}

fn harmonic_mean(precision: MetricValue, recall: MetricValue) -> MetricValue {
    match (precision, recall) {
        (MetricValue::Value(p), MetricValue::Value(r)) if p + r > 0.0 => {
            MetricValue::Value(2.0 * p * r / (p + r))
        }
        (MetricValue::Value(_), MetricValue::Value(_)) => {
            MetricValue::Undefined(DegenerateMetric::ZeroPrecisionAndRecall)
        }
        (MetricValue::Undefined(reason), _) | (_, MetricValue::Undefined(reason)) => {
            MetricValue::Undefined(reason)
        }
    }
}
