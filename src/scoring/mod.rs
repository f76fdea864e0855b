//! Agreement scoring between predicted and expected identifiers.
//!
//! Precision counts only the mentions the resolver dared to guess on;
//! unresolved mentions (id 0) are excluded from its denominator but still
//! hurt recall. Degenerate divisions are surfaced as distinct
//! [`MetricValue::Undefined`] states, never coerced to `0` or `NaN`.

pub mod report;
pub mod types;

#[cfg(test)]
mod tests;

pub use report::AgreementReport;
pub use types::{DegenerateMetric, MetricValue, ScoreTally};
