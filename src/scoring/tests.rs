use super::report::AgreementReport;
use super::types::{DegenerateMetric, MetricValue, ScoreTally};

fn approx(metric: MetricValue, expected: f64) -> bool {
    metric.value().is_some_and(|v| (v - expected).abs() < 1e-9)
}

#[test]
fn test_tally_counts_correct_unresolved_and_guessed() {
    let pairs = vec![
        (Some(1), 1),
        (Some(2), 2),
        (Some(3), 0),
        (Some(4), 99),
        (None, 0),
    ];

    let tally = ScoreTally::from_pairs(pairs);

    assert_eq!(tally.total, 5);
    assert_eq!(tally.correct, 2);
    assert_eq!(tally.unresolved, 2);
    assert_eq!(tally.guessed(), 3);
}

#[test]
fn test_missing_expected_id_is_never_correct() {
    let tally = ScoreTally::from_pairs(vec![(None, 42)]);

    assert_eq!(tally.correct, 0);
    assert_eq!(tally.unresolved, 0);
    assert_eq!(tally.guessed(), 1);
}

#[test]
fn test_reference_metrics() {
    // total=10, correct=6, unresolved=2 -> guessed=8
    let tally = ScoreTally {
        total: 10,
        correct: 6,
        unresolved: 2,
    };

    let report = AgreementReport::from_tally(tally);

    assert_eq!(tally.guessed(), 8);
    assert!(approx(report.precision, 0.75));
    assert!(approx(report.recall, 0.6));
    assert!(approx(report.f1, 2.0 * 0.75 * 0.6 / 1.35));
}

#[test]
fn test_no_guesses_yields_undefined_precision_not_zero() {
    let pairs = vec![(Some(1), 0), (Some(2), 0)];

    let report = AgreementReport::from_pairs(pairs);

    assert_eq!(
        report.precision,
        MetricValue::Undefined(DegenerateMetric::NoGuesses)
    );
    assert!(approx(report.recall, 0.0));
    assert_eq!(
        report.f1,
        MetricValue::Undefined(DegenerateMetric::NoGuesses)
    );
}

#[test]
fn test_zero_precision_and_recall_leaves_f1_undefined() {
    // Guessed everything, got everything wrong.
    let pairs = vec![(Some(1), 9), (Some(2), 8)];

    let report = AgreementReport::from_pairs(pairs);

    assert!(approx(report.precision, 0.0));
    assert!(approx(report.recall, 0.0));
    assert_eq!(
        report.f1,
        MetricValue::Undefined(DegenerateMetric::ZeroPrecisionAndRecall)
    );
}

#[test]
fn test_empty_dataset_reports_undefined_metrics() {
    let report = AgreementReport::from_pairs(Vec::new());

    assert_eq!(report.tally.total, 0);
    assert!(!report.precision.is_defined());
    assert!(!report.recall.is_defined());
    assert!(!report.f1.is_defined());
}

#[test]
fn test_perfect_run() {
    let pairs = vec![(Some(1), 1), (Some(2), 2), (Some(3), 3)];

    let report = AgreementReport::from_pairs(pairs);

    assert!(approx(report.precision, 1.0));
    assert!(approx(report.recall, 1.0));
    assert!(approx(report.f1, 1.0));
}

#[test]
fn test_metric_display_forms() {
    assert_eq!(MetricValue::Value(0.75).to_string(), "0.7500");
    assert_eq!(
        MetricValue::Undefined(DegenerateMetric::NoGuesses).to_string(),
        "undefined (no guesses made)"
    );
}

#[test]
fn test_report_display_includes_total_and_metrics() {
    let report = AgreementReport::from_tally(ScoreTally {
        total: 10,
        correct: 6,
        unresolved: 2,
    });

    let rendered = report.to_string();

    assert!(rendered.contains("Total number of annotations: 10"));
    assert!(rendered.contains("Precision: 0.7500"));
    assert!(rendered.contains("Recall:    0.6000"));
    assert!(rendered.contains("F1-score:  0.6667"));
}
