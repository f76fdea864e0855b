use std::sync::Arc;

use super::ArticleProcessor;
use crate::bias::{CountryBias, CountryBiasBuilder};
use crate::dataset::Annotation;
use crate::gazetteer::{Candidate, GazetteerError, MockGazetteerClient};
use crate::resolver::Resolver;

fn mention(article: &str, toponym: &str) -> Annotation {
    Annotation {
        article_id: article.to_string(),
        toponym: toponym.to_string(),
        expected_id: None,
        is_title: false,
    }
}

fn processor(mock: MockGazetteerClient) -> (ArticleProcessor<MockGazetteerClient>, Arc<MockGazetteerClient>) {
    let client = Arc::new(mock);
    let resolver = Arc::new(Resolver::new(Arc::clone(&client), "nl"));
    (
        ArticleProcessor::new(resolver, CountryBiasBuilder::new("NL"), 2),
        client,
    )
}

#[tokio::test]
async fn test_country_context_biases_second_phase() {
    let mock = MockGazetteerClient::new();
    mock.respond(
        "Frankrijk",
        vec![Candidate::new(3017382, "PCLI").with_country("FR")],
    );
    mock.respond_biased(
        "Parijs",
        &CountryBias::Prefer("FR".to_string()),
        vec![Candidate::new(2988507, "PPLC").with_country("FR")],
    );
    let (processor, _) = processor(mock);

    let mentions = vec![mention("a1", "Parijs"), mention("a1", "Frankrijk")];
    let predicted = processor.process_article(&mentions).await.unwrap();

    assert_eq!(predicted, vec![2988507, 3017382]);
}

#[tokio::test]
async fn test_phase_one_resolution_is_never_requeried() {
    let mock = MockGazetteerClient::new();
    mock.respond(
        "Frankrijk",
        vec![Candidate::new(3017382, "PCLI").with_country("FR")],
    );
    let (processor, mock) = processor(mock);

    let mentions = vec![mention("a1", "Frankrijk")];
    let predicted = processor.process_article(&mentions).await.unwrap();

    assert_eq!(predicted, vec![3017382]);
    // Exactly the phase-one country query; no biased follow-up.
    assert_eq!(mock.calls_for("Frankrijk"), 1);
    assert!(mock.calls()[0].bias.is_none());
}

#[tokio::test]
async fn test_all_country_queries_precede_biased_queries() {
    let mock = MockGazetteerClient::new();
    mock.respond(
        "Nederland",
        vec![Candidate::new(2750405, "PCLI").with_country("NL")],
    );
    let (processor, mock) = processor(mock);

    let mentions = vec![
        mention("a1", "Utrecht"),
        mention("a1", "Nederland"),
        mention("a1", "Gouda"),
    ];
    processor.process_article(&mentions).await.unwrap();

    let calls = mock.calls();
    let first_biased = calls.iter().position(|q| q.bias.is_some()).unwrap();
    assert!(calls[..first_biased].iter().all(|q| q.bias.is_none()));
    assert!(calls[..first_biased].iter().all(|q| q.max_results == 2));
}

#[tokio::test]
async fn test_empty_context_falls_back_to_default_country() {
    let (processor, mock) = processor(MockGazetteerClient::new());

    let mentions = vec![mention("a1", "Ergens")];
    processor.process_article(&mentions).await.unwrap();

    let biased: Vec<_> = mock
        .calls()
        .into_iter()
        .filter(|q| q.bias.is_some())
        .collect();
    assert_eq!(biased.len(), 1);
    assert_eq!(biased[0].bias, Some(CountryBias::Prefer("NL".to_string())));
}

#[tokio::test]
async fn test_multi_country_context_restricts_to_representative() {
    let mock = MockGazetteerClient::new();
    mock.respond(
        "Frankrijk",
        vec![Candidate::new(3017382, "PCLI").with_country("FR")],
    );
    mock.respond(
        "Duitsland",
        vec![Candidate::new(2921044, "PCLI").with_country("DE")],
    );
    let (processor, mock) = processor(mock);

    let mentions = vec![
        mention("a1", "Frankrijk"),
        mention("a1", "Duitsland"),
        mention("a1", "Grensstreek"),
    ];
    processor.process_article(&mentions).await.unwrap();

    let biased: Vec<_> = mock
        .calls()
        .into_iter()
        .filter(|q| q.bias.is_some())
        .collect();
    assert_eq!(biased.len(), 1);
    assert_eq!(biased[0].bias, Some(CountryBias::Restrict("DE".to_string())));
}

#[tokio::test]
async fn test_process_dataset_aligns_interleaved_articles() {
    let mock = MockGazetteerClient::new();
    mock.respond(
        "Frankrijk",
        vec![Candidate::new(3017382, "PCLI").with_country("FR")],
    );
    mock.respond(
        "Nederland",
        vec![Candidate::new(2750405, "PCLI").with_country("NL")],
    );
    let (processor, _) = processor(mock);

    let annotations = vec![
        mention("a1", "Frankrijk"),
        mention("a2", "Nederland"),
        mention("a1", "Frankrijk"),
    ];
    let predicted = processor.process_dataset(&annotations).await.unwrap();

    assert_eq!(predicted, vec![3017382, 2750405, 3017382]);
}

#[tokio::test]
async fn test_repeated_mentions_share_cached_lookups() {
    let mock = MockGazetteerClient::new();
    mock.respond(
        "Nederland",
        vec![Candidate::new(2750405, "PCLI").with_country("NL")],
    );
    let (processor, mock) = processor(mock);

    // Both articles resolve the same country context, so phase two for the
    // shared unresolved mention hits the same cache key.
    let annotations = vec![
        mention("a1", "Nederland"),
        mention("a1", "Zutphen"),
        mention("a2", "Nederland"),
        mention("a2", "Zutphen"),
    ];
    processor.process_dataset(&annotations).await.unwrap();

    assert_eq!(mock.calls_for("Nederland"), 1);
    // One country probe plus one biased probe (and its baseline fallback).
    assert_eq!(mock.calls_for("Zutphen"), 3);
}

#[tokio::test]
async fn test_transport_failure_aborts_dataset_pass() {
    let mock = MockGazetteerClient::new();
    mock.fail(
        "Parijs",
        GazetteerError::RequestFailed {
            message: "timeout".to_string(),
        },
    );
    let (processor, _) = processor(mock);

    let annotations = vec![mention("a1", "Parijs")];
    let result = processor.process_dataset(&annotations).await;

    assert!(matches!(result, Err(GazetteerError::RequestFailed { .. })));
}

#[tokio::test]
async fn test_baseline_pass_ignores_article_context() {
    let mock = MockGazetteerClient::new();
    mock.respond("Parijs", vec![Candidate::new(2988507, "PPLC")]);
    let (processor, mock) = processor(mock);

    let annotations = vec![
        mention("a1", "Parijs"),
        mention("a2", "Parijs"),
        mention("a3", "Atlantis"),
    ];
    let predicted = processor.baseline_pass(&annotations).await.unwrap();

    assert_eq!(predicted, vec![2988507, 2988507, 0]);
    // Cached after the first call; no language, no bias.
    assert_eq!(mock.calls_for("Parijs"), 1);
    assert!(mock.calls().iter().all(|q| q.bias.is_none() && q.language.is_none()));
}

#[tokio::test]
async fn test_every_mention_gets_exactly_one_prediction() {
    let (processor, _) = processor(MockGazetteerClient::new());

    let annotations = vec![
        mention("a1", "Ene"),
        mention("a1", "Andere"),
        mention("a2", "Derde"),
    ];
    let predicted = processor.process_dataset(&annotations).await.unwrap();

    assert_eq!(predicted.len(), annotations.len());
}
