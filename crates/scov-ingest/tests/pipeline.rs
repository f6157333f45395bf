//! End-to-end ingestion tests: artifact text in, comparison report out.
//!
//! Each test drives a real parser pair through `analyze_pair` and checks the
//! buckets the core produces, so parser title normalisation and core
//! matching are exercised together.

use pretty_assertions::assert_eq;
use scov_core::{ComparisonReport, Scenario, ScenarioSide};
use scov_ingest::{analyze_pair, ParsingAnalyzer, ScenarioCache, SimulatedAnalyzer, TextArtifact};
use scov_test_utils::{titles, SAMPLE_QA_MARKDOWN, SAMPLE_SOURCE_FEATURE};
use std::time::Duration;

fn pair(source: (&str, &str), qa: (&str, &str)) -> (TextArtifact, TextArtifact) {
    (
        TextArtifact::new(source.0, ScenarioSide::Source, source.1),
        TextArtifact::new(qa.0, ScenarioSide::Qa, qa.1),
    )
}

#[tokio::test]
async fn feature_against_markdown_plan() {
    let analyzer = ParsingAnalyzer::default();
    let (source, qa) = pair(
        ("checkout.feature", SAMPLE_SOURCE_FEATURE),
        ("qa-plan.md", SAMPLE_QA_MARKDOWN),
    );

    let (source, qa) = analyze_pair(&analyzer, &source, &qa).await.unwrap();
    let report = ComparisonReport::build(&source, &qa);

    assert_eq!(report.coverage, 100);
    assert_eq!(titles(&report.comparison.missing), vec!["Abandon cart"]);
    assert_eq!(
        titles(&report.comparison.overlap),
        vec!["Pay with card", "Pay with voucher"]
    );
    assert_eq!(titles(&report.comparison.edge_cases), vec!["Expired card is rejected"]);

    // Source payload survives into the buckets
    let card = &report.comparison.overlap[0];
    assert_eq!(card.steps[0], "Given a signed-in shopper");
    assert!(card.has_tag("checkout"));
}

#[tokio::test]
async fn same_text_parsed_once_per_format() {
    let analyzer = ParsingAnalyzer::new(scov_ingest::default_parsers(), ScenarioCache::new(8));
    let (a, b) = pair(("a.txt", "Login\nLogout\n"), ("b.txt", "Login\nLogout\n"));

    let (left, right) = analyze_pair(&analyzer, &a, &b).await.unwrap();
    assert_eq!(left, right);

    let cached = analyzer
        .cache()
        .get(&scov_ingest::CacheKey::new(*a.hash(), "text"))
        .await;
    assert!(cached.is_some());
}

#[tokio::test]
async fn parse_failure_on_either_side_fails_the_pair() {
    let analyzer = ParsingAnalyzer::default();
    let (source, qa) = pair(("ok.txt", "A\n"), ("broken.json", "[{"));

    let err = analyze_pair(&analyzer, &source, &qa).await.unwrap_err();
    assert!(err.to_string().contains("broken.json"));
}

#[tokio::test(start_paused = true)]
async fn simulated_pair_runs_concurrently() {
    let analyzer = SimulatedAnalyzer::new(Duration::from_secs(3));
    let (source, qa) = pair(("s.md", ""), ("q.md", ""));
    let start = tokio::time::Instant::now();

    let (source, qa) = analyze_pair(&analyzer, &source, &qa).await.unwrap();

    assert!(start.elapsed() < Duration::from_secs(6));
    let report = ComparisonReport::build(&source, &qa);
    assert_eq!(report.comparison.missing.len(), 1);
    assert_eq!(report.comparison.overlap.len(), 2);
    assert_eq!(
        report.comparison.edge_cases,
        vec![qa[2].clone()]
    );
    assert!(report.comparison.edge_cases.iter().all(|s: &Scenario| s.has_tag("edge")));
}
