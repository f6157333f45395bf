//! Subcommand implementations
//!
//! Each command returns an [`Outcome`] instead of printing, so the binary
//! owns stdout and exit codes.

use crate::config::{AnalyzerKind, OutputFormat, ScovConfig};
use crate::render::{render_json, render_text};
use anyhow::Context;
use scov_core::{ComparisonReport, ScenarioSide};
use scov_ingest::{
    analyze_pair, default_parsers, ParsingAnalyzer, ScenarioAnalyzer, ScenarioCache,
    SimulatedAnalyzer, TextArtifact,
};
use std::path::Path;
use std::time::Duration;

/// Exit status when coverage is below `fail_under`
pub const EXIT_BELOW_THRESHOLD: i32 = 2;

/// Rendered output and process exit status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout
    pub output: String,
    /// Process exit status
    pub exit_code: i32,
}

/// Build the analyzer selected by config
#[must_use]
pub fn build_analyzer(config: &ScovConfig) -> Box<dyn ScenarioAnalyzer> {
    match config.analyzer {
        AnalyzerKind::Simulated => Box::new(SimulatedAnalyzer::new(config.simulate_delay())),
        AnalyzerKind::Parsing => {
            let cache = match config.cache.ttl_secs {
                Some(ttl) => ScenarioCache::with_ttl(config.cache.max_capacity, Duration::from_secs(ttl)),
                None => ScenarioCache::new(config.cache.max_capacity),
            };
            Box::new(
                ParsingAnalyzer::new(default_parsers(), cache)
                    .with_default_format(config.default_format.clone())
                    .with_strict(config.strict),
            )
        }
    }
}

async fn load_artifact(path: &Path, side: ScenarioSide) -> anyhow::Result<TextArtifact> {
    TextArtifact::load(path, side)
        .await
        .with_context(|| format!("failed to read {side} file {}", path.display()))
}

/// Read, analyse and compare two files
///
/// # Errors
/// Returns error if either file cannot be read or analysed
pub async fn compare_files(
    source: &Path,
    qa: &Path,
    config: &ScovConfig,
) -> anyhow::Result<ComparisonReport> {
    let (source, qa) = tokio::try_join!(
        load_artifact(source, ScenarioSide::Source),
        load_artifact(qa, ScenarioSide::Qa)
    )?;

    let analyzer = build_analyzer(config);
    let (source_list, qa_list) = analyze_pair(analyzer.as_ref(), &source, &qa).await?;

    let report = ComparisonReport::build(&source_list, &qa_list);
    tracing::info!(
        coverage = report.coverage,
        missing = report.comparison.missing.len(),
        overlap = report.comparison.overlap.len(),
        edge_cases = report.comparison.edge_cases.len(),
        "comparison complete"
    );
    Ok(report)
}

fn threshold_exit(report: &ComparisonReport, config: &ScovConfig) -> i32 {
    match config.fail_under {
        Some(min) if !report.meets_threshold(min) => {
            tracing::warn!(coverage = report.coverage, fail_under = min, "coverage below threshold");
            EXIT_BELOW_THRESHOLD
        }
        _ => 0,
    }
}

/// `scov compare`
///
/// # Errors
/// Returns error if comparison or rendering fails
pub async fn run_compare(source: &Path, qa: &Path, config: &ScovConfig) -> anyhow::Result<Outcome> {
    let report = compare_files(source, qa, config).await?;
    let output = match config.output {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report).context("failed to serialize report")?,
    };
    Ok(Outcome {
        output,
        exit_code: threshold_exit(&report, config),
    })
}

/// `scov coverage`
///
/// # Errors
/// Returns error if comparison fails
pub async fn run_coverage(source: &Path, qa: &Path, config: &ScovConfig) -> anyhow::Result<Outcome> {
    let report = compare_files(source, qa, config).await?;
    Ok(Outcome {
        output: format!("{}%\n", report.coverage),
        exit_code: threshold_exit(&report, config),
    })
}

/// `scov parsers`
#[must_use]
pub fn run_parsers() -> Outcome {
    let registry = default_parsers();
    let mut output = String::new();
    for parser in registry.iter() {
        output.push_str(&format!("{:<10} {}\n", parser.name(), parser.extensions().join(", ")));
    }
    Outcome { output, exit_code: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scov_ingest::IngestError;

    #[test]
    fn parsers_listing_names_every_format() {
        let outcome = run_parsers();
        for name in ["gherkin", "markdown", "json", "yaml", "text"] {
            assert!(outcome.output.contains(name), "missing {name}");
        }
        assert!(outcome.output.contains("feature, gherkin"));
    }

    #[tokio::test]
    async fn missing_file_has_context() {
        let err = compare_files(
            Path::new("/no/such/source.feature"),
            Path::new("/no/such/qa.md"),
            &ScovConfig::new(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
        assert!(matches!(
            err.downcast_ref::<IngestError>(),
            Some(IngestError::Io { path, .. }) if path.ends_with("source.feature") || path.ends_with("qa.md")
        ));
    }
}
