//! Combined comparison report
//!
//! Bundles the coverage percentage with the three comparison buckets so a
//! presentation layer can render everything from one value.

use crate::compare::{compare_scenarios, ScenarioComparison};
use crate::coverage::coverage_ratio;
use crate::scenario::Scenario;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coverage plus bucketed comparison for one source/QA pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// QA count as a percentage of source count (may exceed 100)
    pub coverage: u64,
    /// Number of source scenarios
    pub source_count: usize,
    /// Number of QA scenarios
    pub qa_count: usize,
    /// Missing / overlap / edge-case buckets
    #[serde(flatten)]
    pub comparison: ScenarioComparison,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl ComparisonReport {
    /// Build report for the given lists
    #[must_use]
    pub fn build(source: &[Scenario], qa: &[Scenario]) -> Self {
        Self {
            coverage: coverage_ratio(source.len(), qa.len()),
            source_count: source.len(),
            qa_count: qa.len(),
            comparison: compare_scenarios(source, qa),
            generated_at: Utc::now(),
        }
    }

    /// Whether coverage reaches `min` percent
    #[inline]
    #[must_use]
    pub fn meets_threshold(&self, min: u64) -> bool {
        self.coverage >= min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fills_counts_and_buckets() {
        let source = vec![Scenario::new("A"), Scenario::new("B")];
        let qa = vec![Scenario::new("B"), Scenario::new("C"), Scenario::new("D")];
        let report = ComparisonReport::build(&source, &qa);

        assert_eq!(report.coverage, 150);
        assert_eq!(report.source_count, 2);
        assert_eq!(report.qa_count, 3);
        assert_eq!(report.comparison.missing, vec![Scenario::new("A")]);
        assert_eq!(report.comparison.edge_cases.len(), 2);
    }

    #[test]
    fn threshold() {
        let source = vec![Scenario::new("A"), Scenario::new("B")];
        let qa = vec![Scenario::new("A")];
        let report = ComparisonReport::build(&source, &qa);

        assert!(report.meets_threshold(50));
        assert!(!report.meets_threshold(51));
    }

    #[test]
    fn json_is_flat() {
        let report = ComparisonReport::build(&[Scenario::new("A")], &[]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["coverage"], 0);
        assert_eq!(json["sourceCount"], 1);
        assert_eq!(json["missing"][0]["title"], "A");
        assert!(json["edgeCases"].as_array().unwrap().is_empty());
        assert!(json.get("generatedAt").is_some());
    }
}
