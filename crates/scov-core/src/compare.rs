//! Source/QA scenario comparison
//!
//! Partitions two scenario lists by title membership:
//!
//! ```text
//! source ──┬── title ∉ qa titles ──→ missing
//!          └── title ∈ qa titles ──→ overlap
//! qa ──────── title ∉ source titles → edge cases
//! ```
//!
//! Classification is per element, so duplicate titles each land in the same
//! bucket. Bucket order follows the originating list.

use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of comparing a source list against a QA list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    /// Source scenarios with no title-matching QA scenario
    pub missing: Vec<Scenario>,
    /// Source scenarios with a title-matching QA scenario
    pub overlap: Vec<Scenario>,
    /// QA scenarios with no title-matching source scenario
    pub edge_cases: Vec<Scenario>,
}

/// Bucket sizes of a [`ScenarioComparison`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCounts {
    /// Number of missing scenarios
    pub missing: usize,
    /// Number of overlapping scenarios
    pub overlap: usize,
    /// Number of edge-case scenarios
    pub edge_cases: usize,
}

impl ScenarioComparison {
    /// True when every source scenario is covered by QA
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Sizes of the three buckets
    #[inline]
    #[must_use]
    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            missing: self.missing.len(),
            overlap: self.overlap.len(),
            edge_cases: self.edge_cases.len(),
        }
    }
}

/// Compare `source` against `qa` by title
///
/// Inputs are not modified; matching scenarios are cloned into the buckets.
#[must_use]
pub fn compare_scenarios(source: &[Scenario], qa: &[Scenario]) -> ScenarioComparison {
    let qa_titles: HashSet<&str> = qa.iter().map(Scenario::title).collect();
    let source_titles: HashSet<&str> = source.iter().map(Scenario::title).collect();

    let (overlap, missing): (Vec<Scenario>, Vec<Scenario>) = source
        .iter()
        .cloned()
        .partition(|s| qa_titles.contains(s.title()));

    let edge_cases = qa
        .iter()
        .filter(|s| !source_titles.contains(s.title()))
        .cloned()
        .collect();

    ScenarioComparison {
        missing,
        overlap,
        edge_cases,
    }
}
