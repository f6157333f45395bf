//! Error types for scenario validation
//!
//! Coverage and comparison are total and never fail. These errors belong to
//! the validation step that callers run on scenario lists before comparing.

use crate::scenario::{Scenario, ScenarioSide};
use std::collections::HashSet;

/// Scenario list validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScovError {
    /// A scenario has an empty or whitespace-only title
    #[error("{side} scenario #{index} has an empty title")]
    EmptyTitle {
        /// List the scenario came from
        side: ScenarioSide,
        /// Zero-based position in that list
        index: usize,
    },

    /// Two scenarios share a title (strict mode only)
    #[error("{side} scenarios contain duplicate title: '{title}'")]
    DuplicateTitle {
        /// List the scenarios came from
        side: ScenarioSide,
        /// The repeated title
        title: String,
    },
}

/// Result type alias for validation
pub type ScovResult<T> = Result<T, ScovError>;

/// Check a scenario list before comparison
///
/// Empty titles are always rejected. Duplicate titles are rejected only when
/// `strict` is set; otherwise the comparator classifies each copy on its own.
///
/// # Errors
/// Returns the first violation found, in list order.
pub fn validate_scenarios(
    side: ScenarioSide,
    scenarios: &[Scenario],
    strict: bool,
) -> ScovResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(scenarios.len());
    for (index, scenario) in scenarios.iter().enumerate() {
        if scenario.title.trim().is_empty() {
            return Err(ScovError::EmptyTitle { side, index });
        }
        if strict && !seen.insert(scenario.title()) {
            return Err(ScovError::DuplicateTitle {
                side,
                title: scenario.title.clone(),
            });
        }
    }
    Ok(())
}
