//! SCOV Core - scenario coverage and comparison
//!
//! Pure, synchronous building blocks:
//! - [`Scenario`] records and the [`ScenarioSide`] they come from
//! - [`calculate_coverage`]: QA count as a percentage of source count
//! - [`compare_scenarios`]: missing / overlap / edge-case partition by title
//! - [`ComparisonReport`]: both of the above in one serializable value
//!
//! # Example
//!
//! ```rust
//! use scov_core::{calculate_coverage, compare_scenarios, Scenario};
//!
//! let source = vec![Scenario::new("A"), Scenario::new("B")];
//! let qa = vec![Scenario::new("B"), Scenario::new("C")];
//!
//! let result = compare_scenarios(&source, &qa);
//! assert_eq!(result.missing, vec![Scenario::new("A")]);
//! assert_eq!(result.overlap, vec![Scenario::new("B")]);
//! assert_eq!(result.edge_cases, vec![Scenario::new("C")]);
//! assert_eq!(calculate_coverage(&source, &qa), 100);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod compare;
pub mod coverage;
pub mod error;
pub mod report;
pub mod scenario;

pub use compare::{compare_scenarios, BucketCounts, ScenarioComparison};
pub use coverage::{calculate_coverage, coverage_ratio};
pub use error::{validate_scenarios, ScovError, ScovResult};
pub use report::ComparisonReport;
pub use scenario::{Scenario, ScenarioSide};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with SCOV Core
    pub use crate::{
        calculate_coverage, compare_scenarios, ComparisonReport, Scenario, ScenarioComparison,
        ScenarioSide,
    };
}
