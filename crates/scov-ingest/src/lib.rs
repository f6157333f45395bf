//! SCOV Ingest
//!
//! The analysis collaborator between raw artifact text and the comparison
//! core.
//!
//! # Architecture
//!
//! ```text
//! TextArtifact → ParserRegistry → ScenarioParser → Vec<Scenario> → scov_core
//!                      ↑___________↓
//!                 ScenarioCache (content-addressed)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use scov_ingest::{analyze_pair, ParsingAnalyzer, TextArtifact};
//! use scov_core::{ComparisonReport, ScenarioSide};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = ParsingAnalyzer::default();
//! let source = TextArtifact::new("spec.feature", ScenarioSide::Source, spec_text);
//! let qa = TextArtifact::new("qa.md", ScenarioSide::Qa, qa_text);
//!
//! let (source, qa) = analyze_pair(&analyzer, &source, &qa).await?;
//! let report = ComparisonReport::build(&source, &qa);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod analyzer;
pub mod artifact;
pub mod cache;
pub mod error;
pub mod parsers;

pub use analyzer::{analyze_pair, ParsingAnalyzer, ScenarioAnalyzer, SimulatedAnalyzer};
pub use artifact::{ContentHash, TextArtifact};
pub use cache::{CacheKey, ScenarioCache};
pub use error::{IngestError, IngestResult, ParseError};
pub use parsers::{default_parsers, ParserRegistry, ScenarioParser};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
