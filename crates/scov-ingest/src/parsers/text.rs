//! Plain text parser
//!
//! One scenario title per non-empty line. Lines starting with `#` are
//! comments. Used as the fallback when nothing more specific matches.

use crate::error::ParseError;
use crate::parsers::ScenarioParser;
use scov_core::Scenario;

/// Plain text parser
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl ScenarioParser for PlainTextParser {
    fn name(&self) -> &'static str {
        "text"
    }

    fn parse(&self, text: &str) -> Result<Vec<Scenario>, ParseError> {
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(Scenario::new)
            .collect())
    }

    fn extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn priority(&self) -> i32 {
        -10
    }
}
