//! Serialized scenario list parser (JSON)
//!
//! Accepts either a bare array of scenarios or an object with a `scenarios`
//! field, so exports from other tools load without a wrapper.

use crate::error::ParseError;
use crate::parsers::ScenarioParser;
use scov_core::Scenario;
use serde::Deserialize;

/// Accepted document shapes for JSON and YAML scenario lists
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ScenarioDocument {
    List(Vec<Scenario>),
    Wrapped { scenarios: Vec<Scenario> },
}

impl ScenarioDocument {
    /// Unwrap into scenarios with trimmed titles
    pub(crate) fn into_scenarios(self) -> Vec<Scenario> {
        let list = match self {
            Self::List(list) | Self::Wrapped { scenarios: list } => list,
        };
        list.into_iter()
            .map(|mut s| {
                s.title = s.title.trim().to_string();
                s
            })
            .collect()
    }
}

/// JSON parser
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl ScenarioParser for JsonParser {
    fn name(&self) -> &'static str {
        "json"
    }

    fn parse(&self, text: &str) -> Result<Vec<Scenario>, ParseError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let doc: ScenarioDocument = serde_json::from_str(text)?;
        Ok(doc.into_scenarios())
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}
