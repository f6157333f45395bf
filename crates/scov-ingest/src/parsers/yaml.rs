//! Serialized scenario list parser (YAML)
//!
//! Same document shapes as the JSON parser, via serde_yaml.

use crate::error::ParseError;
use crate::parsers::json::ScenarioDocument;
use crate::parsers::ScenarioParser;
use scov_core::Scenario;

/// YAML parser
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl ScenarioParser for YamlParser {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn parse(&self, text: &str) -> Result<Vec<Scenario>, ParseError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let doc: ScenarioDocument = serde_yaml::from_str(text)?;
        Ok(doc.into_scenarios())
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_list_with_steps_and_tags() {
        let text = r"
scenarios:
  - title: Export report
    steps:
      - Given a finished run
      - When I export
    tags: [reporting]
  - title: Empty export
";
        let scenarios = YamlParser.parse(text).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].steps.len(), 2);
        assert!(scenarios[0].has_tag("reporting"));
        assert!(scenarios[1].steps.is_empty());
    }

    #[test]
    fn bare_list() {
        let text = "- title: A\n- title: B\n";
        let titles: Vec<_> = YamlParser.parse(text).unwrap().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn malformed_yaml_is_error() {
        assert!(matches!(YamlParser.parse("title: [unclosed"), Err(ParseError::Yaml(_))));
    }
}
