//! Gherkin feature file parser
//!
//! Line-oriented reader for the subset of Gherkin that matters for coverage:
//! scenario titles, their steps and tags. Data tables, doc strings and
//! `Examples:` blocks are skipped.
//!
//! A `Background:` under `Feature:` applies to every scenario in the file. One
//! under `Rule:` applies only to that rule's scenarios. Description text after
//! `Feature:` or `Rule:` is free-form, even when it starts with a step keyword.

use crate::error::ParseError;
use crate::parsers::ScenarioParser;
use scov_core::Scenario;

const SCENARIO_KEYWORDS: &[&str] = &[
    "Scenario Outline:",
    "Scenario Template:",
    "Scenario:",
    "Example:",
];
const STEP_KEYWORDS: &[&str] = &["Given ", "When ", "Then ", "And ", "But ", "* "];

/// Gherkin parser
#[derive(Debug, Clone, Copy, Default)]
pub struct GherkinParser;

#[derive(Debug, Default)]
struct FeatureState {
    feature_tags: Vec<String>,
    pending_tags: Vec<String>,
    feature_background: Vec<String>,
    background: Vec<String>,
    in_background: bool,
    in_description: bool,
    in_rule: bool,
    in_doc_string: bool,
    current: Option<Scenario>,
    scenarios: Vec<Scenario>,
}

impl FeatureState {
    fn flush(&mut self) {
        if let Some(scenario) = self.current.take() {
            self.scenarios.push(scenario);
        }
    }

    fn start_feature(&mut self) {
        self.flush();
        self.feature_tags = std::mem::take(&mut self.pending_tags);
        self.feature_background.clear();
        self.background.clear();
        self.in_background = false;
        self.in_rule = false;
        self.in_description = true;
    }

    fn start_rule(&mut self) {
        self.flush();
        self.background.clone_from(&self.feature_background);
        self.in_background = false;
        self.in_rule = true;
        self.in_description = true;
    }

    fn start_background(&mut self) {
        self.flush();
        self.in_background = true;
        self.in_description = false;
        self.pending_tags.clear();
    }

    fn start_scenario(&mut self, title: &str) {
        self.flush();
        self.in_background = false;
        self.in_description = false;

        let mut scenario = Scenario::new(title.trim()).with_steps(self.background.iter().cloned());
        for tag in self.feature_tags.iter().chain(self.pending_tags.iter()) {
            scenario = scenario.with_tag(tag.as_str());
        }
        self.pending_tags.clear();
        self.current = Some(scenario);
    }

    fn push_step(&mut self, line_no: usize, step: &str) -> Result<(), ParseError> {
        if let Some(ref mut scenario) = self.current {
            scenario.steps.push(step.to_string());
            Ok(())
        } else if self.in_background {
            if !self.in_rule {
                self.feature_background.push(step.to_string());
            }
            self.background.push(step.to_string());
            Ok(())
        } else if self.in_description {
            tracing::trace!(line = line_no, "step keyword in description text");
            Ok(())
        } else {
            Err(ParseError::syntax_error(
                line_no,
                format!("step outside of a scenario: '{step}'"),
            ))
        }
    }
}

impl GherkinParser {
    /// Create new gherkin parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn scenario_title(line: &str) -> Option<&str> {
        SCENARIO_KEYWORDS
            .iter()
            .find_map(|kw| line.strip_prefix(kw))
    }

    fn is_step(line: &str) -> bool {
        STEP_KEYWORDS.iter().any(|kw| line.starts_with(kw))
    }
}

impl ScenarioParser for GherkinParser {
    fn name(&self) -> &'static str {
        "gherkin"
    }

    fn parse(&self, text: &str) -> Result<Vec<Scenario>, ParseError> {
        let mut state = FeatureState::default();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();

            if line.starts_with("\"\"\"") || line.starts_with("```") {
                state.in_doc_string = !state.in_doc_string;
                continue;
            }
            if state.in_doc_string || line.is_empty() || line.starts_with('#') || line.starts_with('|') {
                continue;
            }

            if line.starts_with('@') {
                state.in_description = false;
                state.pending_tags.extend(
                    line.split_whitespace()
                        .filter_map(|t| t.strip_prefix('@'))
                        .filter(|t| !t.is_empty())
                        .map(str::to_string),
                );
            } else if line.starts_with("Feature:") {
                state.start_feature();
            } else if line.starts_with("Background:") {
                state.start_background();
            } else if line.starts_with("Rule:") {
                state.start_rule();
            } else if line.starts_with("Examples:") || line.starts_with("Scenarios:") {
                state.pending_tags.clear();
            } else if let Some(title) = Self::scenario_title(line) {
                if title.trim().is_empty() {
                    return Err(ParseError::syntax_error(line_no, "scenario without a title"));
                }
                state.start_scenario(title);
            } else if Self::is_step(line) {
                state.push_step(line_no, line)?;
            }
            // anything else is free-form description text
        }

        state.flush();
        tracing::debug!(count = state.scenarios.len(), "parsed gherkin scenarios");
        Ok(state.scenarios)
    }

    fn extensions(&self) -> &[&str] {
        &["feature", "gherkin"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &[Scenario]) -> Vec<&str> {
        list.iter().map(Scenario::title).collect()
    }

    #[test]
    fn gherkin_parser_basic() {
        let text = r"Feature: Login

  Scenario: Valid password
    Given a registered user
    When they enter the right password
    Then they see the dashboard

  Scenario: Wrong password
    Given a registered user
    When they enter a wrong password
    Then they see an error
";
        let scenarios = GherkinParser.parse(text).unwrap();
        assert_eq!(titles(&scenarios), vec!["Valid password", "Wrong password"]);
        assert_eq!(scenarios[0].steps.len(), 3);
        assert_eq!(scenarios[0].steps[1], "When they enter the right password");
        assert!(scenarios[0].tags.is_none());
    }

    #[test]
    fn background_steps_prefix_each_scenario() {
        let text = r"Feature: Cart
  Background:
    Given an empty cart
  Scenario: Add item
    When I add an item
  Scenario: Remove item
    When I remove an item
";
        let scenarios = GherkinParser.parse(text).unwrap();
        assert_eq!(scenarios[0].steps, vec!["Given an empty cart", "When I add an item"]);
        assert_eq!(scenarios[1].steps, vec!["Given an empty cart", "When I remove an item"]);
    }

    #[test]
    fn feature_and_scenario_tags_merge() {
        let text = r"@web
Feature: Search
  @smoke @fast
  Scenario: Search by name
    When I search
  Scenario: Empty search
    When I search nothing
";
        let scenarios = GherkinParser.parse(text).unwrap();
        let first: Vec<_> = scenarios[0].tags.as_ref().unwrap().iter().cloned().collect();
        assert_eq!(first, vec!["web", "smoke", "fast"]);
        assert!(scenarios[1].has_tag("web"));
        assert!(!scenarios[1].has_tag("smoke"));
    }

    #[test]
    fn outlines_tables_and_doc_strings_skipped() {
        let text = r#"Feature: Math
  Scenario Outline: Add <a> and <b>
    Given I have <a>
    And a payload
      """
      Scenario: not a real one
      """
    When I add <b>
      | a | b |
    Examples:
      | a | b |
      | 1 | 2 |
"#;
        let scenarios = GherkinParser.parse(text).unwrap();
        assert_eq!(titles(&scenarios), vec!["Add <a> and <b>"]);
        assert_eq!(scenarios[0].steps.len(), 3);
    }

    #[test]
    fn rule_background_stays_inside_its_rule() {
        let text = r"Feature: F
  Background:
    Given a shop
  Rule: R1
    Background:
      Given r1 setup
    Scenario: A
      When a
  Rule: R2
    Scenario: B
      When b
";
        let scenarios = GherkinParser.parse(text).unwrap();
        assert_eq!(titles(&scenarios), vec!["A", "B"]);
        assert_eq!(scenarios[0].steps, vec!["Given a shop", "Given r1 setup", "When a"]);
        assert_eq!(scenarios[1].steps, vec!["Given a shop", "When b"]);
    }

    #[test]
    fn rule_without_feature_background_starts_empty() {
        let text = r"Feature: F
  Rule: R1
    Background:
      Given r1 setup
    Scenario: A
      When a
  Rule: R2
    Scenario: B
      When b
";
        let scenarios = GherkinParser.parse(text).unwrap();
        assert_eq!(scenarios[1].steps, vec!["When b"]);
    }

    #[test]
    fn description_lines_may_start_with_step_keywords() {
        let text = r"Feature: Accounts
  As a user
  And an admin
  I want to manage accounts

  Rule: Only admins delete
    But users may view

  Scenario: Delete account
    Given an admin
";
        let scenarios = GherkinParser.parse(text).unwrap();
        assert_eq!(titles(&scenarios), vec!["Delete account"]);
        assert_eq!(scenarios[0].steps, vec!["Given an admin"]);
    }

    #[test]
    fn step_outside_scenario_is_error() {
        let err = GherkinParser.parse("Given nothing\nFeature: Broken\n").unwrap_err();
        assert!(matches!(err, ParseError::SyntaxError { line: 1, .. }));

        let text = "Feature: Broken\n  @tagged\n  Given nothing\n";
        let err = GherkinParser.parse(text).unwrap_err();
        assert!(matches!(err, ParseError::SyntaxError { line: 3, .. }));
    }

    #[test]
    fn empty_scenario_title_is_error() {
        let err = GherkinParser.parse("Scenario:   \n").unwrap_err();
        assert!(matches!(err, ParseError::SyntaxError { line: 1, .. }));
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(GherkinParser.parse("").unwrap().is_empty());
        assert!(GherkinParser.parse("# only a comment\n").unwrap().is_empty());
    }
}
