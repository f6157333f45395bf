//! Markdown test plan parser
//!
//! Uses pulldown-cmark. Each heading followed by list items becomes a
//! scenario; the items are its steps. Inline code spans starting with `@` in
//! a heading are tags. Headings without list items are plain section titles.

use crate::error::ParseError;
use crate::parsers::ScenarioParser;
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use scov_core::Scenario;

/// Markdown parser
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownParser;

#[derive(Debug, Default)]
struct Pending {
    title: String,
    tags: Vec<String>,
    steps: Vec<String>,
}

impl Pending {
    fn into_scenario(self) -> Option<Scenario> {
        if self.steps.is_empty() {
            return None;
        }
        let title = MarkdownParser::clean_title(&self.title);
        let mut scenario = Scenario::new(title).with_steps(self.steps);
        for tag in self.tags {
            scenario = scenario.with_tag(tag);
        }
        Some(scenario)
    }
}

impl MarkdownParser {
    /// Create new markdown parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Trim and drop a leading `Scenario:` label
    fn clean_title(raw: &str) -> String {
        let trimmed = raw.trim();
        trimmed
            .strip_prefix("Scenario:")
            .unwrap_or(trimmed)
            .trim()
            .to_string()
    }

    fn push_step(steps: &mut Vec<String>, buf: &mut String) {
        let step = buf.trim();
        if !step.is_empty() {
            steps.push(step.to_string());
        }
        buf.clear();
    }
}

impl ScenarioParser for MarkdownParser {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn parse(&self, text: &str) -> Result<Vec<Scenario>, ParseError> {
        let mut scenarios = Vec::new();
        let mut current: Option<Pending> = None;
        let mut in_heading = false;
        let mut in_code_block = false;
        let mut item_depth = 0usize;
        let mut item_buf = String::new();

        for event in MdParser::new(text) {
            match event {
                Event::Start(Tag::Heading { .. }) => {
                    if let Some(done) = current.take().and_then(Pending::into_scenario) {
                        scenarios.push(done);
                    }
                    current = Some(Pending::default());
                    in_heading = true;
                }
                Event::End(TagEnd::Heading(_)) => in_heading = false,
                Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
                Event::End(TagEnd::CodeBlock) => in_code_block = false,
                Event::Start(Tag::Item) => {
                    // Nested items flatten into separate steps
                    if let Some(ref mut pending) = current {
                        Self::push_step(&mut pending.steps, &mut item_buf);
                    }
                    item_depth += 1;
                }
                Event::End(TagEnd::Item) => {
                    if let Some(ref mut pending) = current {
                        Self::push_step(&mut pending.steps, &mut item_buf);
                    }
                    item_buf.clear();
                    item_depth = item_depth.saturating_sub(1);
                }
                Event::Text(t) if !in_code_block => {
                    if in_heading {
                        if let Some(ref mut pending) = current {
                            pending.title.push_str(&t);
                        }
                    } else if item_depth > 0 {
                        item_buf.push_str(&t);
                    }
                }
                Event::Code(code) => {
                    if in_heading {
                        if let Some(ref mut pending) = current {
                            match code.strip_prefix('@') {
                                Some(tag) if !tag.is_empty() => pending.tags.push(tag.to_string()),
                                _ => pending.title.push_str(&code),
                            }
                        }
                    } else if item_depth > 0 {
                        item_buf.push_str(&code);
                    }
                }
                Event::SoftBreak | Event::HardBreak if item_depth > 0 => item_buf.push(' '),
                _ => {}
            }
        }

        if let Some(done) = current.take().and_then(Pending::into_scenario) {
            scenarios.push(done);
        }

        tracing::debug!(count = scenarios.len(), "parsed markdown scenarios");
        Ok(scenarios)
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }
}
