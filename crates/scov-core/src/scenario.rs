//! Scenario data model
//!
//! A [`Scenario`] is a named, step-sequenced behavioural test case. Only the
//! title takes part in comparison; steps and tags are display payload.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A behaviour-style scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Identity key used by the comparator
    pub title: String,
    /// Ordered steps (Given/When/Then or free text)
    #[serde(default)]
    pub steps: Vec<String>,
    /// Optional tag set, insertion ordered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<IndexSet<String>>,
}

impl Scenario {
    /// Create scenario with a title and no steps
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            steps: Vec::new(),
            tags: None,
        }
    }

    /// Append a step
    #[inline]
    #[must_use]
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Replace all steps
    #[must_use]
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Add a tag, creating the tag set on first use
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(IndexSet::new).insert(tag.into());
        self
    }

    /// Title used for membership checks
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the scenario carries the given tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.as_ref().is_some_and(|t| t.contains(tag))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Which side of the comparison a scenario list represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioSide {
    /// Ground truth scenarios derived from the source description
    Source,
    /// Scenarios observed in the QA test description
    Qa,
}

impl fmt::Display for ScenarioSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Qa => f.write_str("qa"),
        }
    }
}
