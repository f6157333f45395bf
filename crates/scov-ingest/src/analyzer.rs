//! Scenario analyzers
//!
//! An analyzer turns a [`TextArtifact`] into a scenario list. The comparison
//! core never sees artifacts, only the lists produced here.
//!
//! - [`ParsingAnalyzer`]: picks a parser by file extension, validates and caches
//! - [`SimulatedAnalyzer`]: fixed lists after a delay, content ignored

use crate::artifact::TextArtifact;
use crate::cache::{CacheKey, ScenarioCache};
use crate::error::{IngestError, IngestResult, ParseError};
use crate::parsers::{default_parsers, ParserRegistry, ScenarioParser};
use async_trait::async_trait;
use scov_core::{validate_scenarios, Scenario, ScenarioSide};
use std::sync::Arc;
use std::time::Duration;

/// Produces scenarios from an artifact
#[async_trait]
pub trait ScenarioAnalyzer: Send + Sync {
    /// Analyse one artifact
    async fn analyze(&self, artifact: &TextArtifact) -> IngestResult<Vec<Scenario>>;
}

/// Analyse a source and a QA artifact concurrently
///
/// # Errors
/// Returns the first analysis error from either side.
pub async fn analyze_pair(
    analyzer: &dyn ScenarioAnalyzer,
    source: &TextArtifact,
    qa: &TextArtifact,
) -> IngestResult<(Vec<Scenario>, Vec<Scenario>)> {
    tracing::info!(source = source.name(), qa = qa.name(), "analysing artifacts");
    futures::try_join!(analyzer.analyze(source), analyzer.analyze(qa))
}

/// Parser-backed analyzer with a content-addressed cache
#[derive(Debug, Clone)]
pub struct ParsingAnalyzer {
    registry: Arc<ParserRegistry>,
    cache: ScenarioCache,
    default_format: String,
    strict: bool,
}

impl Default for ParsingAnalyzer {
    fn default() -> Self {
        Self::new(default_parsers(), ScenarioCache::default())
    }
}

impl ParsingAnalyzer {
    /// Create analyzer over a registry and cache
    #[must_use]
    pub fn new(registry: ParserRegistry, cache: ScenarioCache) -> Self {
        Self {
            registry: Arc::new(registry),
            cache,
            default_format: "txt".to_string(),
            strict: false,
        }
    }

    /// Extension assumed when an artifact's own extension is unknown
    #[must_use]
    pub fn with_default_format(mut self, ext: impl Into<String>) -> Self {
        self.default_format = ext.into();
        self
    }

    /// Reject duplicate titles within one list
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parser registry in use
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Cache in use
    #[inline]
    #[must_use]
    pub fn cache(&self) -> &ScenarioCache {
        &self.cache
    }

    fn select_parser(&self, artifact: &TextArtifact) -> Result<&dyn ScenarioParser, ParseError> {
        let ext = artifact.extension();
        if let Some(parser) = ext.as_deref().and_then(|e| self.registry.find_for_extension(e)) {
            tracing::debug!(artifact = artifact.name(), parser = parser.name(), "selected parser");
            return Ok(parser);
        }

        tracing::warn!(
            artifact = artifact.name(),
            fallback = %self.default_format,
            "no parser for extension, using default format"
        );
        self.registry
            .find_for_extension(&self.default_format)
            .ok_or_else(|| {
                let missing = ext.unwrap_or_else(|| self.default_format.clone());
                ParseError::NoParserForExtension(missing)
            })
    }
}

#[async_trait]
impl ScenarioAnalyzer for ParsingAnalyzer {
    async fn analyze(&self, artifact: &TextArtifact) -> IngestResult<Vec<Scenario>> {
        let parser = self
            .select_parser(artifact)
            .map_err(|e| IngestError::parse(artifact.name(), e))?;

        let key = CacheKey::new(*artifact.hash(), parser.name());
        let scenarios = self
            .cache
            .try_get_or_insert_with(key, || async {
                parser
                    .parse(artifact.text())
                    .map_err(|e| IngestError::parse(artifact.name(), e))
            })
            .await?;

        validate_scenarios(artifact.side(), &scenarios, self.strict).map_err(|source| {
            IngestError::Validation {
                name: artifact.name().to_string(),
                source,
            }
        })?;

        tracing::info!(
            artifact = artifact.name(),
            side = %artifact.side(),
            count = scenarios.len(),
            "extracted scenarios"
        );
        Ok(scenarios.as_ref().clone())
    }
}

/// Stand-in analyzer returning fixed lists after a delay
///
/// Useful for demos and for exercising the pipeline without real input. The
/// artifact text is ignored; only its side selects the list.
#[derive(Debug, Clone)]
pub struct SimulatedAnalyzer {
    delay: Duration,
    source: Vec<Scenario>,
    qa: Vec<Scenario>,
}

impl Default for SimulatedAnalyzer {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl SimulatedAnalyzer {
    /// Create analyzer with the built-in sample lists
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let login_ok = Scenario::new("User logs in with valid credentials")
            .with_steps([
                "Given a registered user",
                "When they submit a valid email and password",
                "Then they land on the dashboard",
            ])
            .with_tag("auth");
        let reset = Scenario::new("User resets a forgotten password").with_steps([
            "Given a registered user",
            "When they request a password reset",
            "Then a reset email is sent",
        ]);
        let lockout = Scenario::new("Account locks after repeated failures").with_steps([
            "Given a registered user",
            "When they fail to log in five times",
            "Then the account is locked",
        ]);
        let empty_form = Scenario::new("Login form rejects empty fields")
            .with_steps([
                "Given the login page",
                "When they submit without input",
                "Then validation errors are shown",
            ])
            .with_tag("edge");

        Self {
            delay,
            source: vec![login_ok.clone(), reset.clone(), lockout],
            qa: vec![login_ok, reset, empty_form],
        }
    }

    /// Replace the list returned for source artifacts
    #[must_use]
    pub fn with_source(mut self, scenarios: Vec<Scenario>) -> Self {
        self.source = scenarios;
        self
    }

    /// Replace the list returned for QA artifacts
    #[must_use]
    pub fn with_qa(mut self, scenarios: Vec<Scenario>) -> Self {
        self.qa = scenarios;
        self
    }
}

#[async_trait]
impl ScenarioAnalyzer for SimulatedAnalyzer {
    async fn analyze(&self, artifact: &TextArtifact) -> IngestResult<Vec<Scenario>> {
        tokio::time::sleep(self.delay).await;
        Ok(match artifact.side() {
            ScenarioSide::Source => self.source.clone(),
            ScenarioSide::Qa => self.qa.clone(),
        })
    }
}
