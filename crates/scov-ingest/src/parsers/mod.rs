//! Scenario parsers for different artifact formats
//!
//! Provides extraction of scenario lists from:
//! - Gherkin feature files
//! - Markdown test plans via pulldown-cmark
//! - Serialized scenario lists (JSON, YAML) via serde
//! - Plain text, one scenario title per line

use crate::error::ParseError;
use scov_core::Scenario;
use std::path::Path;

mod gherkin;
mod json;
mod markdown;
mod text;
mod yaml;

pub use gherkin::GherkinParser;
pub use json::JsonParser;
pub use markdown::MarkdownParser;
pub use text::PlainTextParser;
pub use yaml::YamlParser;

/// Parser trait for turning artifact text into scenarios
///
/// Implement this trait to add support for new formats. Parsers trim titles
/// but leave validation to the caller.
pub trait ScenarioParser: Send + Sync + 'static {
    /// Short format name used in logs and cache keys
    fn name(&self) -> &'static str;

    /// Parse text into an ordered scenario list
    fn parse(&self, text: &str) -> Result<Vec<Scenario>, ParseError>;

    /// Supported file extensions (without dot, lowercase)
    fn extensions(&self) -> &[&str];

    /// Check if this parser can handle the given path
    fn can_parse(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.handles_extension(ext))
    }

    /// Check if this parser handles the extension (case-insensitive)
    fn handles_extension(&self, ext: &str) -> bool {
        self.extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Parser priority (higher = tried first when multiple parsers match)
    fn priority(&self) -> i32 {
        0
    }
}

/// Registry of available parsers, ordered by priority
pub struct ParserRegistry {
    parsers: Vec<Box<dyn ScenarioParser>>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        default_parsers()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parser_count", &self.parsers.len())
            .field("extensions", &self.all_extensions())
            .finish()
    }
}

impl ParserRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Register a parser
    pub fn register<P: ScenarioParser>(&mut self, parser: P) {
        self.parsers.push(Box::new(parser));
        // Stable sort keeps registration order among equal priorities
        self.parsers
            .sort_by_key(|p| std::cmp::Reverse(p.priority()));
    }

    /// Find parser for path
    #[must_use]
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn ScenarioParser> {
        self.parsers.iter().find(|p| p.can_parse(path)).map(|p| &**p)
    }

    /// Find parser for a bare extension
    #[must_use]
    pub fn find_for_extension(&self, ext: &str) -> Option<&dyn ScenarioParser> {
        self.parsers
            .iter()
            .find(|p| p.handles_extension(ext))
            .map(|p| &**p)
    }

    /// Get all registered extensions
    #[must_use]
    pub fn all_extensions(&self) -> Vec<&str> {
        self.parsers
            .iter()
            .flat_map(|p| p.extensions())
            .copied()
            .collect()
    }

    /// Iterate parsers in priority order
    pub fn iter(&self) -> impl Iterator<Item = &dyn ScenarioParser> {
        self.parsers.iter().map(|p| &**p)
    }
}

/// Create default parser registry with built-in parsers
#[must_use]
pub fn default_parsers() -> ParserRegistry {
    let mut registry = ParserRegistry::new();

    registry.register(GherkinParser);
    registry.register(MarkdownParser);
    registry.register(JsonParser);
    registry.register(YamlParser);
    registry.register(PlainTextParser);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CsvTitles;

    impl ScenarioParser for CsvTitles {
        fn name(&self) -> &'static str {
            "csv"
        }

        fn parse(&self, text: &str) -> Result<Vec<Scenario>, ParseError> {
            Ok(text.split(',').map(|t| Scenario::new(t.trim())).collect())
        }

        fn extensions(&self) -> &[&str] {
            &["csv", "txt"]
        }

        fn priority(&self) -> i32 {
            10
        }
    }

    #[test]
    fn parser_can_parse_by_extension() {
        let parser = CsvTitles;

        assert!(parser.can_parse(Path::new("file.csv")));
        assert!(parser.can_parse(Path::new("/path/to/FILE.CSV")));
        assert!(!parser.can_parse(Path::new("file.md")));
        assert!(!parser.can_parse(Path::new("file")));
    }

    #[test]
    fn registry_find_parser() {
        let registry = default_parsers();

        assert_eq!(registry.find_for_path(Path::new("a.feature")).map(|p| p.name()), Some("gherkin"));
        assert_eq!(registry.find_for_path(Path::new("a.md")).map(|p| p.name()), Some("markdown"));
        assert_eq!(registry.find_for_extension("YML").map(|p| p.name()), Some("yaml"));
        assert!(registry.find_for_path(Path::new("a.docx")).is_none());
    }

    #[test]
    fn higher_priority_wins() {
        let mut registry = default_parsers();
        registry.register(CsvTitles);

        assert_eq!(registry.find_for_extension("txt").map(|p| p.name()), Some("csv"));
        assert_eq!(registry.iter().next().map(|p| p.name()), Some("csv"));
    }

    #[test]
    fn registry_all_extensions() {
        let registry = default_parsers();
        let exts = registry.all_extensions();
        for ext in ["feature", "md", "json", "yaml", "yml", "txt"] {
            assert!(exts.contains(&ext), "missing {ext}");
        }
    }

    #[test]
    fn registry_debug() {
        let debug_str = format!("{:?}", default_parsers());
        assert!(debug_str.contains("ParserRegistry"));
    }
}
