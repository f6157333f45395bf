//! Report rendering
//!
//! Text output lists each bucket with its scenarios, steps indented and tags
//! in brackets. JSON output is the serialized [`ComparisonReport`].

use scov_core::{ComparisonReport, Scenario};
use std::fmt::{self, Display, Formatter};

/// Text view of a report, written through [`Display`]
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a>(pub &'a ComparisonReport);

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(
            f,
            "Coverage: {}% ({} QA / {} source scenarios)",
            report.coverage, report.qa_count, report.source_count
        )?;

        let buckets = [
            ("Missing", &report.comparison.missing),
            ("Overlapping", &report.comparison.overlap),
            ("Edge cases", &report.comparison.edge_cases),
        ];
        for (label, scenarios) in buckets {
            writeln!(f, "\n{label} ({})", scenarios.len())?;
            if scenarios.is_empty() {
                writeln!(f, "  (none)")?;
            }
            for scenario in scenarios {
                write_scenario(f, scenario)?;
            }
        }
        Ok(())
    }
}

fn write_scenario(f: &mut Formatter<'_>, scenario: &Scenario) -> fmt::Result {
    write!(f, "  - {}", scenario.title)?;
    if let Some(tags) = scenario.tags.as_ref().filter(|t| !t.is_empty()) {
        let joined: Vec<&str> = tags.iter().map(String::as_str).collect();
        write!(f, " [{}]", joined.join(", "))?;
    }
    writeln!(f)?;
    for step in &scenario.steps {
        writeln!(f, "      {step}")?;
    }
    Ok(())
}

/// Render report as human-readable text
#[must_use]
pub fn render_text(report: &ComparisonReport) -> String {
    TextReport(report).to_string()
}

/// Render report as pretty JSON
///
/// # Errors
/// Returns error if serialization fails
pub fn render_json(report: &ComparisonReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComparisonReport {
        let source = vec![
            Scenario::new("A").with_step("Given a").with_tag("core"),
            Scenario::new("B"),
        ];
        let qa = vec![Scenario::new("B"), Scenario::new("C")];
        ComparisonReport::build(&source, &qa)
    }

    #[test]
    fn text_lists_buckets() {
        let text = render_text(&sample());
        assert!(text.starts_with("Coverage: 100% (2 QA / 2 source scenarios)"));
        assert!(text.contains("Missing (1)\n  - A [core]\n      Given a\n"));
        assert!(text.contains("Overlapping (1)\n  - B\n"));
        assert!(text.contains("Edge cases (1)\n  - C\n"));
    }

    #[test]
    fn text_report_display_matches_render_text() {
        let report = sample();
        let text = render_text(&report);
        assert_eq!(format!("{}", TextReport(&report)), text);
        assert_eq!(
            text,
            "Coverage: 100% (2 QA / 2 source scenarios)\n\
             \nMissing (1)\n  - A [core]\n      Given a\n\
             \nOverlapping (1)\n  - B\n\
             \nEdge cases (1)\n  - C\n"
        );
    }

    #[test]
    fn empty_buckets_say_none() {
        let report = ComparisonReport::build(&[], &[]);
        let text = render_text(&report);
        assert_eq!(text.matches("(none)").count(), 3);
    }

    #[test]
    fn json_round_trips_through_value() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["coverage"], 100);
        assert_eq!(value["overlap"][0]["title"], "B");
    }
}
