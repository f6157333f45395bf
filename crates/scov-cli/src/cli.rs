//! Command line definition
//!
//! Flags map onto [`Overrides`], which sit on top of file and env config.

use crate::config::{AnalyzerKind, OutputFormat, ScovConfig};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Build the `scov` command
#[must_use]
pub fn command() -> Command {
    let source = Arg::new("source")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Source description (ground truth scenarios)");
    let qa = Arg::new("qa")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("QA test description");
    let simulate = Arg::new("simulate")
        .long("simulate")
        .action(ArgAction::SetTrue)
        .help("Use fixed sample scenarios instead of parsing the files");

    Command::new("scov")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare source and QA scenarios and report coverage")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Config file (defaults to ./scov.toml when present)"),
        )
        .subcommand(
            Command::new("compare")
                .about("Show missing, overlapping and edge-case scenarios")
                .arg(source.clone())
                .arg(qa.clone())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["text", "json"])
                        .help("Output format"),
                )
                .arg(
                    Arg::new("fail-under")
                        .long("fail-under")
                        .value_parser(value_parser!(u64))
                        .help("Exit with status 2 when coverage is below this percentage"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Reject duplicate scenario titles"),
                )
                .arg(simulate.clone()),
        )
        .subcommand(
            Command::new("coverage")
                .about("Print only the coverage percentage")
                .arg(source)
                .arg(qa)
                .arg(simulate),
        )
        .subcommand(Command::new("parsers").about("List supported file extensions"))
}

/// Config values set on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--format`
    pub output: Option<OutputFormat>,
    /// `--fail-under`
    pub fail_under: Option<u64>,
    /// `--strict`
    pub strict: bool,
    /// `--simulate`
    pub simulate: bool,
}

impl Overrides {
    /// Collect overrides from subcommand matches
    #[must_use]
    pub fn from_matches(args: &ArgMatches) -> Self {
        let has = |id: &str| args.try_contains_id(id).unwrap_or(false);
        Self {
            output: if has("format") {
                args.get_one::<String>("format")
                    .and_then(|f| f.parse().ok())
            } else {
                None
            },
            fail_under: if has("fail-under") {
                args.get_one::<u64>("fail-under").copied()
            } else {
                None
            },
            strict: has("strict") && args.get_flag("strict"),
            simulate: has("simulate") && args.get_flag("simulate"),
        }
    }

    /// Apply on top of a resolved config
    #[must_use]
    pub fn apply(&self, mut config: ScovConfig) -> ScovConfig {
        if let Some(output) = self.output {
            config = config.with_output(output);
        }
        if let Some(min) = self.fail_under {
            config = config.with_fail_under(min);
        }
        if self.strict {
            config = config.with_strict(true);
        }
        if self.simulate {
            config = config.with_analyzer(AnalyzerKind::Simulated);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(argv: &[&str]) -> ArgMatches {
        let matches = command().try_get_matches_from(argv).unwrap();
        matches.subcommand().unwrap().1.clone()
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn compare_flags_become_overrides() {
        let args = sub(&[
            "scov", "compare", "a.feature", "b.md", "--format", "json", "--fail-under", "80", "--strict",
        ]);
        let overrides = Overrides::from_matches(&args);
        assert_eq!(
            overrides,
            Overrides {
                output: Some(OutputFormat::Json),
                fail_under: Some(80),
                strict: true,
                simulate: false,
            }
        );

        let config = overrides.apply(ScovConfig::new());
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.fail_under, Some(80));
        assert!(config.strict);
    }

    #[test]
    fn coverage_subcommand_has_no_format() {
        let args = sub(&["scov", "coverage", "a.txt", "b.txt", "--simulate"]);
        let overrides = Overrides::from_matches(&args);
        assert_eq!(overrides.output, None);
        assert!(overrides.simulate);
    }

    #[test]
    fn unset_flags_keep_config() {
        let args = sub(&["scov", "compare", "a.txt", "b.txt"]);
        let config = Overrides::from_matches(&args).apply(ScovConfig::new().with_fail_under(10));
        assert_eq!(config.fail_under, Some(10));
    }

    #[test]
    fn missing_paths_rejected() {
        assert!(command().try_get_matches_from(["scov", "compare", "a.txt"]).is_err());
    }
}
