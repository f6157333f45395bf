//! SCOV command line front end
//!
//! Library half of the `scov` binary: config resolution, logging setup,
//! command definitions and rendering. Kept separate from `main.rs` so the
//! pipeline can be tested without spawning a process.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;

pub use cli::{command, Overrides};
pub use commands::{compare_files, run_compare, run_coverage, run_parsers, Outcome};
pub use config::{AnalyzerKind, ConfigError, OutputFormat, ScovConfig};
