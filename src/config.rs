//! Command line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

/// Grades LC-3 programs against an assignment's test cases.
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct Cli {
    /// LC-3 source files to assemble (files ending in `.bin` are converted instead).
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Echo the program's console output while tests run.
    #[arg(long)]
    pub print_output: bool,

    /// Seed for randomized machine state (random if not given).
    #[arg(long, env = "LC3_GRADER_SEED")]
    pub seed: Option<u64>,

    /// Write a JSON report of the results to this path.
    #[arg(long, value_name = "PATH", env = "LC3_GRADER_REPORT")]
    pub report: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn", env = "LC3_GRADER_LOG")]
    pub log_level: String
}
impl Cli {
    /// The grader settings selected by these arguments.
    pub fn config(&self) -> GraderConfig {
        GraderConfig { print_output: self.print_output, seed: self.seed }
    }
}

/// Settings for a [`Grader`].
///
/// [`Grader`]: crate::grader::Grader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraderConfig {
    /// Whether each machine's printer echoes to stdout.
    pub print_output: bool,
    /// Seed for randomized machine state.
    pub seed: Option<u64>
}
