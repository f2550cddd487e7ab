//! The entry point for assignment grader binaries.
//!
//! An assignment's grader binary only needs to provide a backend and the assignment:
//! ```ignore
//! fn main() -> std::process::ExitCode {
//!     lc3_grader::cli::main_with(MyBackend::default(), MyAssignment)
//! }
//! ```

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::backend::{Assignment, Backend};
use crate::config::Cli;
use crate::err::GradeError;
use crate::grader::Grader;
use crate::score::Report;

/// Parses the command line, grades, and returns the process exit status.
///
/// The exit status is 0 if grading completed (regardless of score),
/// 2 if an image could not be loaded into a machine,
/// and 1 for any other failure (including an invalid command line).
pub fn main_with<B, A>(backend: B, assignment: A) -> ExitCode
    where B: Backend,
          A: Assignment<B::Machine>
{
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };
    init_logging(&cli.log_level);

    let mut stdout = std::io::stdout().lock();
    match run(&cli, backend, &assignment, &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// The exit status for a command line which could not be parsed.
///
/// `--help` and `--version` exit with 0. Usage errors exit with 1,
/// since 2 is reserved for load failures.
pub fn usage_exit_code(e: &clap::Error) -> u8 {
    match e.use_stderr() {
        true  => 1,
        false => 0,
    }
}

/// Installs the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` takes priority over `default_filter`.
/// If a subscriber is already installed, this does nothing.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Grades with already parsed arguments, writing progress to `out`.
///
/// This returns the exit status for a completed run
/// (0, or 2 if an image could not be loaded).
/// If requested, the JSON report is written once grading completes.
pub fn run<B, A, W>(cli: &Cli, backend: B, assignment: &A, out: &mut W) -> anyhow::Result<u8>
    where B: Backend,
          A: Assignment<B::Machine>,
          W: Write
{
    let grader = Grader::new(backend, cli.config());

    let report = match grader.run(assignment, &cli.files, out) {
        Ok(report) => report,
        Err(e @ GradeError::Load { .. }) => {
            tracing::error!(error = %e, "aborting grading run");
            return Ok(e.exit_code());
        },
        Err(e) => return Err(e.into()),
    };

    if let Some(path) = &cli.report {
        write_report(&report, path)?;
        tracing::info!(path = %path.display(), "wrote report");
    }

    Ok(0)
}

/// Writes a report as JSON.
pub fn write_report(report: &Report, path: &Path) -> anyhow::Result<()> {
    let json = report.to_json()
        .context("could not serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("could not write report to {}", path.display()))
}
