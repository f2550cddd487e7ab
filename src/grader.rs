//! The grading driver.
//!
//! [`Grader::run`] performs a full grading run:
//! 1. Every input file is assembled (or converted, for `.bin` files).
//!    A failure is reported but does not stop the remaining files from being processed.
//! 2. The assignment registers its test cases.
//! 3. If every file assembled, each test case runs in order on a fresh machine
//!    with every image loaded, and is scored by the verifications it made.
//! 4. A summary of the total score is printed.
//!
//! Progress is written to the provided writer in the format students see, e.g.:
//! ```text
//! Test: Prints greeting
//! test points earned: 5/10 (50%)
//! ==========
//! Test: Sorts array (Randomized Machine)
//! Test case ran into exception: access violation
//! ==========
//! total points earned: 5/30 (16%)
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::backend::{Assignment, Backend, Machine};
use crate::config::GraderConfig;
use crate::err::GradeError;
use crate::io::{BufferedPrinter, FileInputter};
use crate::score::{percent, points_earned, Report, TestOutcome, TestReport};
use crate::suite::TestCase;
use crate::verify::Verifier;

const SEPARATOR: &str = "==========";

/// Whether a file should be converted as a `.bin` file (rather than assembled).
pub fn is_bin_file(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().ends_with(".bin")
}

/// An assembled input file.
#[derive(Debug, Clone)]
pub struct Input<I> {
    /// The file the image came from.
    pub path: PathBuf,
    /// The assembled image.
    pub image: I
}

/// The result of assembling every input file.
#[derive(Debug, Clone)]
pub struct Inputs<I> {
    /// Images which assembled successfully, in input order.
    pub images: Vec<Input<I>>,
    /// Whether every input file assembled.
    pub valid: bool
}

/// Runs an assignment's test cases against a backend.
#[derive(Debug)]
pub struct Grader<B> {
    backend: B,
    config: GraderConfig
}
impl<B: Backend> Grader<B> {
    /// Creates a new grader.
    pub fn new(backend: B, config: GraderConfig) -> Self {
        Self { backend, config }
    }

    /// Assembles every input file.
    ///
    /// Files ending in `.bin` are converted. Each failure is written to `out`
    /// and marks the result invalid, but all files are still processed.
    pub fn assemble_all<W: Write>(&self, files: &[PathBuf], out: &mut W) -> Result<Inputs<B::Image>, GradeError> {
        let mut inputs = Inputs { images: vec![], valid: true };

        for path in files {
            let result = match is_bin_file(path) {
                true  => self.backend.convert_bin(path),
                false => self.backend.assemble(path),
            };

            match result {
                Ok(image) => {
                    tracing::info!(path = %path.display(), "assembled");
                    inputs.images.push(Input { path: path.clone(), image });
                },
                Err(e) => {
                    tracing::error!(path = %e.path().display(), error = %e, "assembly failed");
                    writeln!(out, "error: {e}")?;
                    inputs.valid = false;
                }
            }
        }

        Ok(inputs)
    }

    /// Grades the input files against the assignment, writing progress to `out`.
    ///
    /// # Errors
    /// This aborts with [`GradeError::Load`] if an image cannot be loaded into a machine
    /// and with [`GradeError::Io`] if `out` cannot be written to.
    /// Faults inside test bodies do not abort the run.
    pub fn run<A, W>(&self, assignment: &A, files: &[PathBuf], out: &mut W) -> Result<Report, GradeError>
        where A: Assignment<B::Machine>,
              W: Write
    {
        let inputs = self.assemble_all(files, out)?;
        let suite = assignment.setup();

        let seed = self.config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, tests = suite.len(), "starting grading run");
        let mut rng = StdRng::seed_from_u64(seed);

        let mut report = Report::new(inputs.valid, seed);
        if inputs.valid {
            for case in &suite {
                let test = self.run_case(assignment, case, &inputs.images, &mut rng, out)?;
                report.record(test);
            }
        } else {
            tracing::warn!("skipping all tests because assembly failed");
        }

        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "total points earned: {}/{} ({}%)", report.total_earned, report.total_possible, report.percent())?;
        out.flush()?;

        Ok(report)
    }

    fn run_case<A, W>(
        &self,
        assignment: &A,
        case: &TestCase<B::Machine>,
        images: &[Input<B::Image>],
        rng: &mut StdRng,
        out: &mut W
    ) -> Result<TestReport, GradeError>
        where A: Assignment<B::Machine>,
              W: Write
    {
        let printer = BufferedPrinter::new(self.config.print_output);
        let mut machine = self.backend.create_machine(printer, Box::new(FileInputter));
        assignment.bringup(&mut machine);

        let mut verifier = Verifier::new();

        write!(out, "Test: {}", case.name)?;
        if case.randomize {
            machine.randomize(rng);
            write!(out, " (Randomized Machine)")?;
        }
        writeln!(out)?;
        // Echoed program output comes after the header.
        out.flush()?;

        for input in images {
            if let Err(source) = machine.load_image(&input.image) {
                writeln!(out, "could not init simulator")?;
                return Err(GradeError::Load { image: input.path.display().to_string(), source });
            }
            tracing::debug!(path = %input.path.display(), "loaded image");
        }

        tracing::info!(test = %case.name, points = case.points, randomized = case.randomize, "running test case");
        if let Err(fault) = case.run(&mut machine, &mut verifier) {
            tracing::warn!(test = %case.name, %fault, "test case faulted");
            writeln!(out, "Test case ran into exception: {fault}")?;

            return Ok(TestReport {
                name: case.name.clone(),
                points: case.points,
                randomized: case.randomize,
                checks: verifier.into_checks(),
                outcome: TestOutcome::Faulted { message: fault.to_string() }
            });
        }

        assignment.teardown(&mut machine);

        for check in verifier.checks() {
            let verdict = match check.passed {
                true  => "correct",
                false => "incorrect",
            };
            writeln!(out, "  {} => {verdict}", check.label)?;
        }

        let (passed, attempts) = (verifier.passed(), verifier.attempts());
        if attempts == 0 {
            tracing::warn!(test = %case.name, "test case made no verifications, scoring it as 0 points");
        }
        let earned = points_earned(passed, attempts, case.points);
        writeln!(out, "test points earned: {earned}/{} ({}%)", case.points, percent(passed.into(), attempts.into()))?;
        writeln!(out, "{SEPARATOR}")?;

        Ok(TestReport {
            name: case.name.clone(),
            points: case.points,
            randomized: case.randomize,
            checks: verifier.into_checks(),
            outcome: TestOutcome::Scored { earned, passed, attempts }
        })
    }
}
