//! A pass/fail grading harness for LC-3 programs.
//!
//! This crate runs an assignment's test cases against student programs.
//! It does not assemble or simulate LC-3 code itself; that is delegated to
//! a [`Backend`](backend::Backend) (an assembler and simulator pair).
//!
//! # Usage
//!
//! An assignment registers its test cases by implementing [`Assignment`](backend::Assignment).
//! Each test case has a name, a point weight, and whether to randomize the machine beforehand.
//! Test bodies run the program and make verifications, and the fraction of verifications
//! which pass determines the points earned:
//! ```
//! use lc3_grader::backend::Assignment;
//! use lc3_grader::suite::TestSuite;
//! # use lc3_grader::backend::Machine;
//! # use lc3_grader::err::LoadError;
//! # use lc3_grader::io::{BufferedPrinter, Inputter, Printer};
//! #
//! # struct Sim { printer: BufferedPrinter }
//! # impl Sim {
//! #     fn run(&mut self) -> Result<(), lc3_grader::err::MachineFault> {
//! #         self.printer.print("Hello, World!\n\n--- Halting the LC-3 ---\n\n");
//! #         Ok(())
//! #     }
//! # }
//! # impl Machine for Sim {
//! #     type Image = ();
//! #     fn load_image(&mut self, _: &()) -> Result<(), LoadError> { Ok(()) }
//! #     fn randomize(&mut self, _: &mut dyn rand::RngCore) {}
//! #     fn printer(&self) -> &BufferedPrinter { &self.printer }
//! #     fn set_inputter(&mut self, _: Box<dyn Inputter>) {}
//! # }
//!
//! struct HelloWorld;
//! impl Assignment<Sim> for HelloWorld {
//!     fn setup(&self) -> TestSuite<Sim> {
//!         TestSuite::<Sim>::new()
//!             .case("Prints greeting", 10, false, |sim, v| {
//!                 sim.run()?;
//!                 v.verify_output("greeting", &sim.output(), "Hello, World!");
//!                 Ok(())
//!             })
//!     }
//! }
//! ```
//!
//! A grader binary then hands the assignment and a backend to [`cli::main_with`],
//! which parses the command line (see [`config::Cli`]), grades, and prints the results.
//! The [`grader`] module documents the grading procedure in full.
//!
//! # Modules
//! - [`io`]: console output capture and console input sources
//! - [`compare`]: exact comparison of captured output
//! - [`verify`]: per-test verification counters
//! - [`suite`]: the test case registry
//! - [`backend`]: the assembler/simulator contract and assignment hooks
//! - [`score`]: scoring and the grading report
//! - [`grader`]: the grading driver
#![warn(missing_docs)]

pub mod io;
pub mod compare;
pub mod verify;
pub mod suite;
pub mod backend;
pub mod score;
pub mod grader;
pub mod config;
pub mod cli;
pub mod err;
