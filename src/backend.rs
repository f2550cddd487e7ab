//! The contract between the grader and the LC-3 toolchain it drives.
//!
//! The grader never assembles or executes code itself. Instead, it calls into:
//! - a [`Backend`], which assembles input files into images and creates machines, and
//! - a [`Machine`], which loads images and runs test bodies.
//!
//! The assignment being graded plugs in through [`Assignment`],
//! which registers the test cases and optionally prepares and cleans up each machine.

use std::path::Path;

use rand::RngCore;

use crate::err::{AsmError, LoadError};
use crate::io::{BufferedPrinter, Inputter};
use crate::suite::TestSuite;

/// An assembler and simulator pair.
pub trait Backend {
    /// An assembled machine image (object file).
    type Image;

    /// The machine that images are loaded into.
    type Machine: Machine<Image = Self::Image>;

    /// Assembles an LC-3 source file.
    fn assemble(&self, path: &Path) -> Result<Self::Image, AsmError>;

    /// Converts a `.bin` file (one binary word per line) into an image.
    fn convert_bin(&self, path: &Path) -> Result<Self::Image, AsmError>;

    /// Creates a fresh machine which writes its console output to `printer`
    /// and reads its console input from `inputter`.
    ///
    /// The machine must report faults during execution as errors
    /// (rather than printing them and carrying on).
    fn create_machine(&self, printer: BufferedPrinter, inputter: Box<dyn Inputter>) -> Self::Machine;
}

/// A simulated LC-3 machine, as seen by the grader.
///
/// Test bodies receive the concrete machine type,
/// so they can use everything the backend offers beyond this trait.
pub trait Machine {
    /// The image type this machine loads.
    type Image;

    /// Loads an image into memory.
    fn load_image(&mut self, image: &Self::Image) -> Result<(), LoadError>;

    /// Fills the user region of memory and the register file with random values.
    fn randomize(&mut self, rng: &mut dyn RngCore);

    /// The printer this machine writes its console output to.
    fn printer(&self) -> &BufferedPrinter;

    /// Replaces the source of console input.
    fn set_inputter(&mut self, inputter: Box<dyn Inputter>);

    /// Everything the machine has written to its console so far.
    fn output(&self) -> String {
        self.printer().transcript()
    }
}

/// The assignment being graded.
pub trait Assignment<M> {
    /// Registers the test cases.
    ///
    /// This is called exactly once, before any test runs.
    fn setup(&self) -> TestSuite<M>;

    /// Prepares a fresh machine before its test runs.
    fn bringup(&self, _machine: &mut M) {}

    /// Inspects or cleans up a machine after its test body completes successfully.
    fn teardown(&self, _machine: &mut M) {}
}
