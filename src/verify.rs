//! Verification primitives for test bodies.
//!
//! Each test body receives a fresh [`Verifier`], which counts how many checks the
//! body attempted and how many of them passed. The ratio of the two
//! determines how many of the test's points are earned.

use serde::Serialize;

use crate::compare::output_compare;

/// The result of a single verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    /// What was verified.
    pub label: String,
    /// Whether it passed.
    pub passed: bool
}

/// Per-test verification context.
///
/// ```
/// use lc3_grader::verify::Verifier;
///
/// let mut v = Verifier::new();
/// v.verify("R0 holds the sum", true);
/// v.verify("R1 is preserved", false);
/// assert_eq!((v.passed(), v.attempts()), (1, 2));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Verifier {
    attempts: u32,
    passed: u32,
    checks: Vec<Check>
}
impl Verifier {
    /// Creates a verifier with no recorded checks.
    pub fn new() -> Self {
        Default::default()
    }

    /// Records one verification and returns whether it passed.
    pub fn verify(&mut self, label: impl Into<String>, passed: bool) -> bool {
        let label = label.into();
        tracing::debug!(%label, passed, "verify");

        self.attempts += 1;
        if passed {
            self.passed += 1;
        }
        self.checks.push(Check { label, passed });
        passed
    }

    /// Records one verification comparing a transcript to the expected output.
    ///
    /// See [`output_compare`] for the comparison rules.
    pub fn verify_output(&mut self, label: impl Into<String>, transcript: &str, expected: &str) -> bool {
        self.verify(label, output_compare(transcript, expected))
    }

    /// Number of verifications attempted.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Number of verifications which passed.
    ///
    /// This is never more than [`Verifier::attempts`].
    pub fn passed(&self) -> u32 {
        self.passed
    }

    /// All recorded checks, in order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Consumes the verifier, returning its checks.
    pub fn into_checks(self) -> Vec<Check> {
        self.checks
    }
}
