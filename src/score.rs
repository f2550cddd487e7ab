//! Scoring arithmetic and the grading report.
//!
//! A test's earned points are `floor(passed / attempts * points)`.
//! This is computed with integer arithmetic so it is exact
//! (e.g., 7 of 10 checks on a 10 point test is always 7 points).

use serde::Serialize;

use crate::verify::Check;

/// Computes the points earned on a test.
///
/// This is `floor(passed / attempts * points)`, clamped to `points`.
/// A test which made no verification attempts earns no points.
///
/// ```
/// use lc3_grader::score::points_earned;
///
/// assert_eq!(points_earned(5, 10, 10), 5);
/// assert_eq!(points_earned(2, 3, 10), 6);
/// assert_eq!(points_earned(0, 0, 10), 0);
/// ```
pub fn points_earned(passed: u32, attempts: u32, points: u32) -> u32 {
    if attempts == 0 { return 0 };

    let passed = passed.min(attempts);
    let earned = u64::from(passed) * u64::from(points) / u64::from(attempts);
    u32::try_from(earned).unwrap_or(points)
}

/// Computes `part / whole` as a whole percentage (rounded down).
///
/// If `whole` is 0, this is 0.
pub fn percent(part: u64, whole: u64) -> u64 {
    match whole {
        0 => 0,
        w => {
            let pct = u128::from(part) * 100 / u128::from(w);
            u64::try_from(pct).unwrap_or(u64::MAX)
        }
    }
}

/// How a test case ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TestOutcome {
    /// The test body completed and was scored.
    Scored {
        /// Points earned.
        earned: u32,
        /// Verifications which passed.
        passed: u32,
        /// Verifications attempted.
        attempts: u32
    },
    /// The machine faulted, so the test earned nothing.
    Faulted {
        /// The fault's message.
        message: String
    }
}

/// The result of one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestReport {
    /// The test's name.
    pub name: String,
    /// How many points the test is worth.
    pub points: u32,
    /// Whether the machine was randomized for this test.
    pub randomized: bool,
    /// The verifications the test body made (before any fault).
    pub checks: Vec<Check>,
    /// How the test ended.
    pub outcome: TestOutcome
}
impl TestReport {
    /// Points earned on this test.
    pub fn earned(&self) -> u32 {
        match self.outcome {
            TestOutcome::Scored { earned, .. } => earned,
            TestOutcome::Faulted { .. } => 0,
        }
    }
}

/// The result of a whole grading run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Whether every input file assembled. If not, no tests ran.
    pub assembled: bool,
    /// The seed used for machine randomization.
    pub seed: u64,
    /// Total points earned.
    pub total_earned: u64,
    /// Total points possible across the tests which ran.
    pub total_possible: u64,
    /// Each test's result, in execution order.
    pub tests: Vec<TestReport>
}
impl Report {
    /// Creates an empty report.
    pub fn new(assembled: bool, seed: u64) -> Self {
        Self { assembled, seed, total_earned: 0, total_possible: 0, tests: vec![] }
    }

    /// Adds a test's result, accumulating its points.
    pub fn record(&mut self, test: TestReport) {
        self.total_possible += u64::from(test.points);
        self.total_earned += u64::from(test.earned());
        self.tests.push(test);
    }

    /// The overall score as a whole percentage (0 if nothing was possible).
    pub fn percent(&self) -> u64 {
        percent(self.total_earned, self.total_possible)
    }

    /// Serializes this report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
