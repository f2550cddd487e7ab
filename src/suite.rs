//! The registry of test cases for an assignment.
//!
//! A [`TestSuite`] is an ordered list of [`TestCase`]s. It is built once by
//! [`Assignment::setup`] and then executed in registration order.
//!
//! ```
//! use lc3_grader::suite::TestSuite;
//!
//! # struct Machine;
//! let suite = TestSuite::<Machine>::new()
//!     .case("Sums an array", 10, false, |_m, v| { v.verify("sum", true); Ok(()) })
//!     .case("Sums an array (random)", 20, true, |_m, v| { v.verify("sum", true); Ok(()) });
//!
//! assert_eq!(suite.len(), 2);
//! assert_eq!(suite.total_points(), 30);
//! ```
//!
//! [`Assignment::setup`]: crate::backend::Assignment::setup

use crate::err::MachineFault;
use crate::verify::Verifier;

/// The body of a test case.
///
/// This receives the machine under test and the test's [`Verifier`].
/// Returning an error means the machine faulted and the test is abandoned.
pub type TestFn<M> = Box<dyn Fn(&mut M, &mut Verifier) -> Result<(), MachineFault>>;

/// A single named, weighted test.
pub struct TestCase<M> {
    /// The name displayed when this test runs.
    pub name: String,
    /// How many points this test is worth.
    pub points: u32,
    /// Whether the machine's state should be randomized before this test runs.
    pub randomize: bool,
    body: TestFn<M>
}
impl<M> TestCase<M> {
    /// Creates a new test case.
    pub fn new(
        name: impl Into<String>,
        points: u32,
        randomize: bool,
        body: impl Fn(&mut M, &mut Verifier) -> Result<(), MachineFault> + 'static
    ) -> Self {
        Self { name: name.into(), points, randomize, body: Box::new(body) }
    }

    /// Runs the test body against the machine.
    pub fn run(&self, machine: &mut M, verifier: &mut Verifier) -> Result<(), MachineFault> {
        (self.body)(machine, verifier)
    }
}
impl<M> std::fmt::Debug for TestCase<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("points", &self.points)
            .field("randomize", &self.randomize)
            .finish_non_exhaustive()
    }
}

/// An ordered list of test cases.
pub struct TestSuite<M> {
    cases: Vec<TestCase<M>>
}
impl<M> TestSuite<M> {
    /// Creates an empty suite.
    pub fn new() -> Self {
        Self { cases: vec![] }
    }

    /// Adds a test case to the end of this suite.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        points: u32,
        randomize: bool,
        body: impl Fn(&mut M, &mut Verifier) -> Result<(), MachineFault> + 'static
    ) -> &mut Self {
        self.cases.push(TestCase::new(name, points, randomize, body));
        self
    }

    /// Adds a test case to the end of this suite (builder form of [`TestSuite::add`]).
    pub fn case(
        mut self,
        name: impl Into<String>,
        points: u32,
        randomize: bool,
        body: impl Fn(&mut M, &mut Verifier) -> Result<(), MachineFault> + 'static
    ) -> Self {
        self.add(name, points, randomize, body);
        self
    }

    /// Iterates over the test cases in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TestCase<M>> {
        self.cases.iter()
    }

    /// The number of test cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the suite has no test cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The sum of all test cases' points.
    pub fn total_points(&self) -> u64 {
        self.cases.iter().map(|c| u64::from(c.points)).sum()
    }
}
impl<M> Default for TestSuite<M> {
    fn default() -> Self {
        Self::new()
    }
}
impl<M> std::fmt::Debug for TestSuite<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.cases).finish()
    }
}
impl<'a, M> IntoIterator for &'a TestSuite<M> {
    type Item = &'a TestCase<M>;
    type IntoIter = std::slice::Iter<'a, TestCase<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<M> Extend<TestCase<M>> for TestSuite<M> {
    fn extend<T: IntoIterator<Item = TestCase<M>>>(&mut self, iter: T) {
        self.cases.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::{TestCase, TestSuite};
    use crate::err::MachineFault;
    use crate::verify::Verifier;

    /// A stand-in machine: just a counter the test bodies can poke.
    #[derive(Default)]
    struct Counter(u32);

    #[test]
    fn test_registration_order() {
        let mut suite = TestSuite::<Counter>::new();
        suite.add("one", 1, false, |_, _| Ok(()))
            .add("two", 2, true, |_, _| Ok(()));
        suite.extend([TestCase::new("three", 3, false, |_: &mut Counter, _: &mut Verifier| Ok(()))]);

        let names: Vec<_> = suite.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["one", "two", "three"]);
        assert_eq!(suite.total_points(), 6);
        assert!(suite.iter().nth(1).is_some_and(|c| c.randomize));
    }

    #[test]
    fn test_run_body() {
        let suite = TestSuite::<Counter>::new()
            .case("bump", 5, false, |m, v| {
                m.0 += 1;
                v.verify("bumped once", m.0 == 1);
                Ok(())
            })
            .case("fault", 5, false, |_, _| Err(MachineFault::exception("illegal opcode")));

        let mut machine = Counter::default();
        let mut cases = suite.iter();

        let mut v = Verifier::new();
        let bump = cases.next().unwrap();
        assert!(bump.run(&mut machine, &mut v).is_ok());
        assert_eq!((v.passed(), v.attempts()), (1, 1));

        let mut v = Verifier::new();
        let fault = cases.next().unwrap();
        let err = fault.run(&mut machine, &mut v).unwrap_err();
        assert_eq!(err.to_string(), "illegal opcode");
        assert_eq!(v.attempts(), 0);
    }

    #[test]
    fn test_total_points_large_weights() {
        let suite = TestSuite::<Counter>::new()
            .case("huge", u32::MAX, false, |_, _| Ok(()))
            .case("tiny", 1, false, |_, _| Ok(()));

        assert_eq!(suite.total_points(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_empty() {
        let suite = TestSuite::<Counter>::default();
        assert!(suite.is_empty());
        assert_eq!(suite.total_points(), 0);
        assert_eq!(format!("{suite:?}"), "[]");
    }
}
