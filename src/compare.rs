//! Comparing captured program output against expected output.

/// The banner the LC-3 OS prints when the machine halts.
///
/// Every transcript of a program which halts normally ends with this.
pub const HALT_BANNER: &str = "\n\n--- Halting the LC-3 ---\n\n";

/// Checks whether a transcript is exactly the expected output followed by the [`HALT_BANNER`].
///
/// This is a byte-for-byte comparison. No normalization is done,
/// so whitespace, case, and trailing newlines are all significant.
///
/// ```
/// use lc3_grader::compare::output_compare;
///
/// let transcript = "Hello!\n\n--- Halting the LC-3 ---\n\n";
/// assert!(output_compare(transcript, "Hello!"));
/// assert!(!output_compare(transcript, "hello!"));
/// assert!(!output_compare(transcript, "Hello!\n"));
/// ```
pub fn output_compare(transcript: &str, expected: &str) -> bool {
    let check = [expected, HALT_BANNER].concat();

    transcript.len() == check.len()
        && transcript.bytes().zip(check.bytes()).all(|(t, c)| t == c)
}
