//! Console IO for programs under test.
//!
//! A machine writes its console output to a [`Printer`] and
//! pulls console input from an [`Inputter`].
//!
//! This module provides:
//! - [`BufferedPrinter`]: A printer which records everything written to it (and can echo it to stdout).
//! - [`FileInputter`]: An inputter which never has input available.
//! - [`StringInputter`]: An inputter which replays a fixed string exactly once.
//!
//! ```
//! use lc3_grader::io::{BufferedPrinter, Inputter, Printer, StringInputter};
//!
//! let mut printer = BufferedPrinter::new(false);
//! let handle = printer.clone();
//! printer.print("Hi!");
//! printer.newline();
//! assert_eq!(handle.transcript(), "Hi!\n");
//!
//! let mut input = StringInputter::new("ok");
//! assert_eq!(input.get_char(), Some(b'o'));
//! assert_eq!(input.get_char(), Some(b'k'));
//! assert_eq!(input.get_char(), None);
//! ```

use std::io::Write;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A sink for a machine's console output.
pub trait Printer {
    /// Writes the text verbatim.
    fn print(&mut self, text: &str);

    /// Writes a single line feed.
    fn newline(&mut self);
}

/// A printer that records all output into an in-memory buffer.
///
/// Clones of a `BufferedPrinter` share the same buffer,
/// so a machine can hold one copy and write to it while the grader holds
/// another to read the transcript afterwards.
///
/// If `print_output` is enabled, every write is also mirrored to stdout.
/// Writes never fail and the buffer is unbounded.
#[derive(Debug, Clone, Default)]
pub struct BufferedPrinter {
    display_buffer: Arc<RwLock<String>>,
    print_output: bool
}
impl BufferedPrinter {
    /// Creates a new, empty printer.
    pub fn new(print_output: bool) -> Self {
        Self { display_buffer: Default::default(), print_output }
    }

    /// Whether writes to this printer are echoed to stdout.
    pub fn print_output(&self) -> bool {
        self.print_output
    }

    /// Gets a copy of everything written so far.
    pub fn transcript(&self) -> String {
        self.read_buffer().clone()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.read_buffer().len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.read_buffer().is_empty()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.write_buffer().clear();
    }

    // A panic while holding the lock cannot leave a String half-written,
    // so poisoned buffers are still usable.
    fn read_buffer(&self) -> RwLockReadGuard<'_, String> {
        self.display_buffer.read().unwrap_or_else(PoisonError::into_inner)
    }
    fn write_buffer(&self) -> RwLockWriteGuard<'_, String> {
        self.display_buffer.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn echo(&self, text: &str) {
        if self.print_output {
            let mut stdout = std::io::stdout().lock();
            // Echo is best-effort; the buffer is the source of truth.
            let _ = stdout.write_all(text.as_bytes());
            let _ = stdout.flush();
        }
    }
}
impl Printer for BufferedPrinter {
    fn print(&mut self, text: &str) {
        self.write_buffer().push_str(text);
        self.echo(text);
    }

    fn newline(&mut self) {
        self.write_buffer().push('\n');
        self.echo("\n");
    }
}

/// A source for a machine's console input.
///
/// This is `Send + Sync` so that backends can move inputters into
/// simulator devices which require it.
pub trait Inputter: Send + Sync {
    /// Takes the next available character.
    ///
    /// If no character is available, this returns `None`.
    fn get_char(&mut self) -> Option<u8>;
}
impl<I: Inputter + ?Sized> Inputter for Box<I> {
    fn get_char(&mut self) -> Option<u8> {
        (**self).get_char()
    }
}

/// An inputter that never has input available.
///
/// This models a program that is graded without any interactive stdin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileInputter;
impl Inputter for FileInputter {
    fn get_char(&mut self) -> Option<u8> {
        None
    }
}

/// An inputter that replays a fixed string.
///
/// Each byte of the source is returned exactly once, in order.
/// Once the source is exhausted, no more input is ever available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringInputter {
    source: String,
    pos: usize
}
impl StringInputter {
    /// Creates a new inputter which replays `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into(), pos: 0 }
    }

    /// The bytes which have not been read yet.
    pub fn remaining(&self) -> &[u8] {
        &self.source.as_bytes()[self.pos..]
    }
}
impl Inputter for StringInputter {
    fn get_char(&mut self) -> Option<u8> {
        let c = *self.source.as_bytes().get(self.pos)?;
        self.pos += 1;
        Some(c)
    }
}
