//! Error types for grading.
//!
//! - [`AsmError`]: An input file could not be assembled or converted. Recorded per file.
//! - [`LoadError`]: An assembled image could not be loaded into a machine. Fatal.
//! - [`MachineFault`]: A machine faulted while a test body was running. Recovered per test.
//! - [`GradeError`]: Anything which aborts a grading run.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error from a backend.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An input file could not be turned into a machine image.
#[derive(Debug, Error)]
pub enum AsmError {
    /// The file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error
    },

    /// The assembler rejected the file.
    #[error("{}: {message}", path.display())]
    Rejected {
        /// The file being assembled.
        path: PathBuf,
        /// The assembler's diagnostic.
        message: String
    }
}
impl AsmError {
    /// Creates an error for a file the assembler rejected.
    pub fn rejected(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        AsmError::Rejected { path: path.into(), message: message.to_string() }
    }

    /// The file that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            AsmError::Io { path, .. }       => path,
            AsmError::Rejected { path, .. } => path,
        }
    }
}

/// An image could not be loaded into a machine.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct LoadError {
    reason: String,
    #[source]
    source: Option<BackendError>
}
impl LoadError {
    /// Creates a load error with a reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into(), source: None }
    }

    /// Creates a load error caused by a backend error.
    pub fn from_backend(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self { reason: e.to_string(), source: Some(Box::new(e)) }
    }
}

/// A machine faulted during execution.
///
/// This is what test bodies return when the program under test
/// does something the machine cannot continue from
/// (illegal instruction, access violation, etc.).
#[derive(Debug, Error)]
pub enum MachineFault {
    /// A fault described by a message.
    #[error("{0}")]
    Exception(String),

    /// A fault raised by the backend's own error type.
    #[error(transparent)]
    Backend(BackendError)
}
impl MachineFault {
    /// Creates a fault from a message.
    pub fn exception(message: impl Into<String>) -> Self {
        MachineFault::Exception(message.into())
    }

    /// Wraps a backend error as a fault.
    pub fn backend(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        MachineFault::Backend(Box::new(e))
    }
}

/// An error which aborts a grading run.
#[derive(Debug, Error)]
pub enum GradeError {
    /// An image could not be loaded into a fresh machine.
    #[error("could not init simulator: failed to load {image}")]
    Load {
        /// The input file the image was assembled from.
        image: String,
        /// Why the load failed.
        #[source]
        source: LoadError
    },

    /// Progress output could not be written.
    #[error("could not write grading output: {0}")]
    Io(#[from] std::io::Error)
}
impl GradeError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GradeError::Load { .. } => 2,
            GradeError::Io(_)       => 1,
        }
    }
}
