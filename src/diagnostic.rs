use std::fmt;

use parking_lot::Mutex;
use thiserror::Error;

/// Classification failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The opcode has no table entry: the table was not updated when the
    /// opcode was introduced.
    #[error("{target}: proginfo missing prog {opcode}")]
    MissingClassification { target: &'static str, opcode: String },
}

impl ClassifyError {
    pub fn opcode(&self) -> &str {
        match self {
            ClassifyError::MissingClassification { opcode, .. } => opcode,
        }
    }
}

/// A report handed to a [`DiagnosticSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Program counter of the offending instruction, if known.
    pub pc: Option<u64>,
    pub error: ClassifyError,
}

impl Diagnostic {
    pub fn new(error: ClassifyError) -> Self {
        Self { pc: None, error }
    }

    pub fn at(pc: u64, error: ClassifyError) -> Self {
        Self { pc: Some(pc), error }
    }

    pub fn opcode(&self) -> &str {
        self.error.opcode()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pc {
            Some(pc) => write!(f, "{:#x}: {}", pc, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Receives diagnostics from the enclosing compilation context.
///
/// May be called concurrently from every compilation unit in flight; a
/// report must never abort sibling units.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        log::error!("{}", diagnostic);
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Copy of everything reported so far.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.reports.lock().clone()
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.reports.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.reports.lock().push(diagnostic.clone());
    }
}
