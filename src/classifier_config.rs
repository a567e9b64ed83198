use std::fmt;
use std::sync::Arc;

use crate::diagnostic::{DiagnosticSink, LogSink};

/// Configuration for creating a [`Classifier`](crate::classifier::Classifier).
#[derive(Clone)]
pub struct ClassifierConfig {
    /// Where missing-entry diagnostics go. Shared by every compilation unit
    /// using the classifier.
    pub sink: Arc<dyn DiagnosticSink>,
    /// Emit a `trace` log record for every lookup.
    pub trace_lookups: bool,
}

impl ClassifierConfig {
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_trace_lookups(mut self, enabled: bool) -> Self {
        self.trace_lookups = enabled;
        self
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            sink: Arc::new(LogSink),
            trace_lookups: false,
        }
    }
}

impl fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("trace_lookups", &self.trace_lookups)
            .finish_non_exhaustive()
    }
}
