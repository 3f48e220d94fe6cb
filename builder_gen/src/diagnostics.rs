/* Diagnostic sinks: where an invocation's errors end up */

use builder_types::{Diagnostic, DiagnosticKind};

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/* Keeps every diagnostic, in report order */
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/* Logs diagnostics through tracing as they arrive */
#[derive(Debug, Default)]
pub struct TracingSink {
    errors: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.kind {
            DiagnosticKind::Error => {
                self.errors += 1;
                tracing::error!("{}", diagnostic);
            }
            DiagnosticKind::Warning => tracing::warn!("{}", diagnostic),
            DiagnosticKind::Note => tracing::info!("{}", diagnostic),
        }
    }
}
