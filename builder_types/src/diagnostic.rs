use crate::candidate::{Candidate, SourceLocation};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    Error,
    Warning,
    Note,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticKind::Error => "error",
            DiagnosticKind::Warning => "warning",
            DiagnosticKind::Note => "note",
        };
        f.write_str(label)
    }
}

/// A message for the user, optionally attached to the element it is about.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    #[serde(default)]
    pub location: Option<SourceLocation>,
    /// `Type.method` of the element, when the diagnostic is about one.
    #[serde(default)]
    pub element: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            message: message.into(),
            location: None,
            element: None,
        }
    }

    pub fn error_at(message: impl Into<String>, candidate: &Candidate) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            message: message.into(),
            location: candidate.location.clone(),
            element: Some(candidate.element_name()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == DiagnosticKind::Error
    }
}

/* Renders like a compiler message: `file:line: error: message (Type.method)` */
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{}: ", location)?;
        }
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(element) = &self.element {
            write!(f, " ({})", element)?;
        }
        Ok(())
    }
}
