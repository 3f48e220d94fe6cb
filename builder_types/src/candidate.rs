use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Position of an element in the source it was discovered in.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct SourceLocation {
    pub file: PathBuf,
    #[serde(default)]
    pub line: Option<u32>,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: Option<u32>) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file.display(), line),
            None => write!(f, "{}", self.file.display()),
        }
    }
}

/// A method element carrying the builder marker, before validation.
///
/// Parameter types are kept as display strings exactly as the discovery
/// tool printed them (`String`, `java.util.List<String>`, `int[]`, ...).
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Candidate {
    /// Fully qualified name of the type declaring the method.
    pub enclosing_type: String,
    /// Simple name of the method.
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl Candidate {
    pub fn new<I, S>(enclosing_type: impl Into<String>, name: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enclosing_type: enclosing_type.into(),
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// `Type.method`, used to name the element in diagnostics.
    pub fn element_name(&self) -> String {
        format!("{}.{}", self.enclosing_type, self.name)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}({})",
            self.enclosing_type,
            self.name,
            self.parameters.join(", ")
        )
    }
}
