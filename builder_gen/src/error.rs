use thiserror::Error;

/* Everything an invocation can go wrong on. None of these escape
   `BuilderProcessor::process`; each is turned into one error diagnostic. */
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("@{marker} must be applied to a setXxx method with a single argument")]
    ShapeViolation { marker: String },

    #[error("@{marker} setter belongs to '{found}' but the builder is generated for '{expected}'")]
    MixedTargetClass {
        marker: String,
        expected: String,
        found: String,
    },

    #[error("Can not write generated source file")]
    SinkWriteFailure {
        qualified_name: String,
        #[source]
        source: std::io::Error,
    },
}
