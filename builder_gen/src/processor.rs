/* One builder generation invocation.

   classify -> report shape violations -> pick the target class -> report
   setters of other classes -> collect setters -> emit -> file.

   Nothing escapes process(): every failure becomes an error diagnostic. An
   invocation without valid setters reports its diagnostics and generates
   nothing. */

use crate::classify::{classify, setter_specs};
use crate::diagnostics::DiagnosticSink;
use crate::emit::emit;
use crate::error::ProcessError;
use crate::filer::SourceFileSink;
use builder_types::{Candidate, Diagnostic, GeneratedUnit, SetterSpec, TargetClassRef, DEFAULT_MARKER};
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorOptions {
    /* Marker name, used in diagnostic messages */
    pub marker: String,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

/* What a builder would be generated from */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderPlan {
    pub target: TargetClassRef,
    pub setters: Vec<SetterSpec>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub plan: Option<BuilderPlan>,
    /* Qualified name of the unit handed to the filer */
    pub generated: Option<String>,
    pub errors: usize,
}

pub struct BuilderProcessor {
    options: ProcessorOptions,
}

impl Default for BuilderProcessor {
    fn default() -> Self {
        Self::new(ProcessorOptions::default())
    }
}

impl BuilderProcessor {
    pub fn new(options: ProcessorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /* Validate the candidates and work out the builder, without emitting it */
    pub fn check(
        &self,
        candidates: &[Candidate],
        diagnostics: &mut dyn DiagnosticSink,
    ) -> ProcessOutcome {
        let mut outcome = ProcessOutcome::default();
        let classification = classify(candidates);
        debug!(
            candidates = candidates.len(),
            valid = classification.valid.len(),
            invalid = classification.invalid.len(),
            "classified candidates"
        );

        for invalid in &classification.invalid {
            let err = ProcessError::ShapeViolation {
                marker: self.options.marker.clone(),
            };
            outcome.report(diagnostics, Diagnostic::error_at(err.to_string(), invalid));
        }

        let Some(target) = classification.target_class() else {
            debug!("no valid setters, nothing to generate");
            return outcome;
        };

        let (members, strays) = classification.split_by_target(&target);
        for stray in strays {
            let err = ProcessError::MixedTargetClass {
                marker: self.options.marker.clone(),
                expected: target.qualified_name.clone(),
                found: stray.enclosing_type.clone(),
            };
            outcome.report(diagnostics, Diagnostic::error_at(err.to_string(), stray));
        }

        outcome.plan = Some(BuilderPlan {
            setters: setter_specs(members),
            target,
        });
        outcome
    }

    /* Run a full invocation: check, emit and hand the unit to `filer` */
    pub fn process(
        &self,
        candidates: &[Candidate],
        diagnostics: &mut dyn DiagnosticSink,
        filer: &mut dyn SourceFileSink,
    ) -> ProcessOutcome {
        let mut outcome = self.check(candidates, diagnostics);
        let Some(plan) = &outcome.plan else {
            return outcome;
        };

        let unit = emit(&plan.target.qualified_name, &plan.setters);
        match write_unit(filer, &unit) {
            Ok(()) => outcome.generated = Some(unit.qualified_name()),
            Err(err) => {
                if let ProcessError::SinkWriteFailure {
                    qualified_name,
                    source,
                } = &err
                {
                    debug!(unit = %qualified_name, error = %source, "source file sink failed");
                }
                let mut diagnostic = Diagnostic::error(err.to_string());
                diagnostic.element = Some(unit.qualified_name());
                outcome.report(diagnostics, diagnostic);
            }
        }
        outcome
    }
}

impl ProcessOutcome {
    fn report(&mut self, diagnostics: &mut dyn DiagnosticSink, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.errors += 1;
        }
        diagnostics.report(diagnostic);
    }
}

/* Write a whole unit or nothing: the file is only committed after every byte
   went through, and dropped (discarded) on any failure */
pub fn write_unit(filer: &mut dyn SourceFileSink, unit: &GeneratedUnit) -> Result<(), ProcessError> {
    let qualified_name = unit.qualified_name();
    let sink_failure = |source: std::io::Error| ProcessError::SinkWriteFailure {
        qualified_name: qualified_name.clone(),
        source,
    };

    let mut file = filer.create_source_file(&qualified_name).map_err(sink_failure)?;
    file.write_all(unit.source_text.as_bytes()).map_err(sink_failure)?;
    file.commit().map_err(sink_failure)
}
