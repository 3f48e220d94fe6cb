/* Check command - validate candidates without generating anything */

use super::common::{finish, load_invocation};
use builder_gen::diagnostics::TracingSink;
use builder_gen::emit::BuilderNames;
use std::path::PathBuf;

pub fn run(files: Vec<PathBuf>, marker: Option<String>, verbose: bool) -> anyhow::Result<()> {
    let mut total_errors = 0;

    for file in &files {
        let invocation = load_invocation(file, marker.as_deref(), verbose)?;
        let mut diagnostics = TracingSink::new();
        let outcome = invocation
            .processor
            .check(&invocation.candidates, &mut diagnostics);
        total_errors += outcome.errors;

        match &outcome.plan {
            Some(plan) => {
                let names = BuilderNames::derive(&plan.target.qualified_name);
                println!(
                    "[✓] {}: @{} {} -> {}",
                    file.display(),
                    invocation.processor.options().marker,
                    plan.target.qualified_name,
                    names.builder_class_name
                );
                for setter in &plan.setters {
                    println!("    - {}({})", setter.method_name, setter.param_type);
                }
            }
            None => println!("[~] {}: no valid setters, nothing to generate", file.display()),
        }
    }

    finish(total_errors)
}
