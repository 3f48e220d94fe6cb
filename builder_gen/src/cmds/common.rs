/* Shared helpers for commands */

use builder_gen::manifest::load_manifest;
use builder_gen::{BuilderProcessor, ProcessorOptions};
use builder_types::Candidate;
use std::path::Path;

/* One invocation's input: the marker to process and its candidates */
pub struct Invocation {
    pub processor: BuilderProcessor,
    pub candidates: Vec<Candidate>,
}

/* Load a manifest and select the candidates for the marker to process */
pub fn load_invocation(
    file: &Path,
    marker_override: Option<&str>,
    verbose: bool,
) -> anyhow::Result<Invocation> {
    let manifest = load_manifest(file)?;
    let marker = marker_override
        .map(str::to_string)
        .unwrap_or_else(|| manifest.marker.clone());
    let candidates = manifest.candidates_for(&marker);

    if verbose {
        println!(
            "[~] {}: {} candidate(s) marked @{}",
            file.display(),
            candidates.len(),
            marker
        );
    }

    Ok(Invocation {
        processor: BuilderProcessor::new(ProcessorOptions { marker }),
        candidates,
    })
}

pub fn finish(total_errors: usize) -> anyhow::Result<()> {
    if total_errors > 0 {
        anyhow::bail!("{} error(s) reported", total_errors);
    }
    Ok(())
}
