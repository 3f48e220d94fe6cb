/* Loading candidate manifests written by a discovery tool */

use anyhow::Context;
use builder_types::CandidateManifest;
use std::fs;
use std::path::Path;

/* Reads a manifest; `.json` files are parsed as JSON, everything else as YAML */
pub fn load_manifest(path: &Path) -> anyhow::Result<CandidateManifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    parse_manifest(&content, path)
}

fn parse_manifest(content: &str, path: &Path) -> anyhow::Result<CandidateManifest> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let manifest = if is_json {
        serde_json::from_str(content)
            .with_context(|| format!("Failed to parse JSON manifest {}", path.display()))?
    } else {
        serde_yml::from_str(content)
            .with_context(|| format!("Failed to parse YAML manifest {}", path.display()))?
    };
    Ok(manifest)
}
