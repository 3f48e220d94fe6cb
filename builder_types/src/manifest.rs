/* Serialized form of a candidate set, as written by a discovery tool.

   marker: BuilderProperty
   methods:
     - enclosing-type: com.acme.Pizza
       name: setSize
       parameters: [String]
       markers: [BuilderProperty] */

use crate::candidate::Candidate;
use serde_derive::{Deserialize, Serialize};

pub const DEFAULT_MARKER: &str = "BuilderProperty";

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestMethod {
    #[serde(flatten)]
    pub candidate: Candidate,
    /* Markers present on the method; empty means the manifest's own marker */
    #[serde(default)]
    pub markers: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct CandidateManifest {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default)]
    pub methods: Vec<ManifestMethod>,
}

impl Default for CandidateManifest {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            methods: Vec::new(),
        }
    }
}

impl CandidateManifest {
    /* Candidates annotated with `marker`, in manifest order */
    pub fn candidates_for(&self, marker: &str) -> Vec<Candidate> {
        self.methods
            .iter()
            .filter(|method| {
                if method.markers.is_empty() {
                    self.marker == marker
                } else {
                    method.markers.iter().any(|m| m == marker)
                }
            })
            .map(|method| method.candidate.clone())
            .collect()
    }
}
