/* Setter classification.
   A candidate is a valid setter when it takes exactly one parameter. Name,
   return type, visibility and parameter type are deliberately not checked. */

use builder_types::{Candidate, SetterSpec, TargetClassRef};
use indexmap::IndexMap;
use tracing::warn;

pub fn is_valid_setter(candidate: &Candidate) -> bool {
    candidate.parameters.len() == 1
}

/* Stable partition of a candidate set; both halves keep input order */
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    pub valid: Vec<&'a Candidate>,
    pub invalid: Vec<&'a Candidate>,
}

pub fn classify(candidates: &[Candidate]) -> Classification<'_> {
    let (valid, invalid) = candidates.iter().partition(|c| is_valid_setter(c));
    Classification { valid, invalid }
}

impl<'a> Classification<'a> {
    /* The builder is generated for the enclosing type of the first valid setter */
    pub fn target_class(&self) -> Option<TargetClassRef> {
        self.valid
            .first()
            .map(|c| TargetClassRef::new(c.enclosing_type.clone()))
    }

    /* Splits the valid setters into those declared by `target` and the strays
       declared elsewhere */
    pub fn split_by_target(
        &self,
        target: &TargetClassRef,
    ) -> (Vec<&'a Candidate>, Vec<&'a Candidate>) {
        self.valid
            .iter()
            .copied()
            .partition(|c| c.enclosing_type == target.qualified_name)
    }
}

/* One setter per method name, in first-seen order. A later setter with an
   already seen name replaces the earlier one's parameter type in place. */
pub fn setter_specs<'a, I>(valid: I) -> Vec<SetterSpec>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut by_name: IndexMap<String, String> = IndexMap::new();
    for candidate in valid {
        let Some(param_type) = candidate.parameters.first() else {
            continue;
        };
        if let Some(previous) = by_name.insert(candidate.name.clone(), param_type.clone()) {
            warn!(
                method = %candidate.element_name(),
                replaced = %previous,
                with = %param_type,
                "duplicate setter name, keeping the last parameter type"
            );
        }
    }

    by_name
        .into_iter()
        .map(|(method_name, param_type)| SetterSpec {
            method_name,
            param_type,
        })
        .collect()
}
