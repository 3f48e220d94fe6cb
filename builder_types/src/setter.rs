use serde_derive::{Deserialize, Serialize};

/// One fluent method of the generated builder: the setter's name and the
/// type of its single parameter.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct SetterSpec {
    pub method_name: String,
    pub param_type: String,
}

impl SetterSpec {
    pub fn new(method_name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            param_type: param_type.into(),
        }
    }
}

/// The class a builder is generated for.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct TargetClassRef {
    pub qualified_name: String,
}

impl TargetClassRef {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }
}
