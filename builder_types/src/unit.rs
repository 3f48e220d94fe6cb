/* A generated compilation unit, ready to be handed to a source file sink. */

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GeneratedUnit {
    pub package_name: Option<String>,
    pub simple_name: String,
    pub source_text: String,
}

impl GeneratedUnit {
    /* Fully qualified name of the generated type, the name it is filed under */
    pub fn qualified_name(&self) -> String {
        match &self.package_name {
            Some(package) => format!("{}.{}", package, self.simple_name),
            None => self.simple_name.clone(),
        }
    }
}
