/* Builder source emission.
   Generates a class that holds one instance of the target, forwards every
   setter to it and hands it out from build():

     package com.acme;

     public class PizzaBuilder {

         private Pizza object = new Pizza();

         public Pizza build() {
             return object;
         }

         public PizzaBuilder setSize(String value) {
             object.setSize(value);
             return this;
         }

     }

   The emitter trusts its input; classification happens before it runs. */

use builder_types::{GeneratedUnit, SetterSpec};
use std::fmt::{self, Write};
use tracing::debug;

pub const BUILDER_SUFFIX: &str = "Builder";

const INDENT: &str = "    ";
const FIELD_NAME: &str = "object";
const PARAM_NAME: &str = "value";

/* Names of the target class and of the builder generated for it */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderNames {
    /* Byte index of the last '.' in the target name, shared by both names */
    pub last_dot: Option<usize>,
    pub package_name: Option<String>,
    pub simple_class_name: String,
    pub builder_class_name: String,
    pub builder_simple_class_name: String,
}

impl BuilderNames {
    pub fn derive(target_class_name: &str) -> Self {
        let last_dot = target_class_name.rfind('.');

        /* A dot at index 0 does not introduce a package */
        let package_name = last_dot
            .filter(|&dot| dot > 0)
            .map(|dot| target_class_name[..dot].to_string());

        let simple_start = last_dot.map_or(0, |dot| dot + 1);
        let simple_class_name = target_class_name[simple_start..].to_string();

        /* BUILDER_SUFFIX contains no '.', so the separator found in the target
           name is also the last separator of the builder name */
        let builder_class_name = format!("{}{}", target_class_name, BUILDER_SUFFIX);
        let builder_simple_class_name = builder_class_name[simple_start..].to_string();

        Self {
            last_dot,
            package_name,
            simple_class_name,
            builder_class_name,
            builder_simple_class_name,
        }
    }
}

/* Emit the builder unit for `target_class_name` with one fluent method per setter */
pub fn emit(target_class_name: &str, setters: &[SetterSpec]) -> GeneratedUnit {
    let names = BuilderNames::derive(target_class_name);
    debug!(
        class = target_class_name,
        builder = %names.builder_class_name,
        setters = setters.len(),
        "emitting builder"
    );

    let mut source_text = String::new();
    /* fmt::Write for String never fails */
    let _ = render(&names, setters, &mut source_text);

    GeneratedUnit {
        source_text,
        package_name: names.package_name,
        simple_name: names.builder_simple_class_name,
    }
}

pub fn render(names: &BuilderNames, setters: &[SetterSpec], out: &mut impl Write) -> fmt::Result {
    if let Some(package) = &names.package_name {
        writeln!(out, "package {};\n", package)?;
    }

    writeln!(out, "public class {} {{\n", names.builder_simple_class_name)?;

    writeln!(
        out,
        "{INDENT}private {simple} {FIELD_NAME} = new {simple}();\n",
        simple = names.simple_class_name
    )?;

    writeln!(out, "{INDENT}public {} build() {{", names.simple_class_name)?;
    writeln!(out, "{INDENT}{INDENT}return {FIELD_NAME};")?;
    writeln!(out, "{INDENT}}}\n")?;

    for setter in setters {
        emit_setter(&names.builder_simple_class_name, setter, out)?;
    }

    writeln!(out, "}}")
}

fn emit_setter(
    builder_simple_class_name: &str,
    setter: &SetterSpec,
    out: &mut impl Write,
) -> fmt::Result {
    writeln!(
        out,
        "{INDENT}public {} {}({} {PARAM_NAME}) {{",
        builder_simple_class_name, setter.method_name, setter.param_type
    )?;
    writeln!(out, "{INDENT}{INDENT}{FIELD_NAME}.{}({PARAM_NAME});", setter.method_name)?;
    writeln!(out, "{INDENT}{INDENT}return this;")?;
    writeln!(out, "{INDENT}}}\n")
}
