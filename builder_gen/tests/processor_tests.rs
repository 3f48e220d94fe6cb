/* Builder Processor Tests
 *
 * End-to-end invocations through the public API: classification, diagnostics
 * and the generated source text.
 */

use builder_gen::diagnostics::CollectingSink;
use builder_gen::emit::emit;
use builder_gen::filer::MemoryFiler;
use builder_gen::{classify, BuilderProcessor, ProcessOutcome};
use builder_types::{Candidate, SetterSpec, SourceLocation};

const INVALID_MESSAGE: &str = "@BuilderProperty must be applied to a setXxx method with a single argument";

/* Helper to build a candidate declared by `class` */
fn setter(class: &str, name: &str, params: &[&str]) -> Candidate {
    Candidate::new(class, name, params.iter().copied())
}

/* Helper to run one invocation against an in-memory filer */
fn run(candidates: &[Candidate]) -> (ProcessOutcome, CollectingSink, MemoryFiler) {
    let processor = BuilderProcessor::default();
    let mut diagnostics = CollectingSink::new();
    let mut filer = MemoryFiler::new();
    let outcome = processor.process(candidates, &mut diagnostics, &mut filer);
    (outcome, diagnostics, filer)
}

#[test]
fn test_pizza_builder_with_package() {
    let candidates = vec![
        setter("com.acme.Pizza", "setSize", &["String"]),
        setter("com.acme.Pizza", "setCheese", &["boolean"]),
    ];
    let (outcome, diagnostics, filer) = run(&candidates);

    assert_eq!(outcome.errors, 0);
    assert!(diagnostics.diagnostics.is_empty());
    assert_eq!(outcome.generated.as_deref(), Some("com.acme.PizzaBuilder"));

    let expected = "\
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

    public PizzaBuilder setCheese(boolean value) {
        object.setCheese(value);
        return this;
    }

}
";
    assert_eq!(filer.get("com.acme.PizzaBuilder"), Some(expected));
}

#[test]
fn test_pizza_builder_default_package() {
    let (outcome, _, filer) = run(&[setter("Pizza", "setSize", &["String"])]);

    assert_eq!(outcome.generated.as_deref(), Some("PizzaBuilder"));
    let source = filer.get("PizzaBuilder").unwrap();
    assert!(!source.contains("package"));
    assert!(source.starts_with("public class PizzaBuilder {\n"));
    assert!(source.contains("    private Pizza object = new Pizza();\n"));
    assert!(source.contains("    public PizzaBuilder setSize(String value) {\n"));
}

#[test]
fn test_two_parameter_method_is_rejected() {
    let location = SourceLocation::new("src/com/acme/Pizza.java", Some(14));
    let candidates = vec![
        setter("com.acme.Pizza", "setSize", &["String"]),
        setter("com.acme.Pizza", "setDimensions", &["int", "int"]).with_location(location.clone()),
    ];
    let (outcome, diagnostics, filer) = run(&candidates);

    assert_eq!(outcome.errors, 1);
    assert_eq!(diagnostics.diagnostics.len(), 1);
    let diagnostic = &diagnostics.diagnostics[0];
    assert!(diagnostic.is_error());
    assert_eq!(diagnostic.message, INVALID_MESSAGE);
    assert_eq!(diagnostic.location, Some(location));
    assert_eq!(diagnostic.element.as_deref(), Some("com.acme.Pizza.setDimensions"));

    /* Generation still happens for the valid setter */
    let source = filer.get("com.acme.PizzaBuilder").unwrap();
    assert!(source.contains("setSize(String value)"));
    assert!(!source.contains("setDimensions"));
}

#[test]
fn test_zero_parameter_method_is_rejected() {
    let (outcome, diagnostics, _) = run(&[
        setter("com.acme.Pizza", "reset", &[]),
        setter("com.acme.Pizza", "setSize", &["String"]),
    ]);
    assert_eq!(outcome.errors, 1);
    assert_eq!(diagnostics.diagnostics[0].element.as_deref(), Some("com.acme.Pizza.reset"));
    assert!(outcome.generated.is_some());
}

#[test]
fn test_empty_candidate_set_generates_nothing() {
    let (outcome, diagnostics, filer) = run(&[]);

    assert_eq!(outcome, ProcessOutcome::default());
    assert!(diagnostics.diagnostics.is_empty());
    assert!(filer.units.is_empty());
}

#[test]
fn test_all_invalid_generates_nothing() {
    let candidates = vec![
        setter("com.acme.Pizza", "reset", &[]),
        setter("com.acme.Pizza", "setBoth", &["int", "String"]),
    ];
    let (outcome, diagnostics, filer) = run(&candidates);

    assert_eq!(outcome.errors, 2);
    assert_eq!(diagnostics.error_count(), 2);
    assert_eq!(outcome.plan, None);
    assert_eq!(outcome.generated, None);
    assert!(filer.units.is_empty());
}

#[test]
fn test_setters_of_another_class_are_flagged_and_left_out() {
    let candidates = vec![
        setter("com.acme.Pizza", "setSize", &["String"]),
        setter("com.acme.Pasta", "setShape", &["String"]),
        setter("com.acme.Pizza", "setCheese", &["boolean"]),
    ];
    let (outcome, diagnostics, filer) = run(&candidates);

    assert_eq!(outcome.errors, 1);
    assert_eq!(
        diagnostics.diagnostics[0].message,
        "@BuilderProperty setter belongs to 'com.acme.Pasta' but the builder is generated for 'com.acme.Pizza'"
    );
    assert_eq!(diagnostics.diagnostics[0].element.as_deref(), Some("com.acme.Pasta.setShape"));

    assert_eq!(outcome.generated.as_deref(), Some("com.acme.PizzaBuilder"));
    let source = filer.get("com.acme.PizzaBuilder").unwrap();
    assert!(!source.contains("setShape"));
    assert!(filer.get("com.acme.PastaBuilder").is_none());
}

#[test]
fn test_every_setter_gets_exactly_one_method() {
    let setters = vec![
        SetterSpec::new("setSize", "String"),
        SetterSpec::new("setCheese", "boolean"),
        SetterSpec::new("setToppings", "java.util.List<String>"),
    ];
    let unit = emit("com.acme.Pizza", &setters);

    for spec in &setters {
        let signature = format!(
            "    public PizzaBuilder {}({} value) {{\n        object.{}(value);\n        return this;\n    }}\n",
            spec.method_name, spec.param_type, spec.method_name
        );
        assert_eq!(unit.source_text.matches(&signature).count(), 1, "{}", spec.method_name);
    }
}

#[test]
fn test_emission_follows_candidate_order() {
    let candidates = vec![
        setter("Pizza", "setZ", &["int"]),
        setter("Pizza", "setA", &["int"]),
        setter("Pizza", "setM", &["int"]),
    ];
    let (_, _, filer) = run(&candidates);
    let source = filer.get("PizzaBuilder").unwrap();

    let z = source.find("setZ(").unwrap();
    let a = source.find("setA(").unwrap();
    let m = source.find("setM(").unwrap();
    assert!(z < a && a < m);
}

#[test]
fn test_emission_is_deterministic() {
    let setters = vec![
        SetterSpec::new("setSize", "String"),
        SetterSpec::new("setCheese", "boolean"),
    ];
    let first = emit("com.acme.Pizza", &setters);
    let second = emit("com.acme.Pizza", &setters);
    assert_eq!(first.source_text, second.source_text);
}

#[test]
fn test_package_declaration_matches_prefix() {
    for name in ["a.B", "com.acme.Pizza", "org.example.deep.nested.Type"] {
        let unit = emit(name, &[]);
        let package = &name[..name.rfind('.').unwrap()];
        assert_eq!(unit.package_name.as_deref(), Some(package));
        let first_line = unit.source_text.lines().next().unwrap();
        assert_eq!(first_line, format!("package {};", package));
    }
}

#[test]
fn test_generated_source_braces_balance() {
    let unit = emit(
        "com.acme.Pizza",
        &[
            SetterSpec::new("setSize", "String"),
            SetterSpec::new("setCheese", "boolean"),
        ],
    );
    let opens = unit.source_text.matches('{').count();
    let closes = unit.source_text.matches('}').count();
    assert_eq!(opens, closes);
    assert!(unit.source_text.ends_with("}\n"));
}

#[test]
fn test_classification_partitions_input() {
    let candidates = vec![
        setter("Pizza", "a", &[]),
        setter("Pizza", "b", &["int"]),
        setter("Pizza", "c", &["int", "int"]),
        setter("Pizza", "d", &["int"]),
        setter("Pizza", "e", &["int", "int", "int"]),
    ];
    let result = classify(&candidates);

    assert_eq!(result.valid.len() + result.invalid.len(), candidates.len());
    for candidate in &candidates {
        let in_valid = result.valid.iter().any(|c| std::ptr::eq(*c, candidate));
        let in_invalid = result.invalid.iter().any(|c| std::ptr::eq(*c, candidate));
        assert!(in_valid != in_invalid);
        assert_eq!(in_valid, candidate.parameters.len() == 1);
    }
}

#[test]
fn test_duplicate_setter_name_last_type_wins() {
    let candidates = vec![
        setter("Pizza", "setSize", &["int"]),
        setter("Pizza", "setCheese", &["boolean"]),
        setter("Pizza", "setSize", &["String"]),
    ];
    let (outcome, _, filer) = run(&candidates);

    assert_eq!(outcome.errors, 0);
    let source = filer.get("PizzaBuilder").unwrap();
    assert_eq!(source.matches("setSize(").count(), 2); /* declaration and forwarded call */
    assert!(source.contains("setSize(String value)"));
    assert!(source.find("setSize(").unwrap() < source.find("setCheese(").unwrap());
}
