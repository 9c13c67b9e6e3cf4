use rstest::rstest;

use super::*;

use kagura_core::RuleGenerator;

#[test]
fn parses_a_pattern_rule() {
    let rule = parse_rule("pattern: console.log($X)").expect("rule");

    assert_eq!(
        rule.generator(),
        Some(&RuleGenerator::Pattern("console.log($X)".to_owned()))
    );
    assert!(rule.inside().is_none());
}

#[test]
fn parses_nested_predicates() {
    let yaml = concat!(
        "pattern: console.log(\"random\")\n",
        "inside:\n",
        "  pattern: \"function $X() {$$$}\"\n",
        "not:\n",
        "  pattern: console.log(\"hello\")\n",
    );

    let rule = parse_rule(yaml).expect("rule");
    assert!(rule.inside().is_some());
    assert!(rule.not().is_some());
    assert!(rule.contains().is_none());
}

#[test]
fn parses_an_any_union() {
    let yaml = concat!(
        "any:\n",
        "  - pattern: var $A = $B\n",
        "  - pattern: const $A = $B\n",
    );

    let rule = parse_rule(yaml).expect("rule");
    match rule.generator() {
        Some(RuleGenerator::Any(sub_rules)) => assert_eq!(sub_rules.len(), 2),
        other => panic!("expected any generator, got {other:?}"),
    }
}

#[test]
fn parses_a_rule_without_a_generator() {
    let rule = parse_rule("inside:\n  pattern: function go() {$$$}").expect("rule");

    assert!(rule.generator().is_none());
    assert!(rule.inside().is_some());
}

#[test]
fn rejects_conflicting_generators() {
    let yaml = concat!(
        "pattern: console.log($X)\n",
        "any:\n",
        "  - pattern: var $A = $B\n",
    );

    let err = parse_rule(yaml).expect_err("conflict");
    assert!(matches!(err, RuleParseError::ConflictingGenerators));
}

#[test]
fn rejects_conflicting_generators_in_a_nested_rule() {
    let yaml = concat!(
        "pattern: console.log($X)\n",
        "inside:\n",
        "  pattern: function go() {$$$}\n",
        "  any:\n",
        "    - pattern: var $A = $B\n",
    );

    let err = parse_rule(yaml).expect_err("conflict");
    assert!(matches!(err, RuleParseError::ConflictingGenerators));
}

#[rstest]
#[case::unknown_field("pattern: a\nhas:\n  pattern: b")]
#[case::non_mapping_document("- just\n- a\n- list")]
#[case::scalar_document("console.log($X)")]
fn rejects_documents_without_the_rule_shape(#[case] yaml: &str) {
    let err = parse_rule(yaml).expect_err("shape");
    assert!(matches!(err, RuleParseError::Yaml(_)));
    assert!(err.to_string().starts_with("failed to parse YAML rule"));
}

#[test]
fn parses_a_batch_in_document_order() {
    let yaml = concat!(
        "rules:\n",
        "  - id: first\n",
        "    rule:\n",
        "      pattern: console.log($X)\n",
        "  - id: second\n",
        "    rule:\n",
        "      pattern: var $A = $B\n",
    );

    let entries = parse_rule_set(yaml).expect("entries");
    let ids: Vec<_> = entries.iter().map(RuleEntry::id).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn skips_malformed_batch_entries() {
    let yaml = concat!(
        "rules:\n",
        "  - id: keep\n",
        "    rule:\n",
        "      pattern: console.log($X)\n",
        "  - id: no-body\n",
        "  - rule:\n",
        "      pattern: no identifier\n",
        "  - id: bad-field\n",
        "    rule:\n",
        "      has:\n",
        "        pattern: unsupported\n",
    );

    let entries = parse_rule_set(yaml).expect("entries");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.first().expect("entry").id(), "keep");
}

#[test]
fn rejects_a_batch_without_a_rules_list() {
    let err = parse_rule_set("patterns: []").expect_err("shape");
    assert!(matches!(err, RuleParseError::Yaml(_)));
}
