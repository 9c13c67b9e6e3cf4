//! Tests for the [`Rule`] model.

use crate::{Rule, RuleGenerator};

#[test]
fn pattern_rule_carries_its_pattern() {
    let rule = Rule::pattern("const $A = $B");
    match rule.generator() {
        Some(RuleGenerator::Pattern(p)) => assert_eq!(p, "const $A = $B"),
        other => panic!("unexpected generator: {other:?}"),
    }
}

#[test]
fn any_rule_preserves_sub_rule_order() {
    let rule = Rule::any(vec![Rule::pattern("a"), Rule::pattern("b")]);
    match rule.generator() {
        Some(RuleGenerator::Any(subs)) => {
            let patterns: Vec<_> = subs
                .iter()
                .map(|sub| match sub.generator() {
                    Some(RuleGenerator::Pattern(p)) => p.as_str(),
                    other => panic!("unexpected generator: {other:?}"),
                })
                .collect();
            assert_eq!(patterns, vec!["a", "b"]);
        }
        other => panic!("unexpected generator: {other:?}"),
    }
}

#[test]
fn empty_rule_has_no_generator_or_predicates() {
    let rule = Rule::empty();
    assert!(rule.generator().is_none());
    assert!(rule.inside().is_none());
    assert!(rule.contains().is_none());
    assert!(rule.follows().is_none());
    assert!(rule.precedes().is_none());
    assert!(rule.not().is_none());
}

#[test]
fn predicates_accumulate_independently() {
    let rule = Rule::pattern("console.log($$$)")
        .with_inside(Rule::pattern("function $F() {$$$}"))
        .with_not(Rule::pattern("console.log(\"hello\")"));

    assert!(rule.inside().is_some());
    assert!(rule.not().is_some());
    assert!(rule.contains().is_none());
    assert!(rule.follows().is_none());
}

#[test]
fn nested_predicates_are_full_rules() {
    let rule = Rule::pattern("function $F() {$$$}").with_contains(
        Rule::pattern("var text = \"random\"").with_precedes(Rule::pattern("console.log($A)")),
    );

    let contains = rule.contains().expect("contains predicate");
    assert!(contains.precedes().is_some());
}
