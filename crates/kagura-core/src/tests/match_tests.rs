//! Tests for the [`Match`] output record.

use std::collections::BTreeMap;

use crate::{LineCol, Match, Span};

fn sample_span() -> Span {
    Span::new(12, 42, LineCol::new(2, 1), LineCol::new(4, 3))
}

#[test]
fn match_without_rule_id() {
    let m = Match::new(
        None,
        String::from("const x = 5"),
        sample_span(),
        BTreeMap::new(),
    );
    assert!(m.rule_id().is_none());
    assert_eq!(m.text(), "const x = 5");
    assert_eq!(m.start_line(), 2);
    assert_eq!(m.end_line(), 4);
}

#[test]
fn match_with_rule_id_and_bindings() {
    let mut bindings = BTreeMap::new();
    bindings.insert(String::from("$X"), String::from("req"));

    let m = Match::new(
        Some(String::from("no-console")),
        String::from("console.log(req)"),
        sample_span(),
        bindings,
    );
    assert_eq!(m.rule_id(), Some("no-console"));
    assert_eq!(m.bindings().get("$X").map(String::as_str), Some("req"));
}

#[test]
fn match_serde_round_trip() {
    let m = Match::new(
        Some(String::from("rule-1")),
        String::from("console.log(x)"),
        sample_span(),
        BTreeMap::new(),
    );
    let json = serde_json::to_string(&m).expect("serialize");
    let back: Match = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, m);
}
