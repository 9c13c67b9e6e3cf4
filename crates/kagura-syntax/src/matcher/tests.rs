use super::*;

use crate::language::SupportedLanguage;
use crate::parser::Parser;

fn parse(source: &str) -> ParseResult {
    let mut parser = Parser::new(SupportedLanguage::JavaScript).expect("parser");
    parser.parse(source).expect("parse")
}

fn compile(pattern: &str) -> Pattern {
    Pattern::compile(pattern, SupportedLanguage::JavaScript).expect("pattern")
}

#[test]
fn literal_pattern_matches_one_declaration() {
    let source = parse("const x = 5;\nconst y = 10;");
    let pattern = compile("const x = 5");

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);
    assert!(matches.first().expect("match").text().starts_with("const x = 5"));
}

#[test]
fn bare_identifier_pattern_matches_by_text() {
    let source = parse("const x = 5;\nconst y = 10;");
    let pattern = compile("y");

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches.first().expect("match").text(), "y");
}

#[test]
fn identifier_pattern_matches_property_name() {
    // Property-name leaves normalise to plain identifiers, so a bare
    // identifier pattern can land on a property position.
    let source = parse("obj.y = 1;");
    let pattern = compile("y");

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);
}

#[test]
fn placeholder_captures_each_occurrence() {
    let source = parse("const x = 5;\nconsole.log(x);\nconst y = 5;");
    let pattern = compile("const $A = 5");

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 2);

    let captured: Vec<_> = matches
        .iter()
        .map(|m| m.bindings().get("$A").expect("$A bound").to_owned())
        .collect();
    assert_eq!(captured, vec!["x", "y"]);
}

#[test]
fn repeated_placeholder_requires_identical_text() {
    let source = parse("const x = x + 5;");
    let pattern = compile("const $A = $A + $B");

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);

    let bindings = matches.first().expect("match").bindings();
    assert_eq!(bindings.get("$A"), Some("x"));
    assert_eq!(bindings.get("$B"), Some("5"));
}

#[test]
fn repeated_placeholder_rejects_diverging_text() {
    let source = parse("const x = y + 5;");
    let pattern = compile("const $A = $A + $B");

    assert!(pattern.find_all(&source).is_empty());
}

#[test]
fn matching_ignores_whitespace_differences() {
    let source = parse("const x=  5;");
    let pattern = compile("const $A = $B");

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches.first().expect("match").bindings().get("$A"), Some("x"));
}

#[test]
fn matching_ignores_separator_presence() {
    // Trailing semicolons are skipped on both sides, so the pattern may
    // omit what the source has and vice versa.
    let source = parse("const x = 5;");
    let pattern = compile("const x=5");

    assert_eq!(pattern.find_all(&source).len(), 1);
}

#[test]
fn placeholder_captures_complex_argument() {
    let source = parse("console.log( go(x+5) );");
    let pattern = compile("console.log($X)");

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches.first().expect("match").bindings().get("$X"), Some("go(x+5)"));
}

const WILDCARD_PATTERN: &str = "function go() {\n    $$$\n    console.log($X);\n}";

#[test]
fn wildcard_matches_zero_preceding_statements() {
    let source = parse("function go() {\n    console.log(\"random\");\n}");
    let pattern = compile(WILDCARD_PATTERN);

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches.first().expect("match").bindings().get("$X"),
        Some("\"random\"")
    );
}

#[test]
fn wildcard_matches_one_preceding_statement() {
    let source = parse("function go() {\n    var a = 5;\n    console.log(\"random\");\n}");
    let pattern = compile(WILDCARD_PATTERN);

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches.first().expect("match").bindings().get("$X"),
        Some("\"random\"")
    );
}

#[test]
fn wildcard_matches_many_preceding_statements() {
    let source = parse(concat!(
        "function go() {\n",
        "    var a = 5;\n",
        "    var c = 10;\n",
        "    if (c == 2) {\n",
        "        c = c + 1;\n",
        "    }\n",
        "    console.log(\"random\");\n",
        "}"
    ));
    let pattern = compile(WILDCARD_PATTERN);

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);
}

#[test]
fn wildcard_requires_the_anchor_to_appear() {
    let source = parse("function go() {\n    var a = 5;\n}");
    let pattern = compile(WILDCARD_PATTERN);

    assert!(pattern.find_all(&source).is_empty());
}

#[test]
fn member_chain_binds_each_segment() {
    let source = parse("const result = req.body.input;");
    let pattern = compile("$X.$Y.$Z");

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);

    let bindings = matches.first().expect("match").bindings();
    assert_eq!(bindings.get("$X"), Some("req"));
    assert_eq!(bindings.get("$Y"), Some("body"));
    assert_eq!(bindings.get("$Z"), Some("input"));
}

#[test]
fn member_chain_literal_matches_inside_expression() {
    let source = parse("con.query(\"SELECT * FROM person WHERE id = '\" +\nreq.body.input + \"'\");");
    let pattern = compile("req.body.input");

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches.first().expect("match").text(), "req.body.input");
}

#[test]
fn member_pattern_rejects_shorter_chain() {
    let source = parse("const result = req.body;");
    let pattern = compile("$X.$Y.$Z");

    assert!(pattern.find_all(&source).is_empty());
}

#[test]
fn empty_pattern_yields_no_matches() {
    let source = parse("const x = 5;");
    let pattern = compile("");

    assert!(pattern.find_all(&source).is_empty());
}

#[test]
fn find_first_returns_earliest_candidate() {
    let source = parse("console.log(a);\nconsole.log(b);");
    let pattern = compile("console.log($X)");

    let m = pattern.find_first(&source).expect("match");
    assert_eq!(m.bindings().get("$X"), Some("a"));
}

#[test]
fn match_span_is_one_based() {
    let source = parse("const x = 5;\nconsole.log(x);");
    let pattern = compile("console.log($X)");

    let m = pattern.find_first(&source).expect("match");
    let span = m.span();
    assert_eq!(span.start().line(), 2);
    assert_eq!(span.end().line(), 2);
    assert_eq!(span.start_byte(), 13);
}

#[test]
fn nested_wildcards_match_interleaved_statements() {
    let source = parse(concat!(
        "function go(x) {\n",
        "    var a = 5;\n",
        "    if (x > a) {\n",
        "        x = x + 10;\n",
        "        console.log(\"yes\");\n",
        "    }\n",
        "    return x;\n",
        "}"
    ));
    let pattern = compile(concat!(
        "function go(x) {\n",
        "    $$$\n",
        "    if (x > a) {\n",
        "        $$$\n",
        "        x = x + 10;\n",
        "        $$$\n",
        "    }\n",
        "    return x;\n",
        "}"
    ));

    assert_eq!(pattern.find_all(&source).len(), 1);
}

#[test]
fn failed_wildcard_anchor_attempt_leaks_no_bindings() {
    // The first console.log call cannot satisfy the anchor's repeated
    // placeholder; the scan moves on and the surviving match must only
    // carry bindings from the successful attempt.
    let source = parse("function go() {\n    console.log(a, b);\n    console.log(c, c);\n}");
    let pattern = compile("function go() {\n    $$$\n    console.log($V, $V);\n}");

    let matches = pattern.find_all(&source);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches.first().expect("match").bindings().get("$V"), Some("c"));
}
