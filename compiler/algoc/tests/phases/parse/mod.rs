//! Parser phase tests on whole files.

use algo_diagnostic::ErrorCode;
use algo_ir::Keyword;
use algo_parse::ParseErrorKind;
use algoc::{parse_text, AlgoError};
use pretty_assertions::assert_eq;

use crate::common::program;

fn parse_error(source: &str) -> algo_parse::ParseError {
    match parse_text(source) {
        Err(AlgoError::Parse(err)) => err,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn headers_and_sections_are_dropped() {
    let source = program("x : entier", "x ← 1\nAfficher(x)");
    let program = parse_text(&source).unwrap();
    assert_eq!(program.name.as_deref(), Some("Test"));
    let lines: Vec<String> = program.nodes.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["(: entier x)", "(← x 1)", "(Afficher() x)", "Fin"]);
}

#[test]
fn equal_priority_resolves_left_first() {
    let program = parse_text("x ← 10 - 2 - 3\n").unwrap();
    assert_eq!(program.nodes[0].to_string(), "(← x (- 10 (- 2 3)))");
}

#[test]
fn fused_and_unicode_comparisons_parse_alike() {
    let fused = parse_text("Si x <= 5 alors\n").unwrap();
    let unicode = parse_text("Si x ≤ 5 alors\n").unwrap();
    assert_eq!(fused.nodes[0].to_string(), unicode.nodes[0].to_string());
}

#[test]
fn missing_delimiter_keywords() {
    let cases = [
        ("Si x > 1\n", Keyword::Si, Keyword::Alors),
        ("Tant que x > 1\n", Keyword::Tant, Keyword::Faire),
        ("Pour i ← 1 5 faire\n", Keyword::Pour, Keyword::A),
    ];
    for (source, construct, keyword) in cases {
        assert_eq!(
            parse_error(source).kind,
            ParseErrorKind::MissingKeyword { construct, keyword },
            "{source:?}"
        );
    }
}

#[test]
fn parse_errors_become_syntax_diagnostics() {
    let diag = AlgoError::Parse(parse_error("Si x > 1\n")).into_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert!(diag.primary_span().is_some());
}
