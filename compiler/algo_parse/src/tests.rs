use super::*;
use algo_ir::{Keyword, Priority, Span, TokenKind};
use algo_lexer::{lex_line, lex_source, LexerState};
use pretty_assertions::assert_eq;

fn tokens(line: &str) -> Vec<Token> {
    let mut tokens = lex_line(line, 0, &mut LexerState::new()).unwrap();
    assert_eq!(tokens.pop().map(|t| t.kind()), Some(TokenKind::EndOfLine));
    tokens
}

fn parse(line: &str) -> Option<Node> {
    parse_line(&tokens(line), &mut ParseCx::new()).unwrap()
}

fn tree(line: &str) -> String {
    parse(line).map(|n| n.to_string()).unwrap()
}

fn parse_err(line: &str) -> ParseError {
    parse_line(&tokens(line), &mut ParseCx::new()).unwrap_err()
}

// === Head selection ===

#[test]
fn priority_ladder() {
    let toks = tokens("x ← 1 + 2 * 3 < 4 ET y");
    let priorities: Vec<_> = toks.iter().map(priority_of).collect();
    assert_eq!(
        priorities,
        vec![
            Some(Priority::Lowest),
            Some(Priority::Statement),
            Some(Priority::Lowest),
            Some(Priority::Additive),
            Some(Priority::Lowest),
            Some(Priority::Multiplicative),
            Some(Priority::Lowest),
            Some(Priority::Connective),
            Some(Priority::Lowest),
            Some(Priority::Connective),
            Some(Priority::Lowest),
        ]
    );
}

#[test]
fn highest_priority_is_head() {
    assert_eq!(tree("x ← 1 + 2"), "(← x (+ 1 2))");
    assert_eq!(tree("a < b + 1"), "(< a (+ b 1))");
}

#[test]
fn ties_keep_leftmost() {
    // 10 - (2 - 3)
    assert_eq!(tree("10 - 2 - 3"), "(- 10 (- 2 3))");
    assert_eq!(tree("a ET b OU c"), "(ET a (OU b c))");
}

#[test]
fn coarse_levels_are_not_a_precedence_table() {
    // the multiplicative operator outranks `+`, so it becomes the root
    assert_eq!(tree("a + b * c"), "(* (+ a b) c)");
    assert_eq!(tree("a * b + c"), "(* a (+ b c))");
}

#[test]
fn groups_stand_for_their_contents() {
    assert_eq!(tree("(a + b) * c"), "(* (+ a b) c)");
    assert_eq!(tree("((1))"), "1");
    assert_eq!(tree("Si (x < 5) OU (x = 5) alors"), "(Si (OU (< x 5) (= x 5)))");
}

#[test]
fn unary_minus() {
    assert_eq!(tree("x ← -3"), "(← x (- 3))");
    assert_eq!(tree("x ← 2 * -y"), "(← x (* 2 (- y)))");
    // the leading `-` is the leftmost head and negates everything after it
    assert_eq!(tree("x ← -3 - 2"), "(← x (- (- 3 2)))");
    assert_eq!(tree("x ← (-3) - 2"), "(← x (- (- 3) 2))");
}

// === Leaves ===

#[test]
fn calls_split_arguments() {
    assert_eq!(
        tree("Afficher(\"x =\", x + 1, t[i])"),
        "(Afficher() \"x =\" (+ x 1) (t[] i))"
    );
    assert_eq!(tree("Afficher()"), "(Afficher())");
}

#[test]
fn indices_become_children() {
    assert_eq!(tree("m[i + 1][j] ← vrai"), "(← (m[] (+ i 1) j) vrai)");
}

#[test]
fn fused_comparison_is_one_head() {
    assert_eq!(tree("Si x <= 5 alors"), "(Si (<= x 5))");
}

// === Statements ===

#[test]
fn declarations() {
    assert_eq!(tree("a, b : entier"), "(: entier a b)");
    assert_eq!(tree("s : chaîne de caractères"), "(: chaîne s)");
    assert_eq!(tree("t[3], m[2][n] : tableau de réel"), "(: (tableau réel) (t[] 3) (m[] 2 n))");
}

#[test]
fn block_headers_keep_only_the_header() {
    assert_eq!(tree("Si a ET b alors"), "(Si (ET a b))");
    assert_eq!(tree("Tant que i < 10 faire"), "(Tant (< i 10))");
    assert_eq!(tree("Pour i ← 1 à n - 1 faire"), "(Pour i (← i 1) (- n 1))");
    assert_eq!(tree("Sinon"), "Sinon");
}

#[test]
fn block_ends() {
    assert_eq!(tree("Fin si"), "(Fin Si)");
    assert_eq!(tree("Fin tant"), "(Fin Tant)");
    assert_eq!(tree("Fin tant que"), "(Fin Tant)");
    assert_eq!(tree("Fin pour"), "(Fin Pour)");
    assert_eq!(tree("Fin"), "Fin");
}

#[test]
fn markers_yield_no_node() {
    assert_eq!(parse("Variables"), None);
    assert_eq!(parse("Début"), None);
    assert_eq!(parse(""), None);
}

#[test]
fn program_header_records_name() {
    let mut cx = ParseCx::new();
    assert_eq!(parse_line(&tokens("Algorithme Somme"), &mut cx).unwrap(), None);
    assert_eq!(cx.program_name(), Some("Somme"));
}

// === Errors ===

#[test]
fn missing_delimiters() {
    assert_eq!(
        parse_err("Si x < 5").kind,
        ParseErrorKind::MissingKeyword {
            construct: Keyword::Si,
            keyword: Keyword::Alors,
        }
    );
    assert_eq!(
        parse_err("Tant x < 5 faire").kind,
        ParseErrorKind::MissingKeyword {
            construct: Keyword::Tant,
            keyword: Keyword::Que,
        }
    );
    assert_eq!(
        parse_err("Tant que x < 5").kind,
        ParseErrorKind::MissingKeyword {
            construct: Keyword::Tant,
            keyword: Keyword::Faire,
        }
    );
    assert_eq!(
        parse_err("Pour i ← 1 faire").kind,
        ParseErrorKind::MissingKeyword {
            construct: Keyword::Pour,
            keyword: Keyword::A,
        }
    );
    assert_eq!(
        parse_err("Pour i ← 1 à 3").kind,
        ParseErrorKind::MissingKeyword {
            construct: Keyword::Pour,
            keyword: Keyword::Faire,
        }
    );
}

#[test]
fn missing_operands() {
    let err = parse_err("x ← 1 +");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(err.span, Span::new(8, 9));
    assert_eq!(parse_err("x ←").kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(parse_err("Si alors").kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(parse_err("Afficher(a, , b)").kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(parse_err("x ← ()").kind, ParseErrorKind::ExpectedExpression);
}

#[test]
fn invalid_targets_and_headers() {
    assert_eq!(parse_err("1 ← x").kind, ParseErrorKind::InvalidAssignmentTarget);
    assert_eq!(parse_err("a b ← x").kind, ParseErrorKind::InvalidAssignmentTarget);
    assert!(matches!(
        parse_err("Pour 1 à 3 faire").kind,
        ParseErrorKind::InvalidLoopHeader { .. }
    ));
    assert!(matches!(
        parse_err("Pour t[1] ← 1 à 3 faire").kind,
        ParseErrorKind::InvalidLoopHeader { .. }
    ));
    assert_eq!(parse_err("Algorithme").kind, ParseErrorKind::InvalidProgramHeader);
    assert_eq!(parse_err("Algorithme a b").kind, ParseErrorKind::InvalidProgramHeader);
    assert_eq!(parse_err("Fin x").kind, ParseErrorKind::InvalidBlockEnd);
}

#[test]
fn invalid_declarations() {
    assert_eq!(
        parse_err("x : nombre").kind,
        ParseErrorKind::UnknownType {
            name: "nombre".into()
        }
    );
    assert!(matches!(
        parse_err("t : tableau de entier").kind,
        ParseErrorKind::InvalidDeclaration { .. }
    ));
    assert!(matches!(
        parse_err("x[2] : entier").kind,
        ParseErrorKind::InvalidDeclaration { .. }
    ));
    assert!(matches!(
        parse_err("a, : entier").kind,
        ParseErrorKind::InvalidDeclaration { .. }
    ));
    assert!(matches!(
        parse_err(": entier").kind,
        ParseErrorKind::InvalidDeclaration { .. }
    ));
}

#[test]
fn stray_tokens() {
    assert!(matches!(
        parse_err("x y").kind,
        ParseErrorKind::UnexpectedToken { ref found } if found == "y"
    ));
    assert!(matches!(
        parse_err("Si x alors y").kind,
        ParseErrorKind::UnexpectedToken { .. }
    ));
    assert!(matches!(
        parse_err("alors").kind,
        ParseErrorKind::UnexpectedToken { .. }
    ));
}

#[test]
fn errors_map_to_syntax_codes() {
    let diag = parse_err("Si x").into_diagnostic();
    assert_eq!(diag.code, algo_diagnostic::ErrorCode::E1003);
    assert_eq!(
        diag.code.category(),
        algo_diagnostic::ErrorCategory::Syntax
    );
    assert!(diag.primary_span().is_some());
}

// === Program ===

const PROGRAM: &str = "\
Algorithme Compte
Variables
  i, s : entier
Début
  s ← 0
  // somme
  Pour i ← 1 à 3 faire
    s ← s + i
  Fin pour
  Afficher(s)
Fin
";

#[test]
fn program_keeps_executable_lines() {
    let tokens = lex_source(PROGRAM).unwrap();
    let program = parse_program(&tokens).unwrap();
    assert_eq!(program.name.as_deref(), Some("Compte"));
    let lines: Vec<String> = program.nodes.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "(: entier i s)",
            "(← s 0)",
            "(Pour i (← i 1) 3)",
            "(← s (+ s i))",
            "(Fin Pour)",
            "(Afficher() s)",
            "Fin",
        ]
    );
}

#[test]
fn program_stops_at_first_error() {
    let tokens = lex_source("Début\nx ← \nSi alors\n").unwrap();
    let err = parse_program(&tokens).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(err.span, Span::new(8, 11));
}
