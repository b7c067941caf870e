//! Lexer phase tests on whole files.

use algo_ir::{visible_text, Operator, TokenData};
use algo_lexer::{split_lines, LexErrorKind};
use algoc::{lex_text, AlgoError};
use pretty_assertions::assert_eq;

const SOURCE: &str = "\
Algorithme Tri
Variables
  t[5] : tableau de entier
  i, j, tmp : entier
  nom : chaîne de caractères
Début
  nom ← \"tri à bulles\"
  Pour i ← 1 à 5 faire
    Saisir(t[i])
  Fin pour
  Pour i ← 1 à 4 faire
    Pour j ← 1 à 5 - i faire
      Si t[j] > t[j + 1] alors
        tmp ← t[j]
        t[j] ← t[j + 1]
        t[j + 1] ← tmp
      Fin si
    Fin pour
  Fin pour
  Afficher(nom, \":\", t)
Fin
";

fn strip_ws(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn file_round_trips_through_visible_text() {
    let tokens = lex_text(SOURCE).unwrap();
    assert_eq!(strip_ws(&visible_text(SOURCE, &tokens)), strip_ws(SOURCE));
}

#[test]
fn one_token_line_per_source_line() {
    let tokens = lex_text(SOURCE).unwrap();
    assert_eq!(split_lines(&tokens).len(), SOURCE.lines().count());
}

#[test]
fn adjacent_less_and_equal_fuse() {
    let tokens = lex_text("x < = 5\n").unwrap();
    let ops: Vec<_> = tokens
        .iter()
        .filter_map(|t| match t.data {
            TokenData::Operator(op) => Some(op),
            _ => None,
        })
        .collect();
    assert_eq!(ops, vec![Operator::LtEq]);
}

#[test]
fn quote_left_open_is_an_error() {
    let err = lex_text("Afficher(\"bonjour)\n").unwrap_err();
    let AlgoError::Lex(err) = err else {
        panic!("expected a lex error, got {err:?}");
    };
    assert!(matches!(err.kind, LexErrorKind::UnterminatedString { .. }));
}

#[test]
fn unbalanced_brackets_are_errors() {
    for source in ["Afficher((1)\n", "x ← 1)\n", "t[1) ← 2\n"] {
        assert!(
            matches!(lex_text(source), Err(AlgoError::Lex(_))),
            "{source:?} should not lex"
        );
    }
}
