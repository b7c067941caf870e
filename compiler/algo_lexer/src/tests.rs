use super::*;
use algo_ir::{
    visible_text, BoolOp, GroupDelim, Keyword, NumberLit, Operator, StrLit, TokenData,
    TypeName, VarRef,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn lex(line: &str) -> Vec<Token> {
    let mut tokens = lex_line(line, 0, &mut LexerState::new()).unwrap();
    assert_eq!(tokens.pop().map(|t| t.kind()), Some(TokenKind::EndOfLine));
    tokens
}

fn lex_err(line: &str) -> LexErrorKind {
    lex_line(line, 0, &mut LexerState::new()).unwrap_err().kind
}

fn data(tokens: &[Token]) -> Vec<TokenData> {
    tokens.iter().map(|t| t.data.clone()).collect()
}

// === Grouping ===

#[test]
fn call_after_identifier() {
    let tokens = lex("Afficher(x, 1)");
    assert_eq!(tokens.len(), 1);
    let TokenData::Function(call) = &tokens[0].data else {
        panic!("expected call, got {:?}", tokens[0]);
    };
    assert_eq!(call.name, "Afficher");
    assert_eq!(call.args.delim, GroupDelim::Paren);
    assert_eq!(
        data(&call.args.tokens),
        vec![
            TokenData::Variable(VarRef::scalar("x")),
            TokenData::Separator(algo_ir::Separator::Comma),
            TokenData::Number(algo_ir::Number {
                text: "1".into(),
                value: NumberLit::Int(1),
            }),
        ]
    );
    assert_eq!(tokens[0].span, Span::new(0, 14));
}

#[test]
fn paren_after_keyword_is_group() {
    let tokens = lex("Si (x < 5) alors");
    assert_eq!(tokens.len(), 3);
    assert!(tokens[0].is_keyword(Keyword::Si));
    let TokenData::Group(group) = &tokens[1].data else {
        panic!("expected group");
    };
    assert_eq!(group.tokens.len(), 3);
    assert_eq!(group.span, Span::new(3, 10));
}

#[test]
fn nested_groups_and_calls() {
    let tokens = lex("x ← ((1 + longueur(t)) * 2)");
    assert_eq!(tokens.len(), 3);
    let TokenData::Group(outer) = &tokens[2].data else {
        panic!("expected group");
    };
    let TokenData::Group(inner) = &outer.tokens[0].data else {
        panic!("expected inner group");
    };
    assert!(matches!(
        &inner.tokens[2].data,
        TokenData::Function(call) if call.name == "longueur" && call.args.tokens.len() == 1
    ));
}

#[test]
fn index_attaches_to_variable() {
    let tokens = lex("t[i][j + 1] ← 0");
    assert_eq!(tokens.len(), 3);
    let var = tokens[0].as_var().unwrap();
    assert_eq!(var.name, "t");
    assert_eq!(var.dims.len(), 2);
    assert_eq!(var.dims[1].tokens.len(), 3);
    assert_eq!(var.dims[0].delim, GroupDelim::Square);
    assert_eq!(tokens[0].span, Span::new(0, 11));
}

#[test]
fn call_argument_can_be_indexed() {
    let tokens = lex("Afficher(t[2])");
    let TokenData::Function(call) = &tokens[0].data else {
        panic!("expected call");
    };
    assert_eq!(call.args.tokens[0].as_var().map(|v| v.dims.len()), Some(1));
}

// === Strings ===

#[test]
fn quoted_text_becomes_one_string() {
    let tokens = lex("Afficher(\"Bonjour,   le monde!\")");
    let TokenData::Function(call) = &tokens[0].data else {
        panic!("expected call");
    };
    assert_eq!(
        data(&call.args.tokens),
        vec![TokenData::String(StrLit {
            text: "Bonjour, le monde!".into(),
            quote: '"',
        })]
    );
}

#[test]
fn keywords_inside_quotes_are_text() {
    let tokens = lex("s ← 'Si x<=3 alors'");
    assert_eq!(
        tokens[2].data,
        TokenData::String(StrLit {
            text: "Si x<=3 alors".into(),
            quote: '\'',
        })
    );
    assert_eq!(tokens[2].span, Span::new(6, 21));
}

#[test]
fn other_quote_is_text() {
    let tokens = lex("\"l'eau\"");
    assert_eq!(
        tokens[0].data,
        TokenData::String(StrLit {
            text: "l'eau".into(),
            quote: '"',
        })
    );
}

#[test]
fn empty_string() {
    let tokens = lex("s ← \"\"");
    assert_eq!(
        tokens[2].data,
        TokenData::String(StrLit {
            text: String::new(),
            quote: '"',
        })
    );
}

// === Fusion ===

#[test]
fn comparison_fusion() {
    let ops: Vec<_> = lex("a <= b >= c <> d < = e")
        .iter()
        .filter_map(Token::operator)
        .collect();
    assert_eq!(
        ops,
        vec![Operator::LtEq, Operator::GtEq, Operator::NotEq, Operator::LtEq]
    );
}

#[test]
fn unicode_comparisons_are_single_tokens() {
    let ops: Vec<_> = lex("a ≤ b ≥ c ≠ d")
        .iter()
        .filter_map(Token::operator)
        .collect();
    assert_eq!(ops, vec![Operator::LtEq, Operator::GtEq, Operator::NotEq]);
}

#[test]
fn equality_alone_is_not_fused() {
    let ops: Vec<_> = lex("a = b")
        .iter()
        .filter_map(Token::operator)
        .collect();
    assert_eq!(ops, vec![Operator::Eq]);
}

// === Classification ===

#[test]
fn declaration_line() {
    assert_eq!(
        data(&lex("a, b : tableau de réel")),
        vec![
            TokenData::Variable(VarRef::scalar("a")),
            TokenData::Separator(algo_ir::Separator::Comma),
            TokenData::Variable(VarRef::scalar("b")),
            TokenData::Operator(Operator::Colon),
            TokenData::Type(TypeName::Tableau),
            TokenData::Keyword(Keyword::De),
            TokenData::Type(TypeName::Reel),
        ]
    );
}

#[test]
fn connectives_and_booleans() {
    assert_eq!(
        data(&lex("vrai OU Faux")),
        vec![
            TokenData::Boolean(true),
            TokenData::BooleanOperator(BoolOp::Ou),
            TokenData::Boolean(false),
        ]
    );
}

#[test]
fn comment_ends_line() {
    assert_eq!(lex("x ← 1 // reset x").len(), 3);
    assert!(lex("// only a comment").is_empty());
    // a lone slash is division
    assert_eq!(lex("x ← 4 / 2").len(), 5);
    // slashes inside quotes are text
    assert_eq!(
        lex("s ← \"a//b\"")[2].data,
        TokenData::String(StrLit {
            text: "a//b".into(),
            quote: '"',
        })
    );
}

// === Errors ===

#[test]
fn unterminated_string() {
    assert_eq!(lex_err("Afficher(\"abc"), LexErrorKind::UnterminatedString { quote: '"' });
    let err = lex_line("x ← 'ab", 10, &mut LexerState::new()).unwrap_err();
    assert_eq!(err.span, Span::new(16, 19));
}

#[test]
fn unbalanced_brackets() {
    assert_eq!(lex_err("x ← (1 + 2"), LexErrorKind::UnclosedDelimiter { open: '(' });
    assert_eq!(lex_err("x ← 1 + 2)"), LexErrorKind::UnexpectedClosingDelimiter { found: ')' });
    assert_eq!(
        lex_err("t[1) ← 2"),
        LexErrorKind::MismatchedDelimiter {
            open: '[',
            found: ')'
        }
    );
    assert_eq!(lex_err("x ← [1]"), LexErrorKind::IndexWithoutVariable);
}

#[test]
fn error_codes() {
    let err = lex_line("(", 0, &mut LexerState::new()).unwrap_err();
    let diag = err.into_diagnostic();
    assert_eq!(diag.code, algo_diagnostic::ErrorCode::E0003);
    assert_eq!(diag.primary_span(), Some(Span::new(0, 1)));
}

// === File level ===

#[test]
fn source_lines_are_marked_and_split() {
    let source = "Algorithme Test\r\n\nDébut\n  x ← 1\nFin";
    let tokens = lex_source(source).unwrap();
    let lines = split_lines(&tokens);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0].len(), 2);
    assert!(lines[1].is_empty());
    assert!(lines[2][0].is_keyword(Keyword::Debut));
    assert_eq!(lines[3][0].span, Span::new(27, 28));
    assert!(lines[4][0].is_keyword(Keyword::Fin));
}

#[test]
fn quote_state_resets_between_runs() {
    let mut state = LexerState::new();
    assert!(lex_line("\"open", 0, &mut state).is_err());
    assert_eq!(state.open_quote(), None);
    assert!(lex_line("x ← 1", 6, &mut state).is_ok());
    assert_eq!(state.line(), 2);
}

#[test]
fn parenthesis_tokens_never_survive_grouping() {
    fn check(tokens: &[Token]) {
        for token in tokens {
            match &token.data {
                TokenData::Parenthesis(b) => panic!("raw bracket {b:?} left in output"),
                TokenData::Separator(algo_ir::Separator::Quote(_)) => {
                    panic!("raw quote left in output")
                }
                TokenData::Group(g) => check(&g.tokens),
                TokenData::Function(call) => check(&call.args.tokens),
                TokenData::Variable(var) => var.dims.iter().for_each(|d| check(&d.tokens)),
                _ => {}
            }
        }
    }
    check(&lex("t[(i + 1)] ← f(g(\"x\"), (2 * 3))"));
}

// === Round trip ===

fn atom() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "v_[a-z0-9]{0,5}",
        "[0-9]{1,6}",
        "[0-9]{1,3}\\.[0-9]{1,3}",
        Just("Si".to_string()),
        Just("alors".to_string()),
        Just("Tant".to_string()),
        Just("que".to_string()),
        Just("Pour".to_string()),
        Just("à".to_string()),
        Just("vrai".to_string()),
        Just("ET".to_string()),
        Just("entier".to_string()),
        Just(",".to_string()),
        "[-+*/=<>←:≤≥≠]",
        "\"[a-z]{1,4}( [a-z]{1,4}){0,3}\"",
        "'[a-z ]{0,6}'",
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        let seq = prop::collection::vec(inner, 0..4).prop_map(|items| items.join(" "));
        prop_oneof![
            seq.clone().prop_map(|s| format!("({s})")),
            seq.clone().prop_map(|s| format!("f_x({s})")),
            seq.prop_map(|s| format!("v_t[{s}]")),
        ]
    })
}

fn spacing() -> impl Strategy<Value = String> {
    prop_oneof![Just(" ".to_string()), Just("  ".to_string()), Just("\t".to_string())]
}

fn strip_ws(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn visible_text_round_trips(
        atoms in prop::collection::vec((atom(), spacing()), 1..12)
    ) {
        let line: String = atoms.iter().map(|(a, s)| format!("{a}{s}")).collect();
        let mut state = LexerState::new();
        let tokens = lex_line(&line, 0, &mut state).unwrap();
        prop_assert_eq!(strip_ws(&visible_text(&line, &tokens)), strip_ws(&line));
    }
}
