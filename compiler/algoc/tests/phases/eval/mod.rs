//! End-to-end runs of complete programs.

use algo_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use algo_diagnostic::{ErrorCategory, ErrorCode};
use algo_eval::EvalErrorKind;
use algoc::AlgoError;
use pretty_assertions::assert_eq;

use crate::common::{program, run_err, run_ok, run_with_input};

fn eval_kind(err: AlgoError) -> EvalErrorKind {
    match err {
        AlgoError::Eval(err) => err.kind,
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

#[test]
fn for_loop_prints_each_value_once() {
    let source = program("i : entier", "Pour i ← 1 à 3 faire\n  Afficher(i)\nFin pour");
    assert_eq!(run_ok(&source), "1\n2\n3\n");
}

#[test]
fn if_else_runs_one_branch() {
    let source = program(
        "",
        "Si 1 < 2 alors\n  Afficher(\"a\")\nSinon\n  Afficher(\"b\")\nFin si",
    );
    assert_eq!(run_ok(&source), "a\n");
}

#[test]
fn less_or_equal_matches_its_expansion() {
    for x in -2..=8 {
        let body = format!(
            "x ← {x}\n\
             Si x <= 5 alors\n  Afficher(1)\nSinon\n  Afficher(0)\nFin si\n\
             Si (x < 5) OU (x = 5) alors\n  Afficher(1)\nSinon\n  Afficher(0)\nFin si"
        );
        let out = run_ok(&program("x : entier", &body));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1], "x = {x}");
    }
}

#[test]
fn array_write_then_read_and_bounds() {
    let source = program(
        "t[3] : tableau de entier",
        "t[1] ← 42\nAfficher(t[1])",
    );
    assert_eq!(run_ok(&source), "42\n");

    for index in [0, 4] {
        let source = program("t[3] : tableau de entier", &format!("Afficher(t[{index}])"));
        assert_eq!(
            eval_kind(run_err(&source)),
            EvalErrorKind::IndexOutOfBounds { index, len: 3 }
        );
    }
}

#[test]
fn length_of_string_and_unfilled_array() {
    let source = program(
        "t[7] : tableau de booléen",
        "Afficher(longueur(\"abc\"))\nAfficher(longueur(t))",
    );
    assert_eq!(run_ok(&source), "3\n7\n");
}

#[test]
fn unset_read_then_last_assignment_wins() {
    let source = program(
        "x : réel",
        "Afficher(x)\nx ← 1.5\nx ← 2.5\nAfficher(x)",
    );
    assert_eq!(run_ok(&source), "\n2.5\n");
}

#[test]
fn assigning_another_type_is_a_type_error() {
    let source = program("x : entier", "x ← \"douze\"");
    let err = run_err(&source);
    let diag = err.clone().into_diagnostic();
    assert_eq!(diag.code.category(), ErrorCategory::Type);
    assert_eq!(
        eval_kind(err),
        EvalErrorKind::TypeMismatch {
            expected: "entier".into(),
            got: "chaîne".into()
        }
    );
}

#[test]
fn interactive_program() {
    let source = program(
        "n, i, s : entier",
        "Saisir(n)\ns ← 0\nPour i ← 1 à n faire\n  s ← s + i\nFin pour\nAfficher(\"somme\", s)",
    );
    let (result, out) = run_with_input(&source, &["10"]);
    result.unwrap();
    assert_eq!(out, "somme 55\n");
}

#[test]
fn output_before_an_error_is_kept() {
    let source = program("x : entier", "Afficher(\"avant\")\nx ← 1 / 0\nAfficher(\"après\")");
    let (result, out) = run_with_input(&source, &[]);
    assert_eq!(eval_kind(result.unwrap_err()), EvalErrorKind::DivisionByZero);
    assert_eq!(out, "avant\n");
}

#[test]
fn runtime_diagnostic_points_at_the_line() {
    let source = program("t[2] : tableau de entier", "t[3] ← 1");
    let diag = run_err(&source).into_diagnostic();
    assert_eq!(diag.code, ErrorCode::E6001);

    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("test.algo", source.as_str());
    emitter.emit(&diag);
    emitter.flush();
    let rendered = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(rendered.starts_with("error[E6001]: index 3 out of bounds 1..=2"));
    assert!(rendered.contains("--> test.algo:5:"), "{rendered}");
    assert!(rendered.contains("5 | t[3] ← 1"), "{rendered}");
    assert!(rendered.contains("= note: array indices start at 1"), "{rendered}");
}

#[test]
fn duplicate_diagnostic_shows_both_declarations() {
    let source = program("a : entier\na : réel", "Afficher(1)");
    let diag = run_err(&source).into_diagnostic();
    assert_eq!(diag.code, ErrorCode::E3002);

    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("test.algo", source.as_str());
    emitter.emit(&diag);
    emitter.flush();
    let rendered = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(rendered.starts_with("error[E3002]: variable `a` is already declared"));
    assert!(rendered.contains("--> test.algo:4:1"), "{rendered}");
    assert!(rendered.contains("::: test.algo:3:1"), "{rendered}");
    assert!(rendered.contains("  | - first declared here"), "{rendered}");
}

#[test]
fn oversized_array_is_a_runtime_error() {
    let source = program("t[1000000000000] : tableau de entier", "Afficher(1)");
    let (result, out) = run_with_input(&source, &[]);
    assert!(matches!(
        eval_kind(result.unwrap_err()),
        EvalErrorKind::ArrayTooLarge { .. }
    ));
    assert_eq!(out, "");
}
