//! Tests de propriétés : le contrat observable du noyau, une propriété par test.
//!
//! - précédence classique, gauche → droite à précédence égale
//! - parenthèses prioritaires
//! - moins unaire (précédence 10) au-dessus de ^ (précédence 8)
//! - ^ associatif à droite
//! - opérateurs mots (sqrt, abs) composés avec le moins unaire
//! - erreurs : parenthèses, opérateur binaire mal placé, pile trop courte
//! - idempotence (aucun état caché entre deux appels)

use pretty_assertions::assert_eq;

use super::erreurs::{Error, EvalError, ParseError};
use super::eval::{evaluate, evaluate_expression};
use super::jetons::{format_tokens, tokenize, Tok};
use super::operateurs::Op;
use super::rpn::to_rpn;

fn eval_ok(expr: &str) -> f64 {
    evaluate_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_parse_error(expr: &str) {
    match evaluate_expression(expr) {
        Err(Error::Parse(_)) => {}
        autre => panic!("ParseError attendue pour {expr:?}, obtenu {autre:?}"),
    }
}

#[test]
fn prop_precedence_conventionnelle() {
    assert_eq!(eval_ok("1 + 2 * 3"), 7.0);
    assert_eq!(eval_ok("10 - 6 / 2"), 7.0);
    assert_eq!(eval_ok("2 * 3 + 4 * 5"), 26.0);
    assert_eq!(eval_ok("1 - 2 - 3"), -4.0);
    assert_eq!(eval_ok("64 / 4 / 2"), 8.0);
    assert_eq!(eval_ok("2 * 3 / 4"), 1.5);
}

#[test]
fn prop_parentheses_prioritaires() {
    assert_eq!(eval_ok("(1 + 2) * 3"), 9.0);
    assert_eq!(eval_ok("1 - (2 - 3)"), 2.0);
    assert_eq!(eval_ok("(2 + 3) * (4 - 1)"), 15.0);
}

#[test]
fn prop_moins_unaire_avant_puissance() {
    assert_eq!(format_tokens(&tokenize("-3 ^ 2").unwrap()), "_ 3 ^ 2");
    assert_eq!(eval_ok("-3 ^ 2"), 9.0);
    assert_eq!(eval_ok("--3"), 3.0);
}

#[test]
fn prop_puissance_associative_droite() {
    assert_eq!(eval_ok("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(eval_ok("(2 ^ 3) ^ 2"), 64.0);
}

#[test]
fn prop_operateurs_mots() {
    assert_eq!(eval_ok("sqrt 9"), 3.0);
    assert_eq!(eval_ok("sqrt(9)"), 3.0);
    assert_eq!(eval_ok("abs -5"), 5.0);
    assert_eq!(eval_ok("abs(-5)"), 5.0);
    assert_eq!(eval_ok("abs 5"), 5.0);
    assert_eq!(eval_ok("2 * sqrt 16 + 1"), 9.0);
}

#[test]
fn prop_modulo() {
    assert_eq!(eval_ok("7 % 3"), 1.0);
    assert_eq!(eval_ok("-7 % 3"), 2.0);
    assert_eq!(eval_ok("1 + 7 % 4 * 2"), 7.0);
}

#[test]
fn prop_parentheses_desequilibrees() {
    assert_eq!(
        evaluate_expression("(1 + 2"),
        Err(Error::Parse(ParseError::MismatchedParentheses))
    );
    assert_eq!(
        evaluate_expression("1 + 2)"),
        Err(Error::Parse(ParseError::MismatchedParentheses))
    );
    assert_parse_error("((1 + 2) * 3");
}

#[test]
fn prop_operateur_binaire_mal_place() {
    assert_eq!(
        evaluate_expression("+ 1"),
        Err(Error::Parse(ParseError::IllegalBinaryOperator('+')))
    );
    assert_parse_error("* 2");
    assert_parse_error("1 + / 2");
    assert_parse_error("(% 2)");
}

#[test]
fn prop_pile_trop_courte() {
    assert_eq!(
        evaluate(&[Tok::Op(Op::Plus)]),
        Err(EvalError::InvalidArgumentCount { op: "+" })
    );
    assert!(matches!(
        evaluate_expression("1 +"),
        Err(Error::Eval(EvalError::InvalidArgumentCount { op: "+" }))
    ));
}

#[test]
fn prop_idempotence() {
    for expr in ["1 + 2 * 3", "2 ^ 3 ^ 2", "abs -5", "sqrt 2", "1 / 3"] {
        let a = evaluate_expression(expr).unwrap();
        let b = evaluate_expression(expr).unwrap();
        let c = evaluate_expression(expr).unwrap();
        assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
        assert_eq!(b.to_bits(), c.to_bits(), "expr={expr:?}");
    }
    // une erreur ne laisse rien derrière elle
    assert!(evaluate_expression("(1").is_err());
    assert_eq!(eval_ok("1 + 1"), 2.0);
}

#[test]
fn prop_rpn_simple_reordonne() {
    for (expr, attendu) in [
        ("1 + 2", vec!["1", "2", "+"]),
        ("4 * 5", vec!["4", "5", "*"]),
        ("9 - 3", vec!["9", "3", "-"]),
        ("8 / 2", vec!["8", "2", "/"]),
    ] {
        let rpn = to_rpn(&tokenize(expr).unwrap()).unwrap();
        let rpn: Vec<String> = rpn.iter().map(Tok::to_string).collect();
        assert_eq!(rpn, attendu, "expr={expr:?}");
    }
}

#[test]
fn prop_evaluations_paralleles() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let expr = format!("({i} + 1) * 2 ^ 3 ^ 2");
                (0..200)
                    .map(|_| evaluate_expression(&expr).unwrap())
                    .all(|v| v == f64::from(i + 1) * 512.0)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
