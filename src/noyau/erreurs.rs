// src/noyau/erreurs.rs
//
//! Erreurs du noyau.
//!
//! Deux familles, toutes deux terminales (aucune reprise) :
//! - [`ParseError`] : structure de l'entrée (tokenize + shunting-yard)
//! - [`EvalError`]  : exécution de la RPN (pile, littéraux, domaines)
//!
//! [`Error`] les regroupe avec `#[from]`, pour que `?` traverse tout le pipeline.

use thiserror::Error;

/// Problème structurel dans l'expression (détecté avant toute évaluation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Un opérateur binaire apparaît là où une valeur était attendue (ex: "+ 1").
    #[error("illegal use of binary operator {0}")]
    IllegalBinaryOperator(char),

    /// Parenthèses non équilibrées.
    #[error("mismatched parentheses")]
    MismatchedParentheses,
}

/// Problème sémantique pendant l'exécution de la RPN.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Pile de valeurs trop courte pour l'arité de l'opérateur.
    #[error("invalid number of arguments for operator {op}")]
    InvalidArgumentCount { op: &'static str },

    /// Littéral impossible à lire comme flottant (ou parenthèse égarée en RPN).
    #[error("invalid token {0:?}")]
    InvalidToken(String),

    /// La pile finale ne contient pas exactement une valeur.
    #[error("invalid arguments: {count} values left on the stack")]
    InvalidArguments { count: usize },

    #[error("division by zero in operator {op}")]
    DivisionByZero { op: &'static str },

    /// Argument hors domaine (sqrt d'un négatif, puissance fractionnaire d'un négatif).
    #[error("math domain error: {op} undefined for {value}")]
    Domain { op: &'static str, value: f64 },

    #[error("numerical result out of range in operator {op}")]
    Overflow { op: &'static str },
}

/// Erreur publique du pipeline complet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    pub fn is_eval(&self) -> bool {
        matches!(self, Error::Eval(_))
    }
}
