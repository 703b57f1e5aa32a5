//! Noyau RPN
//!
//! Organisation interne :
//! - operateurs.rs : table des opérateurs (symbole, précédence, arité, évaluation)
//! - jetons.rs     : tokenisation (moins unaire résolu ici)
//! - rpn.rs        : shunting-yard
//! - eval.rs       : pile de valeurs + pipeline complet
//! - format.rs     : affichage du résultat
//! - erreurs.rs    : ParseError / EvalError

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreurs::{Error, EvalError, ParseError};
pub use eval::{evaluate, evaluate_expression, evaluate_with_steps, Demarche};
pub use format::format_nombre;
pub use jetons::{format_tokens, tokenize, Tok};
pub use operateurs::{
    is_left_paren, is_operator, is_right_paren, lookup, Associativity, Op, OperatorDefinition,
};
pub use rpn::to_rpn;
