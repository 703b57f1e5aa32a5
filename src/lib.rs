//! Calculatrice RPN — noyau d'évaluation d'expressions arithmétiques.
//!
//! Pipeline : texte -> jetons -> RPN (shunting-yard) -> pile de valeurs -> `f64`.
//!
//! ```
//! use calculatrice_rpn::evaluate_expression;
//!
//! assert_eq!(evaluate_expression("(1 + 2) * 3"), Ok(9.0));
//! assert_eq!(evaluate_expression("2 ^ 3 ^ 2"), Ok(512.0));
//! assert!(evaluate_expression("(1 + 2").unwrap_err().is_parse());
//! ```

pub mod noyau;

pub use noyau::{
    evaluate_expression, evaluate_with_steps, format_nombre, Error, EvalError, ParseError,
};
