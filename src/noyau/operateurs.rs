// src/noyau/operateurs.rs
//
// Table des opérateurs (feuille du noyau).
//
// Un seul endroit décide, pour chaque opérateur :
// - son symbole
// - associativité, précédence, arité
// - sa fonction d'évaluation
//
// La table est un `match` exhaustif sur `Op` : impossible d'ajouter une variante
// sans lui donner toutes ses métadonnées. Rien n'est mutable après compilation.

use num_traits::{Float, Zero};

use super::erreurs::EvalError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Signature commune : opérandes dans l'ordre gauche → droite, un résultat.
pub type EvalFn = fn(&[f64]) -> Result<f64, EvalError>;

/// Métadonnées immuables d'un opérateur.
#[derive(Clone, Copy, Debug)]
pub struct OperatorDefinition {
    pub associativity: Associativity,
    pub precedence: u8,
    pub arity: usize,
    pub evaluate: EvalFn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Minus,
    Div,
    Mult,
    Mod,
    /// Moins unaire (symbole interne `_`).
    UMinus,
    Pow,
    Abs,
    Sqrt,
}

pub const LEFT_PAREN: &str = "(";
pub const RIGHT_PAREN: &str = ")";

impl Op {
    pub const ALL: [Op; 9] = [
        Op::Plus,
        Op::Minus,
        Op::Div,
        Op::Mult,
        Op::Mod,
        Op::UMinus,
        Op::Pow,
        Op::Abs,
        Op::Sqrt,
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Div => "/",
            Op::Mult => "*",
            Op::Mod => "%",
            Op::UMinus => "_",
            Op::Pow => "^",
            Op::Abs => "abs",
            Op::Sqrt => "sqrt",
        }
    }

    pub fn from_symbole(s: &str) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.symbole() == s)
    }

    pub fn definition(self) -> OperatorDefinition {
        use Associativity::{Left, Right};

        let (associativity, precedence, arity) = match self {
            Op::Plus | Op::Minus => (Left, 1, 2),
            Op::Div | Op::Mult | Op::Mod => (Left, 2, 2),
            Op::UMinus => (Right, 10, 1),
            // 2 ^ 3 ^ 2 = 2 ^ (3 ^ 2)
            Op::Pow => (Right, 8, 2),
            Op::Abs | Op::Sqrt => (Right, 7, 1),
        };

        let evaluate: EvalFn = match self {
            Op::Plus => |a| binaire(a, "+", |x, y| Ok(x + y)),
            Op::Minus => |a| binaire(a, "-", |x, y| Ok(x - y)),
            Op::Div => |a| binaire(a, "/", division),
            Op::Mult => |a| binaire(a, "*", |x, y| Ok(x * y)),
            Op::Mod => |a| binaire(a, "%", modulo),
            Op::UMinus => |a| unaire(a, "_", |x| Ok(-x)),
            Op::Pow => |a| binaire(a, "^", puissance),
            Op::Abs => |a| unaire(a, "abs", |x| Ok(x.abs())),
            Op::Sqrt => |a| unaire(a, "sqrt", racine),
        };

        OperatorDefinition {
            associativity,
            precedence,
            arity,
            evaluate,
        }
    }

    pub fn associativity(self) -> Associativity {
        self.definition().associativity
    }

    pub fn precedence(self) -> u8 {
        self.definition().precedence
    }

    pub fn arity(self) -> usize {
        self.definition().arity
    }

    /// Applique l'opérateur ; `args` doit contenir exactement `arity()` valeurs.
    pub fn apply(self, args: &[f64]) -> Result<f64, EvalError> {
        (self.definition().evaluate)(args)
    }
}

/* ------------------------ API “table” ------------------------ */

pub fn lookup(symbole: &str) -> Option<OperatorDefinition> {
    Op::from_symbole(symbole).map(Op::definition)
}

/// Vrai ssi le symbole est enregistré ET n'est pas une parenthèse.
pub fn is_operator(symbole: &str) -> bool {
    Op::from_symbole(symbole).is_some()
}

pub fn is_left_paren(symbole: &str) -> bool {
    symbole == LEFT_PAREN
}

pub fn is_right_paren(symbole: &str) -> bool {
    symbole == RIGHT_PAREN
}

/* ------------------------ Fonctions d'évaluation ------------------------ */

fn binaire(
    args: &[f64],
    op: &'static str,
    f: fn(f64, f64) -> Result<f64, EvalError>,
) -> Result<f64, EvalError> {
    match args {
        [x, y] => f(*x, *y),
        _ => Err(EvalError::InvalidArgumentCount { op }),
    }
}

fn unaire(
    args: &[f64],
    op: &'static str,
    f: fn(f64) -> Result<f64, EvalError>,
) -> Result<f64, EvalError> {
    match args {
        [x] => f(*x),
        _ => Err(EvalError::InvalidArgumentCount { op }),
    }
}

fn division(x: f64, y: f64) -> Result<f64, EvalError> {
    if y.is_zero() {
        return Err(EvalError::DivisionByZero { op: "/" });
    }
    Ok(x / y)
}

fn modulo(x: f64, y: f64) -> Result<f64, EvalError> {
    if y.is_zero() {
        return Err(EvalError::DivisionByZero { op: "%" });
    }
    Ok(modulo_plancher(x, y))
}

/// Modulo “plancher” : le reste prend le signe du diviseur (-7 % 3 = 2).
/// `b` non nul.
fn modulo_plancher<F: Float>(a: F, b: F) -> F {
    let r = a % b;
    if r.is_zero() {
        // zéro signé comme le diviseur
        return F::zero() * b.signum();
    }
    if (r < F::zero()) != (b < F::zero()) {
        r + b
    } else {
        r
    }
}

fn puissance(base: f64, exp: f64) -> Result<f64, EvalError> {
    if base.is_zero() && exp < 0.0 {
        return Err(EvalError::DivisionByZero { op: "^" });
    }
    if base < 0.0 && exp.is_finite() && exp.fract() != 0.0 {
        return Err(EvalError::Domain {
            op: "^",
            value: base,
        });
    }
    let r = base.powf(exp);
    if r.is_infinite() && base.is_finite() && exp.is_finite() {
        return Err(EvalError::Overflow { op: "^" });
    }
    Ok(r)
}

fn racine(x: f64) -> Result<f64, EvalError> {
    if x < 0.0 {
        return Err(EvalError::Domain {
            op: "sqrt",
            value: x,
        });
    }
    Ok(x.sqrt())
}
