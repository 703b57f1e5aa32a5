//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile de valeurs -> f64
//!
//! Chaque étape est pure : aucune donnée ne survit à un appel, la table des
//! opérateurs est en lecture seule. Deux appels sur la même chaîne donnent
//! donc exactement le même résultat, et des appels concurrents n'ont rien à
//! synchroniser.

use tracing::{debug, trace};

use super::erreurs::{Error, EvalError};
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Exécute une RPN avec une pile de valeurs.
///
/// - opérateur : dépile `arity` valeurs (remises dans l'ordre gauche → droite),
///   empile le résultat
/// - sinon : le jeton doit se lire comme un flottant
/// - à la fin, la pile doit contenir exactement une valeur
pub fn evaluate(rpn: &[Tok]) -> Result<f64, EvalError> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Op(op) => {
                let arity = op.arity();
                if pile.len() < arity {
                    debug!(op = op.symbole(), pile = pile.len(), "pile trop courte");
                    return Err(EvalError::InvalidArgumentCount { op: op.symbole() });
                }
                // split_off garde l'ordre d'empilement : [.., a, b] -> args = [a, b]
                let args = pile.split_off(pile.len() - arity);
                let v = op.apply(&args)?;
                trace!(op = op.symbole(), ?args, v, "applique");
                pile.push(v);
            }
            Tok::Num(s) => {
                let v = lire_nombre(s)?;
                pile.push(v);
            }
            Tok::LPar | Tok::RPar => {
                return Err(EvalError::InvalidToken(tok.to_string()));
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::InvalidArguments { count: pile.len() }),
    }
}

fn lire_nombre(s: &str) -> Result<f64, EvalError> {
    s.parse::<f64>()
        .map_err(|_| EvalError::InvalidToken(s.to_string()))
}

/// API publique : évalue une expression infixe et retourne un flottant.
pub fn evaluate_expression(expr: &str) -> Result<f64, Error> {
    evaluate_with_steps(expr).map(|(v, _d)| v)
}

/// Comme [`evaluate_expression`], avec la démarche (jetons + RPN) en plus.
pub fn evaluate_with_steps(expr: &str) -> Result<(f64, Demarche), Error> {
    // 1) Jetons
    let jetons = tokenize(expr)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Pile
    let resultat =
        evaluate(&rpn).inspect_err(|e| debug!(expr, erreur = %e, "échec évaluation"))?;
    debug!(expr, resultat, "évaluation terminée");

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };

    Ok((resultat, d))
}
