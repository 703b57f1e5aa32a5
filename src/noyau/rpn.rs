// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfix)
// - Les parenthèses sont consommées ici : la RPN n'en contient jamais
//
// Règle de dépilement (opérateur entrant `t`, sommet `top`) :
// - t associatif à gauche  : on sort top tant que prec(t) <= prec(top)
// - t associatif à droite  : on sort top tant que prec(t) <  prec(top)
// C'est cette asymétrie qui fait "2 ^ 3 ^ 2" = 2 ^ (3 ^ 2) et "- - 3" = -(-3).

use tracing::{debug, trace};

use super::erreurs::ParseError;
use super::jetons::Tok;
use super::operateurs::{Associativity, Op};

fn doit_depiler(entrant: Op, sommet: Op) -> bool {
    match entrant.associativity() {
        Associativity::Left => entrant.precedence() <= sommet.precedence(),
        Associativity::Right => entrant.precedence() < sommet.precedence(),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num("1"), Op(+), Num("2"), Op(*), Num("3")]
///   rpn:    [Num("1"), Num("2"), Num("3"), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ParseError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                // une parenthèse au sommet bloque le dépilement
                while let Some(&Tok::Op(sommet)) = ops.last() {
                    if !doit_depiler(op, sommet) {
                        break;
                    }
                    ops.pop();
                    trace!(op = sommet.symbole(), "dépile");
                    out.push(Tok::Op(sommet));
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => {
                            debug!("')' sans '(' correspondante");
                            return Err(ParseError::MismatchedParentheses);
                        }
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar | Tok::RPar) {
            debug!("'(' non fermée");
            return Err(ParseError::MismatchedParentheses);
        }
        out.push(top);
    }

    debug!(n_jetons = tokens.len(), n_rpn = out.len(), "to_rpn terminé");
    Ok(out)
}
