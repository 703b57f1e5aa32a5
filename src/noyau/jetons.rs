// src/noyau/jetons.rs

use std::fmt;

use tracing::{debug, trace};

use super::erreurs::ParseError;
use super::operateurs::{is_left_paren, is_right_paren, Op};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Littéral brut, tel qu'écrit.
    // NOTE: la lecture en flottant est faite par l'évaluateur (eval.rs) :
    // un littéral mal formé y devient EvalError::InvalidToken.
    Num(String),

    Op(Op),

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(s) => f.write_str(s),
            Tok::Op(op) => f.write_str(op.symbole()),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Ce qui précède le caractère courant.
/// Sert uniquement à distinguer le moins unaire du moins binaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Contexte {
    Debut,
    Operateur,
    Operande,
}

impl Contexte {
    fn attend_valeur(self) -> bool {
        self != Contexte::Operande
    }
}

/// Tokenize une chaîne en jetons (un seul passage, sans retour arrière).
/// Supporte:
/// - littéraux numériques (collés ou séparés par des espaces)
/// - opérateurs + - * / % ^ (et `_`, moins unaire explicite)
/// - opérateurs mots : abs, sqrt
/// - parenthèses ( )
///
/// Un '-' là où une valeur est attendue devient le moins unaire `_`.
/// Tout autre opérateur à cette place => ParseError::IllegalBinaryOperator.
pub fn tokenize(expr: &str) -> Result<Vec<Tok>, ParseError> {
    let mut out = Vec::new();
    let mut litteral = String::new();
    let mut contexte = Contexte::Debut;

    for c in expr.chars() {
        if c.is_whitespace() {
            flush_litteral(&mut litteral, &mut out, &mut contexte);
            continue;
        }

        let mut buf = [0u8; 4];
        let sym: &str = c.encode_utf8(&mut buf);

        let symbole = if is_left_paren(sym) {
            Some(Tok::LPar)
        } else if is_right_paren(sym) {
            Some(Tok::RPar)
        } else {
            Op::from_symbole(sym).map(Tok::Op)
        };

        let Some(symbole) = symbole else {
            // caractère de littéral : un opérateur binaire devient légal ensuite
            litteral.push(c);
            contexte = Contexte::Operande;
            continue;
        };

        flush_litteral(&mut litteral, &mut out, &mut contexte);

        let jeton = match symbole {
            Tok::Op(Op::Minus) if contexte.attend_valeur() => Tok::Op(Op::UMinus),
            Tok::Op(_) if contexte.attend_valeur() => {
                debug!(%c, "opérateur binaire sans opérande gauche");
                return Err(ParseError::IllegalBinaryOperator(c));
            }
            autre => autre,
        };

        contexte = match jeton {
            // ")" ferme une valeur : "(3)-3" est une soustraction
            Tok::RPar => Contexte::Operande,
            _ => Contexte::Operateur,
        };

        trace!(%jeton, "jeton");
        out.push(jeton);
    }

    flush_litteral(&mut litteral, &mut out, &mut contexte);

    debug!(expr, n = out.len(), "tokenize terminé");
    Ok(out)
}

/// Pousse le littéral en cours (no-op s'il est vide).
/// Un mot enregistré dans la table (abs, sqrt) sort comme opérateur.
fn flush_litteral(litteral: &mut String, out: &mut Vec<Tok>, contexte: &mut Contexte) {
    if litteral.is_empty() {
        return;
    }
    let mot = std::mem::take(litteral);

    let jeton = match Op::from_symbole(&mot) {
        Some(op) => {
            *contexte = Contexte::Operateur;
            Tok::Op(op)
        }
        None => Tok::Num(mot),
    };

    trace!(%jeton, "jeton");
    out.push(jeton);
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
