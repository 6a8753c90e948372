// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la forme
// - Puis évaluer la RPN avec une pile (itératif, pas de récursion)
//
// Règles:
// - '+' / '-' quand on attend une valeur => opérateur unaire (Pos / Neg)
// - unaires : priorité au-dessus de * et /, associatifs à droite
// - pas de multiplication implicite : "2(3)", "(1)(2)" sont refusés

use super::erreur::ErreurEval;
use super::jetons::Tok;
use super::nombre::Valeur;

/// Garde-fou : profondeur maximale de parenthèses.
pub const PROFONDEUR_MAX: usize = 200;

fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg | Tok::Pos => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // Au début, et après un opérateur ou '(', on attend une valeur.
    let mut attend_valeur = true;
    let mut profondeur: usize = 0;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurEval::invalide("nombre inattendu"));
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurEval::invalide("parenthèse ouvrante inattendue"));
                }
                profondeur += 1;
                if profondeur > PROFONDEUR_MAX {
                    return Err(ErreurEval::invalide("trop de parenthèses imbriquées"));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(ErreurEval::invalide("parenthèse fermante inattendue"));
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => {
                            return Err(ErreurEval::invalide("parenthèse fermante sans ouvrante"))
                        }
                    }
                }
                profondeur -= 1;
            }

            // unaires : empilés sans rien dépiler (préfixes)
            Tok::Plus if attend_valeur => ops.push(Tok::Pos),
            Tok::Minus if attend_valeur => ops.push(Tok::Neg),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(ErreurEval::invalide("opérateur inattendu"));
                }
                // associativité à gauche : on sort tout ce qui est au moins aussi prioritaire
                while let Some(top) = ops.pop() {
                    if !matches!(top, Tok::LPar) && precedence(&top) >= precedence(&tok) {
                        out.push(top);
                    } else {
                        ops.push(top);
                        break;
                    }
                }
                ops.push(tok);
                attend_valeur = true;
            }

            Tok::Neg | Tok::Pos => return Err(ErreurEval::invalide("jeton interne en entrée")),
        }
    }

    if attend_valeur {
        return Err(ErreurEval::invalide("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::invalide("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN produite par `to_rpn`.
pub fn eval_rpn(rpn: &[Tok]) -> Result<Valeur, ErreurEval> {
    let mut st: Vec<Valeur> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(v.clone()),

            Tok::Neg | Tok::Pos => {
                let x = st.pop().ok_or_else(|| ErreurEval::invalide("opérande manquant"))?;
                st.push(if matches!(tok, Tok::Neg) { x.oppose() } else { x });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(|| ErreurEval::invalide("opérande manquant"))?;
                let a = st.pop().ok_or_else(|| ErreurEval::invalide("opérande manquant"))?;

                let r = match tok {
                    Tok::Plus => a.additionner(&b)?,
                    Tok::Minus => a.soustraire(&b)?,
                    Tok::Star => a.multiplier(&b)?,
                    _ => a.diviser(&b)?,
                };
                st.push(r);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::invalide("parenthèse inattendue en RPN"))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::invalide("expression invalide")),
    }
}
