//! Noyau — évaluation (fonctions pures, sans E/S)
//!
//! - expression : tokenize -> RPN -> valeur (grammaire restreinte : nombres, + - * / ( ))
//! - unaires    : x², √ (puissance ½), %
//! - puissance  : base saisie + exposant fourni par l’UI (invite)
//!
//! Chaque succès produit un `Calcul` : la valeur + sa ligne d’historique.

use tracing::debug;

use super::erreur::ErreurEval;
use super::format::format_reel;
use super::jetons::{format_tokens, tokenize};
use super::nombre::Valeur;
use super::rpn::{eval_rpn, to_rpn};

/// Opérations à un seul nombre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Carre,
    RacineCarree,
    Pourcentage,
}

impl OpUnaire {
    /// Suffixe écrit après l’entrée dans l’historique.
    fn suffixe(self) -> &'static str {
        match self {
            OpUnaire::Carre => "^2",
            OpUnaire::RacineCarree => "^(1/2)",
            OpUnaire::Pourcentage => "%",
        }
    }
}

/// Résultat d’une opération réussie.
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub valeur: Valeur,
    /// Ligne d’historique : "<expr> = <résultat>" (avec suffixe éventuel).
    pub ligne: String,
}

impl Calcul {
    fn new(operande: &str, valeur: Valeur) -> Self {
        let ligne = format!("{operande} = {valeur}");
        Self { valeur, ligne }
    }

    /// Texte à remettre dans l’affichage.
    pub fn affichage(&self) -> String {
        self.valeur.to_string()
    }
}

/// Expression de base. Entrée vide (ou blanche) : `Ok(None)`, rien à faire.
pub fn evaluer_expression(texte: &str) -> Result<Option<Calcul>, ErreurEval> {
    let s = texte.trim();
    if s.is_empty() {
        return Ok(None);
    }

    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    debug!(expr = s, rpn = %format_tokens(&rpn), "évaluation");

    let valeur = eval_rpn(&rpn)?;
    Ok(Some(Calcul::new(s, valeur)))
}

/// x², √ ou % sur un nombre seul.
pub fn evaluer_unaire(op: OpUnaire, texte: &str) -> Result<Calcul, ErreurEval> {
    let s = texte.trim();
    let x = lire_nombre(s)?;

    let r = match op {
        OpUnaire::Carre => puissance_reelle(x, 2.0)?,
        OpUnaire::RacineCarree => {
            if x < 0.0 {
                return Err(ErreurEval::RacineNegative);
            }
            puissance_reelle(x, 0.5)?
        }
        OpUnaire::Pourcentage => x / 100.0,
    };
    debug!(?op, entree = s, resultat = r, "opération unaire");

    Ok(Calcul::new(&format!("{s}{}", op.suffixe()), Valeur::Reel(r)))
}

/// base^exposant ; la ligne d’historique affiche base et exposant comme réels ("2.0^10.0").
pub fn evaluer_puissance(base_texte: &str, exposant: f64) -> Result<Calcul, ErreurEval> {
    let base = lire_nombre(base_texte)?;
    let r = puissance_reelle(base, exposant)?;
    debug!(base, exposant, resultat = r, "puissance");

    let operande = format!("{}^{}", format_reel(base), format_reel(exposant));
    Ok(Calcul::new(&operande, Valeur::Reel(r)))
}

/// Un nombre réel seul (syntaxe flottante standard, inf/nan compris).
/// Les séparateurs `_` sont admis entre deux chiffres : "1_000" => 1000.0.
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurEval> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }
    sans_separateurs(s)
        .and_then(|chiffres| chiffres.parse::<f64>().ok())
        .ok_or_else(|| ErreurEval::NombreInvalide(s.to_string()))
}

/// Retire les `_` placés entre deux chiffres ; `None` si un `_` est mal placé.
fn sans_separateurs(s: &str) -> Option<String> {
    let octets = s.as_bytes();
    let mut sortie = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        if c != '_' {
            sortie.push(c);
            continue;
        }
        let avant = i.checked_sub(1).map(|j| octets[j]);
        let apres = octets.get(i + 1).copied();
        match (avant, apres) {
            (Some(a), Some(b)) if a.is_ascii_digit() && b.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(sortie)
}

/// Puissance réelle. Refuse ce qui n’a pas de valeur réelle finie :
/// - 0 ^ (négatif)
/// - (négatif) ^ (non entier)
/// - dépassement vers l’infini à partir d’opérandes finis
fn puissance_reelle(base: f64, exposant: f64) -> Result<f64, ErreurEval> {
    if base.is_finite() && exposant.is_finite() {
        if base == 0.0 && exposant < 0.0 {
            return Err(ErreurEval::DomainePuissance);
        }
        if base < 0.0 && exposant.fract() != 0.0 {
            return Err(ErreurEval::DomainePuissance);
        }
    }

    let r = base.powf(exposant);
    if r.is_infinite() && base.is_finite() && exposant.is_finite() {
        return Err(ErreurEval::DomainePuissance);
    }
    Ok(r)
}
