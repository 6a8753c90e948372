// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreur::ErreurEval;
use super::nombre::Valeur;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Valeur),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,

    // Produits seulement par to_rpn (moins / plus unaires)
    Neg,
    Pos,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12) ; pas de zéro en tête sauf “0”, “00”…
/// - réels (ex: 1.5, .5, 5., 1e5, 2.5E-3)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces et tabulations ignorés
///
/// Tout le reste (lettres, %, ^, …) est refusé.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == ' ' || c == '\t' {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(tok);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (valeur, fin) = lire_litteral(&chars, i)?;
            out.push(Tok::Num(valeur));
            i = fin;
            continue;
        }

        return Err(ErreurEval::invalide(format!("caractère inattendu '{c}'")));
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `debut`. Retourne (valeur, indice de fin).
fn lire_litteral(chars: &[char], debut: usize) -> Result<(Valeur, usize), ErreurEval> {
    let avance_chiffres = |mut j: usize| {
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    let mut i = avance_chiffres(debut);
    let nb_entiers = i - debut;
    let mut reel = false;

    if i < chars.len() && chars[i] == '.' {
        reel = true;
        let apres = avance_chiffres(i + 1);
        if nb_entiers == 0 && apres == i + 1 {
            return Err(ErreurEval::invalide("point décimal isolé"));
        }
        i = apres;
    }

    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        let fin_exposant = avance_chiffres(j);
        if fin_exposant == j {
            return Err(ErreurEval::invalide("exposant incomplet"));
        }
        reel = true;
        i = fin_exposant;
    }

    // “1.2.3”, “12abc”, “1_000” : littéral collé à autre chose
    if i < chars.len() && (chars[i] == '.' || chars[i].is_alphanumeric() || chars[i] == '_') {
        return Err(ErreurEval::invalide("littéral numérique invalide"));
    }

    let texte: String = chars[debut..i].iter().collect();

    let valeur = if reel {
        let x = texte
            .parse::<f64>()
            .map_err(|_| ErreurEval::invalide(format!("réel invalide « {texte} »")))?;
        Valeur::Reel(x)
    } else {
        if texte.len() > 1 && texte.starts_with('0') && texte.chars().any(|c| c != '0') {
            return Err(ErreurEval::invalide("zéro en tête d’un entier"));
        }
        let n = BigInt::parse_bytes(texte.as_bytes(), 10)
            .ok_or_else(|| ErreurEval::invalide(format!("entier invalide « {texte} »")))?;
        Valeur::Entier(n)
    };

    Ok((valeur, i))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => v.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),

            Tok::Neg => "neg".to_string(),
            Tok::Pos => "pos".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
