// src/noyau/format.rs
//
// Affichage “brut” des réels : plus courte écriture qui se relit à l’identique.
// - positionnel si l’exposant décimal est dans [-4, 16) : 16.0, 0.05, 0.0001
// - scientifique sinon : 1e+16, 1.5e-05
// - spéciaux : inf, -inf, nan, -0.0
// Aucun arrondi, aucune précision fixe.

/// Bornes (exposant décimal) de l’écriture positionnelle.
const EXPOSANT_MIN_POSITIONNEL: i32 = -4;
const EXPOSANT_MAX_POSITIONNEL: i32 = 16;

pub fn format_reel(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` donne déjà les chiffres les plus courts : 1.2345e3, 5e-2
    let sci = format!("{:e}", x.abs());
    let Some((mantisse, exposant)) = sci.split_once('e') else {
        return format!("{x:?}");
    };
    let Ok(exposant) = exposant.parse::<i32>() else {
        return format!("{x:?}");
    };
    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();

    let corps = if (EXPOSANT_MIN_POSITIONNEL..EXPOSANT_MAX_POSITIONNEL).contains(&exposant) {
        positionnel(&chiffres, exposant)
    } else {
        scientifique(&chiffres, exposant)
    };

    if x.is_sign_negative() {
        format!("-{corps}")
    } else {
        corps
    }
}

/// d1d2d3… × 10^exposant en écriture positionnelle (au moins une décimale).
fn positionnel(chiffres: &str, exposant: i32) -> String {
    if exposant < 0 {
        let zeros = "0".repeat((-exposant - 1) as usize);
        return format!("0.{zeros}{chiffres}");
    }

    let avant_virgule = (exposant + 1) as usize;
    if chiffres.len() <= avant_virgule {
        let zeros = "0".repeat(avant_virgule - chiffres.len());
        format!("{chiffres}{zeros}.0")
    } else {
        let (entiere, fraction) = chiffres.split_at(avant_virgule);
        format!("{entiere}.{fraction}")
    }
}

fn scientifique(chiffres: &str, exposant: i32) -> String {
    let (tete, reste) = chiffres.split_at(1);
    let signe = if exposant < 0 { '-' } else { '+' };
    let abs = exposant.unsigned_abs();
    if reste.is_empty() {
        format!("{tete}e{signe}{abs:02}")
    } else {
        format!("{tete}.{reste}e{signe}{abs:02}")
    }
}
