//! Tests scientifiques (campagne) : propriétés arithmétiques + persistance.
//!
//! - a op b (op ∈ + - * /) : résultat arithmétique exact (entiers) ou IEEE (réels)
//! - historique : la relecture rend exactement les lignes produites, dans l’ordre,
//!   y compris après un “redémarrage” (nouvelle instance sur le même fichier)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::TempDir;

use super::eval::evaluer_expression;
use super::nombre::Valeur;
use super::{Calculatrice, ErreurEval, Historique, OpUnaire};

fn valeur(expr: &str) -> Valeur {
    evaluer_expression(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .unwrap_or_else(|| panic!("expr={expr:?} : aucun résultat"))
        .valeur
}

/// `q` est le réel le plus proche du quotient exact a/b : aucun de ses deux voisins
/// immédiats n’en est strictement plus près.
fn plus_proche(q: f64, a: i64, b: i64) -> bool {
    let exact = BigRational::new(BigInt::from(a), BigInt::from(b));
    let ecart = |x: f64| {
        BigRational::from_float(x)
            .map(|r| (r - &exact).abs())
            .expect("réel fini")
    };
    if q == 0.0 {
        return a == 0;
    }
    let d = ecart(q);
    [q.to_bits() - 1, q.to_bits() + 1]
        .into_iter()
        .map(f64::from_bits)
        .all(|voisin| ecart(voisin) >= d)
}

proptest! {
    #[test]
    fn entiers_add_sub_mul(a in any::<i64>(), b in any::<i64>()) {
        let (ga, gb) = (BigInt::from(a), BigInt::from(b));
        prop_assert_eq!(valeur(&format!("{a} + {b}")), Valeur::Entier(&ga + &gb));
        prop_assert_eq!(valeur(&format!("{a} - {b}")), Valeur::Entier(&ga - &gb));
        prop_assert_eq!(valeur(&format!("{a} * {b}")), Valeur::Entier(&ga * &gb));
    }

    #[test]
    fn entiers_division(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let Valeur::Reel(q) = valeur(&format!("{a} / {b}")) else {
            panic!("{a} / {b} : quotient non réel");
        };
        prop_assert!(plus_proche(q, a, b), "{a} / {b} => {q:?}");
    }

    #[test]
    fn reels_quatre_operations(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        prop_assert_eq!(valeur(&format!("{a:?} + {b:?}")), Valeur::Reel(a + b));
        prop_assert_eq!(valeur(&format!("{a:?} - {b:?}")), Valeur::Reel(a - b));
        prop_assert_eq!(valeur(&format!("{a:?} * {b:?}")), Valeur::Reel(a * b));
        if b != 0.0 {
            prop_assert_eq!(valeur(&format!("{a:?} / {b:?}")), Valeur::Reel(a / b));
        }
    }

    #[test]
    fn affichage_reinjectable(a in -1.0e20f64..1.0e20, b in 1.0f64..1.0e3) {
        // le résultat affiché peut être resaisi tel quel
        let r = valeur(&format!("{a:?} / {b:?}"));
        prop_assert_eq!(valeur(&r.to_string()), r);
    }

    #[test]
    fn historique_aller_retour(ops in proptest::collection::vec((0u8..5, 1u32..1000), 0..20)) {
        let dir = TempDir::new().unwrap();
        let chemin = dir.path().join("history.txt");

        let mut produites = Vec::new();
        {
            let c = Calculatrice::new(Historique::new(&chemin));
            for (genre, n) in &ops {
                let r = match genre {
                    0 => c.calculer(&format!("{n}*2+1")).unwrap().unwrap(),
                    1 => c.appliquer(OpUnaire::Carre, &n.to_string()).unwrap(),
                    2 => c.appliquer(OpUnaire::RacineCarree, &n.to_string()).unwrap(),
                    3 => c.appliquer(OpUnaire::Pourcentage, &n.to_string()).unwrap(),
                    _ => c.puissance(&n.to_string(), Some(0.5)).unwrap().unwrap(),
                };
                prop_assert!(r.echec_historique.is_none());
                produites.push(r.calcul.ligne);
            }
            prop_assert_eq!(c.lister_historique().unwrap(), produites.clone());
        }

        // “redémarrage”
        let c = Calculatrice::new(Historique::new(&chemin));
        prop_assert_eq!(c.lister_historique().unwrap(), produites);
    }
}

/* ------------------------ Cas de référence ------------------------ */

#[test]
fn sci_lignes_de_reference() {
    let dir = TempDir::new().unwrap();
    let c = Calculatrice::new(Historique::new(dir.path().join("history.txt")));

    assert_eq!(c.appliquer(OpUnaire::Carre, "4").unwrap().calcul.ligne, "4^2 = 16.0");
    assert_eq!(
        c.appliquer(OpUnaire::RacineCarree, "9").unwrap().calcul.ligne,
        "9^(1/2) = 3.0"
    );
    assert_eq!(c.appliquer(OpUnaire::Pourcentage, "5").unwrap().calcul.ligne, "5% = 0.05");
    assert_eq!(
        c.puissance("2", Some(3.0)).unwrap().unwrap().calcul.ligne,
        "2.0^3.0 = 8.0"
    );
}

#[test]
fn sci_priorites_et_unaires() {
    assert_eq!(valeur("2+3*4"), Valeur::from(14));
    assert_eq!(valeur("(2+3)*4"), Valeur::from(20));
    assert_eq!(valeur("2*-3"), Valeur::from(-6));
    assert_eq!(valeur("-(1+2)*3"), Valeur::from(-9));
    assert_eq!(valeur("10-4-3"), Valeur::from(3));
    assert_eq!(valeur("12/4/3"), Valeur::Reel(1.0));
    assert_eq!(valeur("1.5+1.5"), Valeur::Reel(3.0));
}

#[test]
fn sci_formes_python_refusees() {
    for s in ["2(3)", "1.2.3", "012", "2**3", "7//2", "abs(1)", "1e"] {
        assert!(
            matches!(evaluer_expression(s), Err(ErreurEval::ExpressionInvalide(_))),
            "s={s:?}"
        );
    }
}

#[test]
fn sci_division_par_zero_partout() {
    for s in ["5/0", "0/0", "1/(2-2)", "1.5/0.0", "3/-0", "(1+1)/(0*7)"] {
        assert_eq!(evaluer_expression(s), Err(ErreurEval::DivisionParZero), "s={s:?}");
    }
}
