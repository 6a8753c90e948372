//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique ; tout échec est une erreur classée

use std::time::{Duration, Instant};

use super::eval::{evaluer_expression, evaluer_unaire};
use super::{ErreurEval, OpUnaire};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(1000)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        3 => format!(".{}", rng.pick(10)),
        4 => format!("{}e{}", rng.pick(10), rng.pick(5)),
        _ => format!("{}", rng.pick(10)),
    }
}

fn gen_expr_valide(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 || rng.pick(4) == 0 {
        let n = gen_nombre(rng);
        return if rng.pick(5) == 0 { format!("-{n}") } else { n };
    }

    let a = gen_expr_valide(rng, profondeur - 1);
    let b = gen_expr_valide(rng, profondeur - 1);
    let op = ["+", "-", "*", "/"][rng.pick(4) as usize];

    if rng.coin() {
        format!("({a}){op}({b})")
    } else {
        format!("{a} {op} {b}")
    }
}

/// Soupe de caractères : ce que l’utilisateur peut coller n’importe comment.
fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '(', ')', ' ', 'e', 'E', 'x', '%', '^', '_', 'é',
    ];
    let len = rng.pick(16);
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_expressions_valides_jamais_invalides() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(start, max);
        let s = gen_expr_valide(&mut rng, 4);
        match evaluer_expression(&s) {
            Ok(Some(c)) => {
                // la ligne reprend toujours l’expression telle que saisie
                assert!(c.ligne.starts_with(s.trim()), "s={s:?} ligne={:?}", c.ligne);
            }
            // division par un sous-terme nul : attendu
            Err(ErreurEval::DivisionParZero) => {}
            autre => panic!("s={s:?} => {autre:?}"),
        }
    }
}

#[test]
fn fuzz_soupe_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..5_000 {
        budget(start, max);
        let s = gen_soupe(&mut rng);
        match evaluer_expression(&s) {
            Ok(None) => assert!(s.trim().is_empty(), "s={s:?}"),
            Ok(Some(_)) => {}
            Err(ErreurEval::DivisionParZero) | Err(ErreurEval::ExpressionInvalide(_)) => {}
            Err(autre) => panic!("erreur non attendue pour une expression: s={s:?} => {autre:?}"),
        }
    }
}

#[test]
fn fuzz_unaires_classes() {
    let mut rng = Rng::new(7);

    for _ in 0..2_000 {
        let s = gen_soupe(&mut rng);
        let op = [OpUnaire::Carre, OpUnaire::RacineCarree, OpUnaire::Pourcentage]
            [rng.pick(3) as usize];
        match evaluer_unaire(op, &s) {
            Ok(c) => assert!(c.ligne.contains(" = ")),
            Err(ErreurEval::EntreeVide)
            | Err(ErreurEval::NombreInvalide(_))
            | Err(ErreurEval::RacineNegative)
            | Err(ErreurEval::DomainePuissance) => {}
            Err(autre) => panic!("s={s:?} => {autre:?}"),
        }
    }
}

#[test]
fn determinisme() {
    let mut a = Rng::new(1234);
    let mut b = Rng::new(1234);
    for _ in 0..200 {
        let sa = gen_expr_valide(&mut a, 3);
        let sb = gen_expr_valide(&mut b, 3);
        assert_eq!(sa, sb);
        assert_eq!(evaluer_expression(&sa), evaluer_expression(&sb));
    }
}
