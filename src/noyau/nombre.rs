// src/noyau/nombre.rs
//
// Valeur numérique d’un calcul.
// - Entier : exact (BigInt), reste entier pour + - *
// - Reel   : f64, dès qu’un réel intervient ou pour la division
//
// Une division donne toujours un réel : 6/2 => 3.0, 2+3 => 5.
// Entier / entier : le quotient exact est arrondi une seule fois.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurEval;
use super::format::format_reel;

#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Entier(BigInt),
    Reel(f64),
}

impl Valeur {
    /// Conversion vers f64 (un entier trop grand est refusé, pas arrondi à inf).
    pub fn en_reel(&self) -> Result<f64, ErreurEval> {
        match self {
            Valeur::Reel(x) => Ok(*x),
            Valeur::Entier(n) => n
                .to_f64()
                .filter(|x| x.is_finite())
                .ok_or_else(|| ErreurEval::invalide("entier trop grand pour un réel")),
        }
    }

    pub fn est_zero(&self) -> bool {
        match self {
            Valeur::Entier(n) => n.is_zero(),
            Valeur::Reel(x) => *x == 0.0,
        }
    }

    pub fn oppose(self) -> Valeur {
        match self {
            Valeur::Entier(n) => Valeur::Entier(-n),
            Valeur::Reel(x) => Valeur::Reel(-x),
        }
    }

    pub fn additionner(&self, autre: &Valeur) -> Result<Valeur, ErreurEval> {
        if let (Valeur::Entier(a), Valeur::Entier(b)) = (self, autre) {
            return Ok(Valeur::Entier(a + b));
        }
        let (a, b) = self.paire_reelle(autre)?;
        Ok(Valeur::Reel(a + b))
    }

    pub fn soustraire(&self, autre: &Valeur) -> Result<Valeur, ErreurEval> {
        if let (Valeur::Entier(a), Valeur::Entier(b)) = (self, autre) {
            return Ok(Valeur::Entier(a - b));
        }
        let (a, b) = self.paire_reelle(autre)?;
        Ok(Valeur::Reel(a - b))
    }

    pub fn multiplier(&self, autre: &Valeur) -> Result<Valeur, ErreurEval> {
        if let (Valeur::Entier(a), Valeur::Entier(b)) = (self, autre) {
            return Ok(Valeur::Entier(a * b));
        }
        let (a, b) = self.paire_reelle(autre)?;
        Ok(Valeur::Reel(a * b))
    }

    /// Division vraie : toujours un réel. Zéro (entier ou ±0.0) est refusé.
    pub fn diviser(&self, autre: &Valeur) -> Result<Valeur, ErreurEval> {
        if autre.est_zero() {
            return Err(ErreurEval::DivisionParZero);
        }
        if let (Valeur::Entier(a), Valeur::Entier(b)) = (self, autre) {
            return BigRational::new(a.clone(), b.clone())
                .to_f64()
                .filter(|q| q.is_finite())
                .map(Valeur::Reel)
                .ok_or_else(|| ErreurEval::invalide("quotient trop grand pour un réel"));
        }
        let (a, b) = self.paire_reelle(autre)?;
        Ok(Valeur::Reel(a / b))
    }

    fn paire_reelle(&self, autre: &Valeur) -> Result<(f64, f64), ErreurEval> {
        Ok((self.en_reel()?, autre.en_reel()?))
    }
}

impl fmt::Display for Valeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valeur::Entier(n) => write!(f, "{n}"),
            Valeur::Reel(x) => f.write_str(&format_reel(*x)),
        }
    }
}

impl From<f64> for Valeur {
    fn from(x: f64) -> Self {
        Valeur::Reel(x)
    }
}

impl From<i64> for Valeur {
    fn from(n: i64) -> Self {
        Valeur::Entier(BigInt::from(n))
    }
}
