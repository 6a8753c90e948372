//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs       : erreurs (évaluation, historique)
//! - nombre.rs       : Valeur (entier exact / réel) + arithmétique
//! - format.rs       : affichage brut des réels
//! - jetons.rs       : tokenisation (grammaire restreinte)
//! - rpn.rs          : shunting-yard + évaluation RPN
//! - eval.rs         : opérations (expression, x², √, %, puissance)
//! - historique.rs   : fichier d’historique en ajout seul
//! - calculatrice.rs : façade (évaluer puis consigner)
//!
//! Aucun état global : tout l’état d’affichage appartient à l’UI.

pub mod calculatrice;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod nombre;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::{Calculatrice, Resultat};
pub use erreur::ErreurEval;
pub use eval::{lire_nombre, OpUnaire};
pub use historique::{Historique, FICHIER_HISTORIQUE_DEFAUT};
