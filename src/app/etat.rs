//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, erreur, avis, fenêtres ouvertes)
//! et offrir des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (voir actions.rs).
//! - Tout l’état d’affichage vit ici, jamais dans le noyau.

use crate::noyau::{Calculatrice, ErreurEval, Resultat};

/// Invite d’exposant (touche "^") en cours.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogueExposant {
    /// Base validée au moment de l’ouverture.
    pub base: String,
    /// Texte saisi pour l’exposant.
    pub saisie: String,
    /// Message si la saisie n’est pas un nombre (l’invite reste ouverte).
    pub erreur: String,
}

#[derive(Debug)]
pub struct AppCalc {
    // --- entrée / affichage ---
    pub entree: String,

    // --- messages ---
    pub erreur: String, // échec d’évaluation
    pub avis: String,   // historique non enregistré (le résultat reste affiché)

    // --- fenêtres ---
    pub historique: Option<Vec<String>>, // Some(...) = fenêtre "Historique" ouverte
    pub dialogue_exposant: Option<DialogueExposant>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,

    pub(crate) calculatrice: Calculatrice,
}

impl AppCalc {
    pub fn new(calculatrice: Calculatrice) -> Self {
        Self {
            entree: String::new(),
            erreur: String::new(),
            avis: String::new(),
            historique: None,
            dialogue_exposant: None,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            calculatrice,
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Ajoute un chiffre / opérateur à la fin de l’entrée.
    pub fn inserer(&mut self, s: &str) {
        self.entree.push_str(s);
        self.focus_entree = true;
    }

    /// "Effacer" : vide l’entrée et les messages.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.erreur.clear();
        self.avis.clear();
        self.focus_entree = true;
    }

    /// Échec d’évaluation : message + entrée remise à zéro.
    pub fn set_erreur(&mut self, e: &ErreurEval) {
        self.erreur = e.to_string();
        self.avis.clear();
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Succès : le résultat remplace l’entrée ; un échec d’historique devient un avis.
    pub fn set_resultat(&mut self, r: &Resultat) {
        self.entree = r.affichage();
        self.erreur.clear();
        self.avis = match &r.echec_historique {
            Some(e) => format!("Historique non enregistré : {e}"),
            None => String::new(),
        };
        self.focus_entree = true;
    }

    pub fn fermer_historique(&mut self) {
        self.historique = None;
    }
}
