// src/app/actions.rs
//
// Actions déclenchées par les boutons : appel au noyau, puis dépôt dans l’état.
// Aucune dépendance à egui ici (testable sans fenêtre).

use tracing::warn;

use super::etat::{AppCalc, DialogueExposant};
use crate::noyau::{lire_nombre, OpUnaire};

impl AppCalc {
    /// "=" / Enter. Entrée blanche : rien ne se passe.
    pub fn action_egal(&mut self) {
        match self.calculatrice.calculer(&self.entree) {
            Ok(Some(r)) => self.set_resultat(&r),
            Ok(None) => {}
            Err(e) => self.set_erreur(&e),
        }
    }

    /// x², √½, %.
    pub fn action_unaire(&mut self, op: OpUnaire) {
        match self.calculatrice.appliquer(op, &self.entree) {
            Ok(r) => self.set_resultat(&r),
            Err(e) => self.set_erreur(&e),
        }
    }

    /// "^" : valide la base, puis ouvre l’invite d’exposant.
    pub fn action_puissance(&mut self) {
        match lire_nombre(&self.entree) {
            Ok(_) => {
                self.erreur.clear();
                self.dialogue_exposant = Some(DialogueExposant {
                    base: self.entree.trim().to_string(),
                    ..Default::default()
                });
            }
            Err(e) => self.set_erreur(&e),
        }
    }

    /// "OK" dans l’invite. Exposant illisible : l’invite reste ouverte avec un message.
    pub fn valider_exposant(&mut self) {
        let Some(mut dialogue) = self.dialogue_exposant.take() else {
            return;
        };

        let exposant = match lire_nombre(&dialogue.saisie) {
            Ok(x) => x,
            Err(e) => {
                dialogue.erreur = e.to_string();
                self.dialogue_exposant = Some(dialogue);
                return;
            }
        };

        match self.calculatrice.puissance(&dialogue.base, Some(exposant)) {
            Ok(Some(r)) => self.set_resultat(&r),
            Ok(None) => {}
            Err(e) => self.set_erreur(&e),
        }
    }

    /// "Annuler" dans l’invite : aucune opération.
    pub fn annuler_exposant(&mut self) {
        self.dialogue_exposant = None;
        self.focus_entree = true;
    }

    /// "Historique" : relit tout le fichier.
    pub fn action_historique(&mut self) {
        match self.calculatrice.lister_historique() {
            Ok(lignes) => self.historique = Some(lignes),
            Err(e) => {
                warn!(erreur = %e, "lecture de l’historique");
                self.avis = e.to_string();
            }
        }
    }
}
