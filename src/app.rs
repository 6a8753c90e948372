// src/app.rs
//
// Calculatrice — module App (racine)
// ---------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + actions.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App
//
// La gestion de Enter est faite dans vue.rs (quand le champ a le focus).

pub mod actions;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer l’entrée (comme le bouton "Effacer"), sauf si l’invite
        // d’exposant est ouverte : là, ESC l’annule.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            if self.dialogue_exposant.is_some() {
                self.annuler_exposant();
            } else {
                self.clear_entree();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
