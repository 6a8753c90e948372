// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Champ d’entrée : Enter évalue (quand le champ a le focus)
// - Pavé : 7 8 9 / | 4 5 6 * | 1 2 3 - | 0 . = +
// - Fonctions : x²  √½  %  ^
// - Contrôles : Effacer  Historique  Quitter
// - Fenêtres : invite d’exposant, historique

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::OpUnaire;

/// Taille d’une touche du pavé.
const TOUCHE: [f32; 2] = [64.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(6.0);
        self.ui_messages(ui);

        let ctx = ui.ctx().clone();
        self.ui_dialogue_exposant(&ctx);
        self.ui_historique(&ctx);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Heading)
                .id_salt("entree_edit"),
        );

        // Si on a cliqué un bouton, on redonne le focus (sauf invite ouverte)
        if self.focus_entree && self.dialogue_exposant.is_none() {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue (seulement si le champ avait le focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter && (resp.has_focus() || resp.lost_focus()) && self.dialogue_exposant.is_none() {
            self.action_egal();
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in [["7", "8", "9", "/"], ["4", "5", "6", "*"], ["1", "2", "3", "-"]] {
                    for t in rangee {
                        self.bouton_insert(ui, t);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                if Self::touche(ui, "=") {
                    self.action_egal();
                }
                self.bouton_insert(ui, "+");
                ui.end_row();

                if Self::touche(ui, "x²") {
                    self.action_unaire(OpUnaire::Carre);
                }
                if Self::touche(ui, "√½") {
                    self.action_unaire(OpUnaire::RacineCarree);
                }
                if Self::touche(ui, "%") {
                    self.action_unaire(OpUnaire::Pourcentage);
                }
                if Self::touche(ui, "^") {
                    self.action_puissance();
                }
                ui.end_row();
            });

        ui.horizontal(|ui| {
            if ui.add_sized([96.0, 36.0], egui::Button::new("Effacer")).clicked() {
                self.clear_entree();
            }
            if ui.add_sized([96.0, 36.0], egui::Button::new("Historique")).clicked() {
                self.action_historique();
            }
            if ui.add_sized([96.0, 36.0], egui::Button::new("Quitter")).clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn ui_messages(&self, ui: &mut egui::Ui) {
        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
        if !self.avis.is_empty() {
            ui.colored_label(ui.visuals().warn_fg_color, &self.avis);
        }
    }

    fn ui_dialogue_exposant(&mut self, ctx: &egui::Context) {
        let Some(dialogue) = self.dialogue_exposant.as_mut() else {
            return;
        };

        let mut valider = false;
        let mut annuler = false;

        egui::Window::new("Exposant")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Base : {}", dialogue.base));
                ui.label("Entrez l’exposant :");

                let resp = ui.add(
                    egui::TextEdit::singleline(&mut dialogue.saisie).id_salt("exposant_edit"),
                );
                resp.request_focus();
                if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    valider = true;
                }

                if !dialogue.erreur.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &dialogue.erreur);
                }

                ui.horizontal(|ui| {
                    valider |= ui.button("OK").clicked();
                    annuler |= ui.button("Annuler").clicked();
                });
            });

        if annuler {
            self.annuler_exposant();
        } else if valider {
            self.valider_exposant();
        }
    }

    fn ui_historique(&mut self, ctx: &egui::Context) {
        let Some(lignes) = &self.historique else {
            return;
        };

        let mut ouvert = true;
        egui::Window::new("Historique")
            .open(&mut ouvert)
            .collapsible(false)
            .default_size([300.0, 260.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if lignes.is_empty() {
                            ui.label("(Aucun historique pour l’instant)");
                        }
                        for l in lignes {
                            ui.monospace(l);
                        }
                    });
            });

        if !ouvert {
            self.fermer_historique();
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, t: &str) {
        if Self::touche(ui, t) {
            self.inserer(t);
        }
    }

    fn touche(ui: &mut egui::Ui, label: &str) -> bool {
        ui.add_sized(TOUCHE, egui::Button::new(label)).clicked()
    }
}
