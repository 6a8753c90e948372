// src/main.rs
//
// Calculatrice — fonctions étendues : point d’entrée NATIF
// --------------------------------------------------------
// - Journal       : tracing + EnvFilter (RUST_LOG), défaut "calculatrice_etendue=info"
// - Configuration : chemin de l’historique (CALCULATRICE_HISTORIQUE)
// - Fenêtre       : eframe::run_native + NativeOptions
//
// `impl eframe::App for AppCalc` vit dans src/app.rs ; le calcul dans src/noyau.

use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod noyau;

use app::AppCalc;
use config::Config;
use noyau::{Calculatrice, Historique};

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice — fonctions étendues";

/// Filtre de journal si RUST_LOG est absent ou invalide.
const FILTRE_DEFAUT: &str = "calculatrice_etendue=info";

fn installer_journal() {
    let filtre =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT));
    tracing_subscriber::fmt().with_env_filter(filtre).init();
}

fn main() -> eframe::Result<()> {
    installer_journal();

    let config = Config::depuis_env();
    let historique = Historique::new(config.chemin_historique);
    info!(historique = %historique.chemin().display(), "démarrage");

    let calculatrice = Calculatrice::new(historique);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([340.0, 520.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(calculatrice)))),
    )
}
