// src/config.rs
//
// Configuration : seulement le chemin de l’historique.
// - défaut : "history.txt" dans le dossier courant
// - CALCULATRICE_HISTORIQUE=<chemin> le remplace (valeur vide ignorée)

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::noyau::FICHIER_HISTORIQUE_DEFAUT;

/// Variable d’environnement qui remplace le chemin de l’historique.
pub const VAR_CHEMIN_HISTORIQUE: &str = "CALCULATRICE_HISTORIQUE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub chemin_historique: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chemin_historique: PathBuf::from(FICHIER_HISTORIQUE_DEFAUT),
        }
    }
}

impl Config {
    pub fn depuis_env() -> Self {
        Self::depuis_valeur(env::var_os(VAR_CHEMIN_HISTORIQUE))
    }

    fn depuis_valeur(valeur: Option<OsString>) -> Self {
        match valeur {
            Some(v) if !v.is_empty() => Self {
                chemin_historique: PathBuf::from(v),
            },
            _ => Self::default(),
        }
    }
}
