// src/noyau/historique.rs
//
// Historique persistant : un fichier texte, une entrée par ligne, en ajout seul.
// - ajouter : crée le fichier (et son dossier) au besoin, écrit la ligne d’un coup, synchronise
// - charger_tout : toutes les lignes dans l’ordre d’écriture ; fichier absent => liste vide
//   (la lecture ne crée jamais le fichier)

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use super::erreur::ErreurHistorique;

/// Nom du fichier par défaut (relatif au dossier courant).
pub const FICHIER_HISTORIQUE_DEFAUT: &str = "history.txt";

#[derive(Debug)]
pub struct Historique {
    chemin: PathBuf,
    // sérialise les ajouts (plusieurs écrivains possibles)
    verrou: Mutex<()>,
}

impl Historique {
    pub fn new(chemin: impl Into<PathBuf>) -> Self {
        Self {
            chemin: chemin.into(),
            verrou: Mutex::new(()),
        }
    }

    pub fn chemin(&self) -> &Path {
        &self.chemin
    }

    /// Ajoute une entrée (suivie d’un saut de ligne).
    pub fn ajouter(&self, entree: &str) -> Result<(), ErreurHistorique> {
        if entree.contains(['\n', '\r']) {
            return Err(ErreurHistorique::EntreeMultiligne);
        }

        let _garde = self.verrou.lock().unwrap_or_else(PoisonError::into_inner);

        self.ecrire_ligne(entree)
            .map_err(|source| ErreurHistorique::Ecriture {
                chemin: self.chemin.clone(),
                source,
            })?;

        debug!(chemin = %self.chemin.display(), entree, "historique : entrée ajoutée");
        Ok(())
    }

    fn ecrire_ligne(&self, entree: &str) -> io::Result<()> {
        if let Some(dossier) = self.chemin.parent() {
            if !dossier.as_os_str().is_empty() {
                fs::create_dir_all(dossier)?;
            }
        }

        let mut ligne = String::with_capacity(entree.len() + 1);
        ligne.push_str(entree);
        ligne.push('\n');

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.chemin)?;
        f.write_all(ligne.as_bytes())?;
        f.sync_data()
    }

    /// Toutes les entrées, de la plus ancienne à la plus récente.
    pub fn charger_tout(&self) -> Result<Vec<String>, ErreurHistorique> {
        let erreur_lecture = |source| ErreurHistorique::Lecture {
            chemin: self.chemin.clone(),
            source,
        };

        let f = match File::open(&self.chemin) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(erreur_lecture(e)),
        };

        // lines() retire "\n" et "\r\n"
        BufReader::new(f)
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .map_err(erreur_lecture)
    }
}
