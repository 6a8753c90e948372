// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Le texte `Display` est directement le message montré à l’utilisateur.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Échec d’une évaluation (toujours récupérable côté UI).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("Entrez d’abord un nombre.")]
    EntreeVide,

    #[error("Nombre invalide : « {0} ».")]
    NombreInvalide(String),

    #[error("Expression invalide : {0}.")]
    ExpressionInvalide(String),

    #[error("Division par zéro impossible.")]
    DivisionParZero,

    #[error("Racine carrée d’une valeur négative impossible.")]
    RacineNegative,

    #[error("Puissance non définie dans les réels.")]
    DomainePuissance,
}

impl ErreurEval {
    pub(crate) fn invalide(raison: impl Into<String>) -> Self {
        Self::ExpressionInvalide(raison.into())
    }
}

/// Échec de persistance de l’historique (jamais bloquant pour le résultat).
#[derive(Error, Debug)]
pub enum ErreurHistorique {
    #[error("écriture de l’historique impossible ({}) : {source}", .chemin.display())]
    Ecriture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("lecture de l’historique impossible ({}) : {source}", .chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("entrée d’historique refusée : une entrée tient sur une seule ligne")]
    EntreeMultiligne,
}
