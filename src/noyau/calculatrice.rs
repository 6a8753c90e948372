// src/noyau/calculatrice.rs
//
// Façade du noyau pour l’UI : évaluer, puis consigner dans l’historique.
//
// Contrats :
// - un succès => exactement une ligne ajoutée ; un échec ou une annulation => aucune
// - un échec d’écriture de l’historique n’empêche jamais de rendre le résultat

use tracing::warn;

use super::erreur::{ErreurEval, ErreurHistorique};
use super::eval::{
    evaluer_expression, evaluer_puissance, evaluer_unaire, lire_nombre, Calcul, OpUnaire,
};
use super::historique::Historique;

/// Un calcul réussi, et l’éventuel échec de sa mise en historique.
#[derive(Debug)]
pub struct Resultat {
    pub calcul: Calcul,
    pub echec_historique: Option<ErreurHistorique>,
}

impl Resultat {
    pub fn affichage(&self) -> String {
        self.calcul.affichage()
    }
}

#[derive(Debug)]
pub struct Calculatrice {
    historique: Historique,
}

impl Calculatrice {
    pub fn new(historique: Historique) -> Self {
        Self { historique }
    }

    /// Touche "=" : entrée blanche => `Ok(None)`, rien n’est consigné.
    pub fn calculer(&self, texte: &str) -> Result<Option<Resultat>, ErreurEval> {
        Ok(evaluer_expression(texte)?.map(|c| self.consigner(c)))
    }

    /// Touches x², √½, %.
    pub fn appliquer(&self, op: OpUnaire, texte: &str) -> Result<Resultat, ErreurEval> {
        let calcul = evaluer_unaire(op, texte)?;
        Ok(self.consigner(calcul))
    }

    /// Touche "^". La base est validée avant tout ; `exposant == None` (invite annulée)
    /// => `Ok(None)` : aucun calcul, rien n’est consigné.
    pub fn puissance(
        &self,
        base: &str,
        exposant: Option<f64>,
    ) -> Result<Option<Resultat>, ErreurEval> {
        lire_nombre(base)?;
        let Some(exposant) = exposant else {
            return Ok(None);
        };
        let calcul = evaluer_puissance(base, exposant)?;
        Ok(Some(self.consigner(calcul)))
    }

    pub fn enregistrer(&self, ligne: &str) -> Result<(), ErreurHistorique> {
        self.historique.ajouter(ligne)
    }

    pub fn lister_historique(&self) -> Result<Vec<String>, ErreurHistorique> {
        self.historique.charger_tout()
    }

    fn consigner(&self, calcul: Calcul) -> Resultat {
        let echec_historique = match self.enregistrer(&calcul.ligne) {
            Ok(()) => None,
            Err(e) => {
                warn!(erreur = %e, ligne = %calcul.ligne, "historique non enregistré");
                Some(e)
            }
        };
        Resultat {
            calcul,
            echec_historique,
        }
    }
}
