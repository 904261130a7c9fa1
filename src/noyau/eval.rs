//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> premier nombre -> paires (opérateur, opérande) -> repli gauche-à-droite
//!
//! Aucune priorité : "2 + 3 × 4" vaut (2+3)×4 = 20.

use tracing::debug;

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, lire_nombre, tokenize, Operateur};

/// Valeur de repli : toute expression illisible vaut 0.
pub const REPLI: f64 = 0.0;

/// API publique : évalue une expression, 0.0 sur n’importe quel échec.
///
/// Ne panique jamais. Un vrai zéro et une expression invalide donnent
/// la même sortie ; utiliser `try_calculate` pour les distinguer.
pub fn calculate(expression: &str) -> f64 {
    match try_calculate(expression) {
        Ok(v) => v,
        Err(e) => {
            debug!(%expression, erreur = %e, "évaluation repliée sur 0");
            REPLI
        }
    }
}

/// Même algorithme que `calculate`, avec la cause de l’échec.
pub fn try_calculate(expression: &str) -> Result<f64, ErreurCalcul> {
    let jetons = tokenize(expression);
    debug!(jetons = %format_tokens(&jetons), "jetons");

    if jetons.len() < 3 {
        return Err(ErreurCalcul::TropPeuDeJetons {
            nombre: jetons.len(),
        });
    }

    let mut resultat = lire_nombre(jetons[0], 0)?;

    let mut i = 1;
    while i < jetons.len() {
        // L’opérande est lue AVANT d’examiner l’opérateur :
        // "2 ? abc" échoue même si "?" est ignoré.
        let suivant = jetons
            .get(i + 1)
            .ok_or(ErreurCalcul::OperandeManquante { position: i + 1 })?;
        let suivant = lire_nombre(suivant, i + 1)?;

        resultat = match Operateur::depuis_symbole(jetons[i]) {
            Some(op) => op.appliquer(resultat, suivant),
            None => {
                debug!(operateur = jetons[i], position = i, "opérateur inconnu ignoré");
                resultat
            }
        };

        i += 2;
    }

    Ok(resultat)
}
