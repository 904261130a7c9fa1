// src/noyau/erreur.rs

/// Causes d’échec de l’évaluation.
///
/// Côté public, `calculate` les écrase toutes en 0.0 ; elles ne servent
/// qu’au journal et à `try_calculate`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurCalcul {
    #[error("expression trop courte : {nombre} jeton(s), il en faut au moins 3")]
    TropPeuDeJetons { nombre: usize },

    #[error("nombre invalide en position {position} : {jeton:?}")]
    NombreInvalide { position: usize, jeton: String },

    #[error("opérande manquante en position {position}")]
    OperandeManquante { position: usize },
}
