//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs   : découpage sur l’espace + opérateurs + lecture numérique
//! - eval.rs     : repli gauche-à-droite (sans priorité)
//! - erreur.rs   : causes d’échec (écrasées en 0.0 côté public)
//! - format.rs   : affichage du résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::calculate;
pub use format::{formater_resultat, DECIMALES_DEFAUT};
pub use jetons::Operateur;
