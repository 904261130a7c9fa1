//! src/reglages.rs
//!
//! Réglages utilisateur (fichier TOML optionnel, natif seulement).
//!
//! Contrats :
//! - Fichier absent => valeurs par défaut, sans bruit.
//! - Fichier illisible / invalide => avertissement + valeurs par défaut.
//! - Jamais bloquant pour le lancement.

use serde::Deserialize;

use crate::noyau::DECIMALES_DEFAUT;

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs à montrer.
const DECIMALES_MAX: usize = 12;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Décimales affichées pour un résultat non entier.
    pub decimales: usize,
    /// false => tout est dessiné au repos (pas d’entrée/pression/fondu).
    pub animations: bool,
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            animations: true,
            largeur: 360.0,
            hauteur: 600.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErreurReglages {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("lecture de {} impossible : {source}", chemin.display())]
    Lecture {
        chemin: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages invalides : {0}")]
    Syntaxe(#[from] toml::de::Error),
}

impl Reglages {
    /// Analyse un contenu TOML ; les bornes sont appliquées après lecture.
    pub fn depuis_toml(contenu: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = toml::from_str(contenu)?;
        Ok(r.borne())
    }

    fn borne(mut self) -> Self {
        self.decimales = self.decimales.min(DECIMALES_MAX);
        if !(self.largeur.is_finite() && self.largeur > 0.0) {
            self.largeur = Reglages::default().largeur;
        }
        if !(self.hauteur.is_finite() && self.hauteur > 0.0) {
            self.hauteur = Reglages::default().hauteur;
        }
        self
    }
}

/* ------------------------ Chargement (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod fichier {
    use std::path::{Path, PathBuf};

    use super::{ErreurReglages, Reglages};

    const DOSSIER: &str = "calculatrice-simple";
    const FICHIER: &str = "reglages.toml";

    /// `<config_dir>/calculatrice-simple/reglages.toml`
    pub fn chemin_par_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER).join(FICHIER))
    }

    /// Ok(None) si le fichier n’existe pas.
    pub fn charger(chemin: &Path) -> Result<Option<Reglages>, ErreurReglages> {
        let contenu = match std::fs::read_to_string(chemin) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ErreurReglages::Lecture {
                    chemin: chemin.to_path_buf(),
                    source,
                })
            }
        };
        Reglages::depuis_toml(&contenu).map(Some)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use fichier::{charger, chemin_par_defaut};

/// Réglages effectifs : fichier si présent et valide, sinon défauts.
#[cfg(not(target_arch = "wasm32"))]
pub fn charger_ou_defaut() -> Reglages {
    let Some(chemin) = chemin_par_defaut() else {
        tracing::debug!("pas de dossier de configuration, réglages par défaut");
        return Reglages::default();
    };

    match charger(&chemin) {
        Ok(Some(r)) => {
            tracing::info!(chemin = %chemin.display(), ?r, "réglages chargés");
            r
        }
        Ok(None) => Reglages::default(),
        Err(e) => {
            tracing::warn!(erreur = %e, "réglages ignorés");
            Reglages::default()
        }
    }
}

/// En wasm32 : pas de système de fichiers, toujours les défauts.
#[cfg(target_arch = "wasm32")]
pub fn charger_ou_defaut() -> Reglages {
    Reglages::default()
}
