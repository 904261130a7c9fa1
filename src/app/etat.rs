//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, curseur, résultat, réglages
//! d’affichage) et offrir les actions du pavé sans logique de dessin.
//!
//! Contrats :
//! - Une seule évaluation ici : `egal()` délègue au noyau.
//! - Toute modification de l’entrée efface le résultat affiché.
//! - Le curseur est un indice en caractères (pas en octets) : × et ÷ font 2 octets.

use tracing::debug;

use super::animation::Animations;
use crate::noyau::{calculate, formater_resultat, Operateur};
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    /// Point d’insertion (indice caractère). None => fin de l’entrée.
    pub curseur: Option<usize>,

    // --- sortie ---
    pub resultat: String,

    // --- paramètres ---
    pub decimales: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur une touche.
    pub focus_entree: bool,
    // vue.rs doit réécrire le curseur egui après une action du pavé
    pub curseur_modifie: bool,
    pub animations: Animations,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(&Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: &Reglages) -> Self {
        Self {
            entree: String::new(),
            curseur: None,
            resultat: String::new(),
            decimales: reglages.decimales,
            focus_entree: true,
            curseur_modifie: false,
            animations: Animations::new(reglages.animations),
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    /// Touche chiffre 0–9.
    pub fn chiffre(&mut self, c: char) {
        let mut tampon = [0u8; 4];
        self.inserer(c.encode_utf8(&mut tampon));
    }

    /// Touche opérateur : refusée si l’entrée est vide ou finit déjà par un opérateur.
    pub fn operateur(&mut self, op: Operateur) -> bool {
        if self.entree.is_empty() || self.entree.ends_with(' ') {
            return false;
        }
        self.inserer(&format!(" {} ", op.symbole()));
        true
    }

    /// DEL : retire un opérateur complet (" + ") ou un seul caractère.
    pub fn retour_arriere(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        let a_retirer = if self.entree.ends_with(' ') { 3 } else { 1 };
        for _ in 0..a_retirer {
            if self.entree.pop().is_none() {
                break;
            }
        }

        self.placer_curseur_fin();
        self.resultat.clear();
    }

    /// C : remise à zéro totale (entrée + résultat).
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.placer_curseur_fin();
        self.resultat.clear();
    }

    /// "=" : évalue l’entrée. Renvoie false si l’entrée est vide (rien à faire).
    pub fn egal(&mut self) -> bool {
        if self.entree.is_empty() {
            return false;
        }
        let valeur = calculate(&self.entree);
        self.resultat = formater_resultat(valeur, self.decimales);
        debug!(entree = %self.entree, valeur, resultat = %self.resultat, "évaluation");
        self.focus_entree = true;
        true
    }

    /// Saisie directe dans le champ (clavier physique) : le résultat n’est plus à jour.
    pub fn edition_manuelle(&mut self) {
        self.resultat.clear();
    }

    /* ------------------------ Utilitaires ------------------------ */

    /// Insère `texte` au curseur (ou en fin), avance le curseur, efface le résultat.
    fn inserer(&mut self, texte: &str) {
        let nb_car = self.entree.chars().count();
        let pos = self.curseur.unwrap_or(nb_car).min(nb_car);

        let octet = self
            .entree
            .char_indices()
            .nth(pos)
            .map_or(self.entree.len(), |(i, _)| i);
        self.entree.insert_str(octet, texte);

        self.curseur = Some(pos + texte.chars().count());
        self.curseur_modifie = true;
        self.resultat.clear();
        self.focus_entree = true;
    }

    fn placer_curseur_fin(&mut self) {
        self.curseur = Some(self.entree.chars().count());
        self.curseur_modifie = true;
        self.focus_entree = true;
    }
}

impl From<&Reglages> for AppCalc {
    fn from(r: &Reglages) -> Self {
        Self::avec_reglages(r)
    }
}
