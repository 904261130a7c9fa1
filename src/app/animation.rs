//! src/app/animation.rs
//!
//! Horloge des animations (sans egui).
//!
//! Rôle : mémoriser quand chaque animation a démarré, et donner pour un instant
//! `t` (secondes, horloge egui `i.time`) l’échelle / l’opacité / le décalage à dessiner.
//!
//! Contrat : fonctions pures du temps ; rien ici ne déclenche de repaint.

use std::collections::HashMap;
use std::f64::consts::PI;

/// Pression d’une touche : aller (0.9) puis retour (1.0), 100 ms chacun.
const PRESSION_DEMI: f64 = 0.100;
const PRESSION_ECHELLE: f32 = 0.9;

/// Apparition du résultat : échelle 0.8 -> 1, opacité 0 -> 1, rebond.
const RESULTAT_DUREE: f64 = 0.300;
const RESULTAT_ECHELLE_DEPART: f32 = 0.8;
const RESULTAT_TENSION: f64 = 2.0;

/// Effacement (C) : fondu de l’entrée puis retour immédiat à 1.
const EFFACEMENT_DUREE: f64 = 0.200;

/// Entrée des touches au lancement (décalées de 30 ms chacune).
const ENTREE_DUREE: f64 = 0.300;
const ENTREE_DECALAGE: f64 = 0.030;
const ENTREE_TRANSLATION: f32 = 50.0;

/* ------------------------ Interpolateurs ------------------------ */

/// Rebond en fin de course (dépasse 1 puis revient).
pub fn overshoot(t: f64, tension: f64) -> f64 {
    let t = t - 1.0;
    t * t * ((tension + 1.0) * t + tension) + 1.0
}

/// Lent au début et à la fin.
pub fn accelere_decelere(t: f64) -> f64 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

fn progression(debut: f64, duree: f64, t: f64) -> f64 {
    ((t - debut) / duree).clamp(0.0, 1.0)
}

fn lerp(a: f32, b: f32, k: f64) -> f32 {
    a + (b - a) * k as f32
}

/* ------------------------ État ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct Animations {
    pub actives: bool,
    lancement: Option<f64>,
    resultat: Option<f64>,
    effacement: Option<f64>,
    pressions: HashMap<&'static str, f64>,
}

impl Animations {
    pub fn new(actives: bool) -> Self {
        Self {
            actives,
            ..Default::default()
        }
    }

    /* --------- déclencheurs --------- */

    /// Premier appel seulement : fixe l’origine de l’animation d’entrée.
    pub fn lancer(&mut self, t: f64) {
        self.lancement.get_or_insert(t);
    }

    pub fn presser(&mut self, touche: &'static str, t: f64) {
        self.pressions.insert(touche, t);
    }

    pub fn montrer_resultat(&mut self, t: f64) {
        self.resultat = Some(t);
    }

    pub fn effacer(&mut self, t: f64) {
        self.effacement = Some(t);
    }

    /* --------- lectures --------- */

    /// Échelle d’une touche pressée.
    pub fn echelle_touche(&self, touche: &str, t: f64) -> f32 {
        if !self.actives {
            return 1.0;
        }
        let Some(&debut) = self.pressions.get(touche) else {
            return 1.0;
        };
        let dt = t - debut;
        if dt < 0.0 || dt >= 2.0 * PRESSION_DEMI {
            1.0
        } else if dt < PRESSION_DEMI {
            lerp(1.0, PRESSION_ECHELLE, dt / PRESSION_DEMI)
        } else {
            lerp(PRESSION_ECHELLE, 1.0, (dt - PRESSION_DEMI) / PRESSION_DEMI)
        }
    }

    /// (opacité, décalage vertical en points) de la touche d’indice `index`.
    pub fn entree_touche(&self, index: usize, t: f64) -> (f32, f32) {
        if !self.actives {
            return (1.0, 0.0);
        }
        let Some(lancement) = self.lancement else {
            // pas encore lancé : touches invisibles, en position de départ
            return (0.0, ENTREE_TRANSLATION);
        };
        let debut = lancement + index as f64 * ENTREE_DECALAGE;
        let k = accelere_decelere(progression(debut, ENTREE_DUREE, t));
        (lerp(0.0, 1.0, k), lerp(ENTREE_TRANSLATION, 0.0, k))
    }

    /// (échelle, opacité) du texte résultat.
    pub fn apparition_resultat(&self, t: f64) -> (f32, f32) {
        if !self.actives {
            return (1.0, 1.0);
        }
        let Some(debut) = self.resultat else {
            return (1.0, 1.0);
        };
        let p = progression(debut, RESULTAT_DUREE, t);
        let k = overshoot(p, RESULTAT_TENSION);
        (lerp(RESULTAT_ECHELLE_DEPART, 1.0, k), lerp(0.0, 1.0, k).min(1.0))
    }

    /// Opacité de l’entrée pendant l’effacement (revient à 1 à la fin).
    pub fn opacite_entree(&self, t: f64) -> f32 {
        match self.effacement {
            Some(debut) if self.actives && t >= debut && t < debut + EFFACEMENT_DUREE => {
                lerp(1.0, 0.0, progression(debut, EFFACEMENT_DUREE, t))
            }
            _ => 1.0,
        }
    }

    /// Opacité du résultat pendant l’effacement (reste à 0 ensuite).
    pub fn opacite_resultat_effacement(&self, t: f64) -> f32 {
        match self.effacement {
            // un résultat montré après l’effacement reprend la main
            Some(debut)
                if self.actives
                    && t >= debut
                    && !matches!(self.resultat, Some(r) if r >= debut) =>
            {
                lerp(1.0, 0.0, progression(debut, EFFACEMENT_DUREE, t))
            }
            _ => 1.0,
        }
    }

    /// Vrai tant qu’une animation est en cours (=> demander un repaint).
    pub fn en_cours(&self, t: f64, nb_touches: usize) -> bool {
        if !self.actives {
            return false;
        }
        let fin_entree = self
            .lancement
            .map(|l| l + nb_touches as f64 * ENTREE_DECALAGE + ENTREE_DUREE);
        let fins = [
            fin_entree,
            self.resultat.map(|d| d + RESULTAT_DUREE),
            self.effacement.map(|d| d + EFFACEMENT_DUREE),
            self.pressions
                .values()
                .copied()
                .reduce(f64::max)
                .map(|d| d + 2.0 * PRESSION_DEMI),
        ];
        self.lancement.is_none() || fins.into_iter().flatten().any(|fin| t < fin)
    }
}
