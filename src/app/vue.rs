// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ a le focus), Escape efface (app.rs)
// - Tactile : grosses touches, focus redonné après clic (focus_entree)
// - Curseur du champ synchronisé avec AppCalc::curseur (insertion au curseur)
//
// Note :
// - Les animations sont lues depuis etat.animations ; ici on ne fait que dessiner.

use eframe::egui;
use egui::text::{CCursor, CCursorRange};

use super::etat::AppCalc;
use crate::noyau::Operateur;

/// Espacement entre touches (points).
const ESPACE: f32 = 8.0;

/// 4×4 + "=" en pleine largeur.
const NB_TOUCHES: usize = 17;

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum Touche {
    Chiffre(char),
    Op(Operateur),
    Retour,
    Effacer,
    Egal,
}

impl Touche {
    /// Étiquette, et clé de l’animation de pression.
    fn id(self) -> &'static str {
        match self {
            Touche::Chiffre(c) => CHIFFRES[c.to_digit(10).unwrap_or(0) as usize],
            Touche::Op(op) => op.symbole(),
            Touche::Retour => "DEL",
            Touche::Effacer => "C",
            Touche::Egal => "=",
        }
    }

    fn remplissage(self, visuals: &egui::Visuals) -> Option<egui::Color32> {
        match self {
            Touche::Op(_) | Touche::Egal => Some(visuals.selection.bg_fill),
            Touche::Effacer => Some(visuals.error_fg_color.gamma_multiply(0.35)),
            Touche::Chiffre(_) | Touche::Retour => None,
        }
    }
}

/// Trois premières colonnes du pavé ; la quatrième vient de `Operateur::TOUS`.
static PAVE: [[Touche; 3]; 4] = [
    [Touche::Chiffre('7'), Touche::Chiffre('8'), Touche::Chiffre('9')],
    [Touche::Chiffre('4'), Touche::Chiffre('5'), Touche::Chiffre('6')],
    [Touche::Chiffre('1'), Touche::Chiffre('2'), Touche::Chiffre('3')],
    [Touche::Chiffre('0'), Touche::Retour, Touche::Effacer],
];

/// Rangées complètes, opérateurs de haut en bas (÷ × - +).
/// Ordre de lecture = ordre d’entrée animée (index 0..16, "=" en dernier).
fn rangees() -> impl Iterator<Item = [Touche; 4]> {
    PAVE.iter()
        .zip(Operateur::TOUS.into_iter().rev())
        .map(|(g, op)| [g[0], g[1], g[2], Touche::Op(op)])
}

/// Point d’insertion d’une sélection : son début, quel que soit le sens du tracé.
fn debut_selection(plage: &CCursorRange) -> usize {
    plage.primary.index.min(plage.secondary.index)
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let t = ui.input(|i| i.time);
        self.animations.lancer(t);

        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_entree(ui, t);
        ui.add_space(4.0);
        self.ui_resultat(ui, t);

        ui.separator();
        ui.add_space(4.0);

        self.ui_pave(ui, t);

        if self.animations.en_cours(t, NB_TOUCHES) {
            ui.ctx().request_repaint();
        }
    }

    /// Action d’une touche (pavé, Enter, Escape) + son animation.
    pub(super) fn appuyer(&mut self, touche: Touche, t: f64) {
        self.animations.presser(touche.id(), t);

        match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Op(op) => {
                // refus silencieux : entrée vide ou opérateur déjà en fin
                self.operateur(op);
            }
            Touche::Retour => self.retour_arriere(),
            Touche::Effacer => {
                self.effacer();
                self.animations.effacer(t);
            }
            Touche::Egal => {
                if self.egal() {
                    self.animations.montrer_resultat(t);
                }
            }
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui, t: f64) {
        // IMPORTANT : id stable (état du curseur conservé entre frames)
        let id = egui::Id::new("entree_edit");

        // Après une touche du pavé : on replace le curseur egui sur AppCalc::curseur.
        if self.curseur_modifie {
            if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), id) {
                let pos = self.curseur.unwrap_or_else(|| self.entree.chars().count());
                state
                    .cursor
                    .set_char_range(Some(CCursorRange::one(CCursor::new(pos))));
                state.store(ui.ctx(), id);
            }
            self.curseur_modifie = false;
        }

        let opacite = self.animations.opacite_entree(t);
        let entree = &mut self.entree;
        let sortie = ui
            .scope(|ui| {
                ui.multiply_opacity(opacite);
                egui::TextEdit::singleline(entree)
                    .id(id)
                    .desired_width(ui.available_width())
                    .font(egui::TextStyle::Heading)
                    .hint_text("0")
                    .show(ui)
            })
            .inner;

        // Saisie au clavier physique : le résultat affiché n’est plus valable.
        if sortie.response.changed() {
            self.edition_manuelle();
        }

        // Le curseur egui fait foi tant que le pavé ne l’a pas déplacé.
        if let Some(plage) = sortie.state.cursor.char_range() {
            self.curseur = Some(debut_selection(&plage));
        }

        if self.focus_entree {
            sortie.response.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue ---
        // Un TextEdit monoligne rend le focus sur Enter : on teste donc lost_focus().
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if sortie.response.lost_focus() && enter {
            self.appuyer(Touche::Egal, t);
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui, t: f64) {
        let (echelle, alpha) = self.animations.apparition_resultat(t);
        let alpha = alpha * self.animations.opacite_resultat_effacement(t);

        let hauteur = 2.0 * ui.text_style_height(&egui::TextStyle::Heading);
        let couleur = ui.visuals().strong_text_color().gamma_multiply(alpha);

        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), hauteur),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                ui.set_min_height(hauteur);
                ui.label(
                    egui::RichText::new(&self.resultat)
                        .monospace()
                        .size(32.0 * echelle)
                        .color(couleur),
                );
            },
        );
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, t: f64) {
        let largeur = ((ui.available_width() - 3.0 * ESPACE) / 4.0).max(40.0);
        let taille = egui::vec2(largeur, (largeur * 0.8).max(40.0));

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([ESPACE, ESPACE])
            .show(ui, |ui| {
                for (r, rangee) in rangees().enumerate() {
                    for (c, touche) in rangee.into_iter().enumerate() {
                        if self.touche(ui, touche, r * 4 + c, taille, t) {
                            self.appuyer(touche, t);
                        }
                    }
                    ui.end_row();
                }
            });

        let taille_egal = egui::vec2(ui.available_width(), taille.y);
        if self.touche(ui, Touche::Egal, NB_TOUCHES - 1, taille_egal, t) {
            self.appuyer(Touche::Egal, t);
        }
    }

    /// Dessine une touche à sa place animée (entrée + pression). Vrai si cliquée.
    fn touche(
        &self,
        ui: &mut egui::Ui,
        touche: Touche,
        index: usize,
        taille: egui::Vec2,
        t: f64,
    ) -> bool {
        // la cellule garde sa taille de repos : la grille ne bouge pas
        let (cellule, _) = ui.allocate_exact_size(taille, egui::Sense::hover());

        let (alpha, dy) = self.animations.entree_touche(index, t);
        let echelle = self.animations.echelle_touche(touche.id(), t);
        let rect = egui::Rect::from_center_size(
            cellule.center() + egui::vec2(0.0, dy),
            cellule.size() * echelle,
        );

        let mut bouton = egui::Button::new(egui::RichText::new(touche.id()).size(24.0 * echelle));
        if let Some(c) = touche.remplissage(ui.visuals()) {
            bouton = bouton.fill(c);
        }

        ui.scope(|ui| {
            ui.multiply_opacity(alpha);
            ui.put(rect, bouton)
        })
        .inner
        .clicked()
    }
}
