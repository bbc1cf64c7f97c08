// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : résultat/opérande (petit, en haut) + entrée (grand)
// - Pavé 4 colonnes, gros boutons (tactile)
// - Le clavier est géré dans app.rs (global, pas de champ focus ici)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Operateur, Touche};

/// Taille d’une touche du pavé.
const TAILLE_TOUCHE: [f32; 2] = [72.0, 56.0];

/// Disposition du pavé, ligne par ligne.
const PAVE: [[Option<Touche>; 4]; 5] = [
    [
        Some(Touche::Effacer),
        Some(Touche::Operateur(Operateur::Modulo)),
        Some(Touche::Operateur(Operateur::Divise)),
        Some(Touche::Operateur(Operateur::Fois)),
    ],
    [
        Some(Touche::Chiffre(7)),
        Some(Touche::Chiffre(8)),
        Some(Touche::Chiffre(9)),
        Some(Touche::Operateur(Operateur::Moins)),
    ],
    [
        Some(Touche::Chiffre(4)),
        Some(Touche::Chiffre(5)),
        Some(Touche::Chiffre(6)),
        Some(Touche::Operateur(Operateur::Plus)),
    ],
    [
        Some(Touche::Chiffre(1)),
        Some(Touche::Chiffre(2)),
        Some(Touche::Chiffre(3)),
        Some(Touche::Egal),
    ],
    [Some(Touche::Chiffre(0)), Some(Touche::Virgule), None, None],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.vertical_centered(|ui| {
            ui.heading(crate::TITRE_APP);
        });
        ui.add_space(8.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let a = self.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let texte = egui::RichText::new(&a.resultat).monospace().size(20.0);
                    if self.en_erreur() {
                        ui.colored_label(ui.visuals().error_fg_color, texte);
                    } else {
                        ui.label(texte.weak());
                    }
                    if let Some(op) = self.operateur() {
                        ui.label(egui::RichText::new(op.symbole()).monospace().size(20.0));
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(egui::RichText::new(&a.entree).monospace().size(40.0).strong());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for case in ligne {
                        match case {
                            Some(t) => self.bouton_touche(ui, t),
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let texte = egui::RichText::new(touche.libelle()).size(22.0);
        let texte = match touche {
            Touche::Operateur(_) | Touche::Egal => texte.strong(),
            Touche::Effacer => texte.color(ui.visuals().error_fg_color),
            _ => texte,
        };

        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(texte));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
