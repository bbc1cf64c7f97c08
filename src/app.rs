// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier global : chiffres, . ou , , + - * x / %, = ou Enter, Échap/Suppr = C

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches = ctx.input(|i| touches_clavier(&i.events));
        for t in touches {
            self.appuyer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

/// Événements clavier d’une frame -> touches, dans l’ordre.
///
/// Le texte saisi porte chiffres/opérateurs/point/égal ; Enter, Échap et Suppr
/// n’arrivent que comme touches physiques.
fn touches_clavier(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();

    for ev in events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(Touche::depuis_caractere)),
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Touche::Egal),
                egui::Key::Escape | egui::Key::Delete => out.push(Touche::Effacer),
                _ => {}
            },
            _ => {}
        }
    }

    out
}
