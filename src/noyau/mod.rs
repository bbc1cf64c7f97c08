//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - touche.rs   : touches du pavé + opérateurs
//! - eval.rs     : évaluation `opérande op entrée` -> Result classé
//! - format.rs   : affichage des résultats (entier exact / décimales / jetons non finis)
//! - machine.rs  : machine à états (une touche = un nouvel état)

pub mod eval;
pub mod format;
pub mod machine;
pub mod touche;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use machine::{Affichage, Calculatrice, OptionsCalcul};
pub use touche::{Operateur, Touche};
