//! Noyau — évaluation d’une opération en attente.
//!
//! `opérande op entrée`, en flottant double précision.
//! Pas d’exception : le résultat est classé.
//! - `Ok(v)`             : v fini
//! - `Err(Lecture)`      : une des deux chaînes n’est pas un nombre
//! - `Err(NonFini(v))`   : v = ±∞ ou NaN (division / modulo par zéro, débordement)

use std::num::ParseFloatError;

use thiserror::Error;

use super::touche::Operateur;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error("nombre illisible : {texte:?}")]
    Lecture {
        texte: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("résultat non fini : {0}")]
    NonFini(f64),
}

/// Lecture d’un nombre (espaces tolérés autour).
/// Accepte aussi `Infinity`, `-Infinity`, `NaN` : ce sont les jetons
/// que la machine affiche après un résultat non fini.
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurCalcul> {
    texte
        .trim()
        .parse::<f64>()
        .map_err(|source| ErreurCalcul::Lecture {
            texte: texte.to_string(),
            source,
        })
}

/// Évalue `operande op entree`.
///
/// Sans opérateur en attente, le résultat est l’entrée (l’opérande n’est pas lue).
pub fn evaluer(
    operande: &str,
    entree: &str,
    op: Option<Operateur>,
) -> Result<f64, ErreurCalcul> {
    let b = lire_nombre(entree)?;

    let v = match op {
        Some(op) => op.appliquer(lire_nombre(operande)?, b),
        None => b,
    };

    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::NonFini(v))
    }
}
