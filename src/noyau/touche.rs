// src/noyau/touche.rs
//
// Touches du pavé (événements d’entrée de la machine).
// Une touche = une transition. Rien d’autre ne modifie l’état.

use std::fmt;

/// Opérateurs binaires disponibles sur le pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
}

impl Operateur {
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Modulo,
    ];

    /// Symbole affiché sur la touche.
    pub const fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "/",
            Operateur::Modulo => "%",
        }
    }

    /// Application flottante brute (sémantique IEEE 754 : pas de cas spécial pour 0).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
            Operateur::Modulo => a % b,
        }
    }

    /// Caractère clavier -> opérateur (accepte les variantes ASCII).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' | '−' => Some(Operateur::Moins),
            '*' | 'x' | 'X' | '×' => Some(Operateur::Fois),
            '/' | '÷' => Some(Operateur::Divise),
            '%' => Some(Operateur::Modulo),
            _ => None,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Une pression de touche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre 0..=9 (les autres valeurs sont ignorées par la machine).
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Egal,
    Effacer,
}

impl Touche {
    /// Libellé du bouton.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Virgule => ".".to_string(),
            Touche::Operateur(op) => op.symbole().to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Effacer => "C".to_string(),
        }
    }

    /// Saisie clavier (texte) -> touche.
    /// `,` vaut `.` (claviers FR), `=` vaut Égal.
    pub fn depuis_caractere(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Touche::Chiffre(d as u8));
        }
        match c {
            '.' | ',' => Some(Touche::Virgule),
            '=' => Some(Touche::Egal),
            _ => Operateur::depuis_caractere(c).map(Touche::Operateur),
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.libelle())
    }
}
