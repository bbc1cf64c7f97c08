//! Noyau — machine à états de la calculatrice.
//!
//! Quatre champs :
//! - `entree`              : chiffres/point du nombre en cours (au plus un point)
//! - `operande`            : opérande gauche engagée (texte), vide si rien en attente
//! - `operateur`           : opérateur en attente
//! - `nouvelle_operation`  : le prochain chiffre repart d’une entrée vide
//!
//! Chaque transition prend l’état par référence et rend l’état suivant.
//! Aucune mutation en place : l’UI remplace sa valeur à chaque touche.

use tracing::warn;

use super::eval::{evaluer, ErreurCalcul};
use super::format::{formater_resultat, jeton_non_fini, DECIMALES_DEFAUT, MARQUEUR_ERREUR};
use super::touche::{Operateur, Touche};

/// Paramètres de calcul (issus des réglages).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionsCalcul {
    /// Décimales d’un résultat fractionnaire.
    pub decimales: usize,
    /// Un résultat non fini s’affiche comme `Error` au lieu de son jeton.
    pub non_fini_en_erreur: bool,
}

impl Default for OptionsCalcul {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            non_fini_en_erreur: false,
        }
    }
}

/// Ce que montrent les deux champs de l’écran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub entree: String,
    pub resultat: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Calculatrice {
    entree: String,
    operande: String,
    operateur: Option<Operateur>,
    nouvelle_operation: bool,
    options: OptionsCalcul,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::avec_options(OptionsCalcul::default())
    }
}

impl Calculatrice {
    pub fn avec_options(options: OptionsCalcul) -> Self {
        Self {
            entree: String::new(),
            operande: String::new(),
            operateur: None,
            nouvelle_operation: true,
            options,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn entree(&self) -> &str {
        &self.entree
    }

    pub fn operande(&self) -> &str {
        &self.operande
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn nouvelle_operation(&self) -> bool {
        self.nouvelle_operation
    }

    pub fn options(&self) -> OptionsCalcul {
        self.options
    }

    /// true si l’opérande affiche le marqueur d’erreur.
    pub fn en_erreur(&self) -> bool {
        self.operande == MARQUEUR_ERREUR
    }

    /// Les deux champs, "0" quand vides.
    pub fn affichage(&self) -> Affichage {
        fn ou_zero(s: &str) -> String {
            if s.is_empty() {
                "0".to_string()
            } else {
                s.to_string()
            }
        }
        Affichage {
            entree: ou_zero(&self.entree),
            resultat: ou_zero(&self.operande),
        }
    }

    /* ------------------------ Transitions ------------------------ */

    /// Dispatch d’une touche.
    pub fn appuyer(&self, touche: Touche) -> Self {
        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Virgule => self.virgule(),
            Touche::Operateur(op) => self.operateur_presse(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(),
        }
    }

    /// Chiffre : repart d’une entrée vide si une nouvelle opération commence.
    /// Hors 0..=9 : ignoré.
    pub fn chiffre(&self, d: u8) -> Self {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return self.clone();
        };

        let mut s = self.clone();
        if s.nouvelle_operation {
            s.entree.clear();
            s.nouvelle_operation = false;
        }
        s.entree.push(c);
        s
    }

    /// Point décimal : un seul par nombre ; "0" devant si l’entrée repart.
    pub fn virgule(&self) -> Self {
        if self.entree.contains('.') {
            return self.clone();
        }

        let mut s = self.clone();
        if s.entree.is_empty() || s.nouvelle_operation {
            s.entree.clear();
            s.entree.push('0');
            s.nouvelle_operation = false;
        }
        s.entree.push('.');
        s
    }

    /// Opérateur : engage l’entrée, ou évalue l’opération en attente (enchaînement)
    /// avec l’opérateur choisi AVANT celui-ci.
    pub fn operateur_presse(&self, op: Operateur) -> Self {
        if self.entree.is_empty() {
            return self.clone();
        }

        let mut s = if self.operande.is_empty() {
            let mut s = self.clone();
            s.operande = s.entree.clone();
            s
        } else {
            self.resoudre()
        };

        s.operateur = Some(op);
        s.nouvelle_operation = true;
        s
    }

    /// Égal : n’agit que si entrée ET opérande sont présentes.
    pub fn egal(&self) -> Self {
        if self.entree.is_empty() || self.operande.is_empty() {
            return self.clone();
        }

        let mut s = self.resoudre();
        s.nouvelle_operation = true;
        s
    }

    /// Remise à l’état initial (les options restent).
    pub fn effacer(&self) -> Self {
        Self::avec_options(self.options)
    }

    /* ------------------------ Évaluation ------------------------ */

    /// `operande op entree` -> entrée et opérande remplacées par le résultat formaté.
    /// Échec de lecture : entrée vidée, opérande = `Error`.
    fn resoudre(&self) -> Self {
        let mut s = self.clone();

        let texte = match evaluer(&self.operande, &self.entree, self.operateur) {
            Ok(v) => formater_resultat(v, self.options.decimales),
            Err(ErreurCalcul::NonFini(v)) if !self.options.non_fini_en_erreur => {
                jeton_non_fini(v).to_string()
            }
            Err(e) => {
                warn!(erreur = %e, operande = %self.operande, entree = %self.entree, "évaluation impossible");
                s.entree.clear();
                s.operande = MARQUEUR_ERREUR.to_string();
                return s;
            }
        };

        s.entree = texte.clone();
        s.operande = texte;
        s
    }
}
