//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir la valeur courante de la machine et la remplacer à chaque touche.
//!
//! Contrats :
//! - Aucune règle de calcul ici (tout est dans noyau::machine).
//! - Une touche = un appel à `appuyer` = un nouvel état.

use tracing::debug;

use crate::noyau::{Affichage, Calculatrice, OptionsCalcul, Operateur, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    calc: Calculatrice,
}

impl AppCalc {
    pub fn new(options: OptionsCalcul) -> Self {
        Self {
            calc: Calculatrice::avec_options(options),
        }
    }

    /// Applique une touche (bouton ou clavier).
    pub fn appuyer(&mut self, touche: Touche) {
        self.calc = self.calc.appuyer(touche);

        let a = self.calc.affichage();
        debug!(%touche, entree = %a.entree, resultat = %a.resultat, "touche");
    }

    pub fn affichage(&self) -> Affichage {
        self.calc.affichage()
    }

    /// Opérateur en attente (indicateur à côté du résultat).
    pub fn operateur(&self) -> Option<Operateur> {
        self.calc.operateur()
    }

    pub fn en_erreur(&self) -> bool {
        self.calc.en_erreur()
    }
}
