//! Propriétés de la machine (proptest).
//!
//! - saisie de chiffres après C : affichée telle quelle
//! - opérateur sur entrée vide : aucun effet
//! - C : les deux champs reviennent à "0", quel que soit l’historique
//! - second point dans un même nombre : ignoré
//! - au plus un point dans l’entrée, toujours

use proptest::prelude::*;

use super::machine::Calculatrice;
use super::touche::{Operateur, Touche};

fn une_touche() -> impl Strategy<Value = Touche> {
    prop_oneof![
        6 => (0u8..=9).prop_map(Touche::Chiffre),
        1 => Just(Touche::Virgule),
        2 => prop::sample::select(Operateur::TOUS.to_vec()).prop_map(Touche::Operateur),
        1 => Just(Touche::Egal),
        1 => Just(Touche::Effacer),
    ]
}

fn operateur_ou_egal() -> impl Strategy<Value = Touche> {
    prop_oneof![
        4 => prop::sample::select(Operateur::TOUS.to_vec()).prop_map(Touche::Operateur),
        1 => Just(Touche::Egal),
    ]
}

fn taper(depart: Calculatrice, touches: &[Touche]) -> Calculatrice {
    touches.iter().fold(depart, |s, t| s.appuyer(*t))
}

proptest! {
    #[test]
    fn prop_chiffres_affiches_tels_quels(chiffres in prop::collection::vec(0u8..=9, 1..40)) {
        let c = taper(Calculatrice::default().effacer(), &chiffres.iter().map(|d| Touche::Chiffre(*d)).collect::<Vec<_>>());
        let attendu: String = chiffres.iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert_eq!(c.affichage().entree, attendu);
    }

    #[test]
    fn prop_effacer_remet_tout_a_zero(touches in prop::collection::vec(une_touche(), 0..60)) {
        let c = taper(Calculatrice::default(), &touches).effacer();
        let a = c.affichage();
        prop_assert_eq!(a.entree.as_str(), "0");
        prop_assert_eq!(a.resultat.as_str(), "0");
        prop_assert_eq!(c, Calculatrice::default());
    }

    #[test]
    fn prop_operateur_sur_entree_vide(
        prefixe in prop::collection::vec(une_touche(), 0..40),
        suite in prop::collection::vec(operateur_ou_egal(), 0..10),
        op in prop::sample::select(Operateur::TOUS.to_vec())
    ) {
        // C puis seulement opérateurs/égal : l’entrée reste vide
        let c = taper(taper(Calculatrice::default(), &prefixe).effacer(), &suite);
        prop_assert!(c.entree().is_empty());
        prop_assert_eq!(c.appuyer(Touche::Operateur(op)), c);
    }

    #[test]
    fn prop_au_plus_un_point(touches in prop::collection::vec(une_touche(), 0..80)) {
        let mut c = Calculatrice::default();
        for t in touches {
            c = c.appuyer(t);
            prop_assert!(c.entree().matches('.').count() <= 1, "entrée {:?}", c.entree());
        }
    }

    #[test]
    fn prop_second_point_ignore(touches in prop::collection::vec(une_touche(), 0..40)) {
        let c = taper(Calculatrice::default(), &touches).virgule();
        prop_assert_eq!(c.virgule(), c);
    }
}
