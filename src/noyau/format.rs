// src/noyau/format.rs
//
// Affichage des résultats.
// - partie fractionnaire nulle : entier exact (BigInt, pas de saturation i64)
// - sinon                      : `decimales` chiffres après le point, arrondi demi vers le haut
//                                (sur l’écriture décimale la plus courte : 0.125 -> 0.13)
// - non fini                   : jeton littéral (Infinity / -Infinity / NaN)

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Zero};

/// Marqueur affiché quand l’évaluation échoue.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Nombre de décimales par défaut pour un résultat fractionnaire.
pub const DECIMALES_DEFAUT: usize = 2;

/// Garde-fou : au-delà, f64 n’a plus rien à dire.
pub const DECIMALES_MAX: usize = 12;

/// Jeton d’un flottant non fini.
pub fn jeton_non_fini(v: f64) -> &'static str {
    if v.is_nan() {
        "NaN"
    } else if v.is_sign_negative() {
        "-Infinity"
    } else {
        "Infinity"
    }
}

/// Formate un résultat.
pub fn formater_resultat(v: f64, decimales: usize) -> String {
    if !v.is_finite() {
        return jeton_non_fini(v).to_string();
    }

    if v.fract().is_zero() {
        // fini + entier => conversion exacte
        return match BigInt::from_f64(v) {
            Some(n) => n.to_string(),
            None => format!("{v:.0}"),
        };
    }

    arrondi_demi_haut(v, decimales.min(DECIMALES_MAX))
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Entier “scalé” (×10^decimales, valeur absolue) -> texte décimal.
fn scaled_to_decimal(scaled: &BigInt, decimales: usize, neg: bool) -> String {
    let signe = if neg { "-" } else { "" };
    if decimales == 0 {
        return format!("{signe}{scaled}");
    }

    let scale = pow10(decimales);
    let int_part = scaled / &scale;
    let frac_part = scaled % &scale;

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < decimales {
        frac.insert(0, '0');
    }
    format!("{signe}{int_part}.{frac}")
}

/// Arrondi demi vers le haut à `decimales` chiffres.
///
/// Travaille sur l’écriture décimale la plus courte de `v` (Display de f64,
/// jamais en notation scientifique), pas sur sa valeur binaire exacte.
fn arrondi_demi_haut(v: f64, decimales: usize) -> String {
    let texte = v.abs().to_string();
    let (ent, frac) = texte.split_once('.').unwrap_or((texte.as_str(), ""));

    let mut chiffres = String::with_capacity(ent.len() + decimales);
    chiffres.push_str(ent);
    chiffres.extend(frac.chars().chain(std::iter::repeat('0')).take(decimales));

    let Ok(mut scaled) = chiffres.parse::<BigInt>() else {
        return format!("{v:.decimales$}");
    };
    if frac.as_bytes().get(decimales).is_some_and(|c| *c >= b'5') {
        scaled += 1;
    }

    scaled_to_decimal(&scaled, decimales, v.is_sign_negative())
}

#[cfg(test)]
mod tests {
    use super::{formater_resultat, jeton_non_fini, DECIMALES_DEFAUT};

    fn f(v: f64) -> String {
        formater_resultat(v, DECIMALES_DEFAUT)
    }

    #[test]
    fn entiers_sans_decimales() {
        assert_eq!(f(5.0), "5");
        assert_eq!(f(-12.0), "-12");
        assert_eq!(f(0.0), "0");
    }

    #[test]
    fn zero_negatif() {
        assert_eq!(f(-0.0), "0");
    }

    #[test]
    fn deux_decimales_exactement() {
        assert_eq!(f(2.5), "2.50");
        assert_eq!(f(0.1 + 0.2), "0.30");
        assert_eq!(f(1.0 / 3.0), "0.33");
        assert_eq!(f(-0.25), "-0.25");
    }

    #[test]
    fn arrondi_demi_vers_le_haut() {
        assert_eq!(f(0.125), "0.13");
        assert_eq!(f(0.625), "0.63");
        assert_eq!(f(1.125), "1.13");
        assert_eq!(f(-0.125), "-0.13");
        assert_eq!(f(2.675), "2.68");
    }

    #[test]
    fn arrondi_avec_retenue() {
        assert_eq!(f(0.995), "1.00");
        assert_eq!(f(9.999), "10.00");
        assert_eq!(formater_resultat(0.5, 0), "1");
    }

    #[test]
    fn tres_petits_resultats() {
        assert_eq!(f(0.0000001), "0.00");
        assert_eq!(f(0.004), "0.00");
    }

    #[test]
    fn grands_entiers_exacts() {
        // au-delà de i64::MAX : pas de saturation
        assert_eq!(f(1e20), "100000000000000000000");
    }

    #[test]
    fn decimales_reglables() {
        assert_eq!(formater_resultat(1.0 / 3.0, 4), "0.3333");
        assert_eq!(formater_resultat(1.5, 0), "2");
    }

    #[test]
    fn jetons_non_finis() {
        assert_eq!(jeton_non_fini(f64::INFINITY), "Infinity");
        assert_eq!(jeton_non_fini(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(jeton_non_fini(f64::NAN), "NaN");
        assert_eq!(f(f64::INFINITY), "Infinity");
    }
}
