// src/reglages.rs
//
// Réglages (TOML) — natif seulement, défauts en wasm.
//
// Emplacement :
// - $CALCULATRICE_REGLAGES si défini
// - sinon <config_dir>/calculatrice-pile/reglages.toml
//
// Fichier absent => défauts. Fichier illisible/invalide => avertissement + défauts.
//
// Exemple :
//   decimales = 3
//   non_fini_en_erreur = true
//   [fenetre]
//   largeur = 400.0
//   hauteur = 600.0

use serde::Deserialize;

use crate::noyau::format::{DECIMALES_DEFAUT, DECIMALES_MAX};
use crate::noyau::OptionsCalcul;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Décimales d’un résultat fractionnaire (bornées à DECIMALES_MAX).
    pub decimales: usize,
    /// Division/modulo par zéro affichés `Error` plutôt que Infinity/NaN.
    pub non_fini_en_erreur: bool,
    pub fenetre: Fenetre,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fenetre {
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Fenetre {
    fn default() -> Self {
        Self {
            largeur: 360.0,
            hauteur: 560.0,
        }
    }
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            non_fini_en_erreur: false,
            fenetre: Fenetre::default(),
        }
    }
}

impl Reglages {
    /// Options transmises à la machine (garde-fou sur les décimales).
    pub fn options_calcul(&self) -> OptionsCalcul {
        OptionsCalcul {
            decimales: self.decimales.min(DECIMALES_MAX),
            non_fini_en_erreur: self.non_fini_en_erreur,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::{Path, PathBuf};

    use thiserror::Error;
    use tracing::{info, warn};

    use super::Reglages;

    /// Variable d’environnement : chemin explicite du fichier.
    const VAR_CHEMIN: &str = "CALCULATRICE_REGLAGES";

    #[derive(Debug, Error)]
    pub enum ErreurReglages {
        #[error("lecture de {} impossible", .chemin.display())]
        Lecture {
            chemin: PathBuf,
            #[source]
            source: std::io::Error,
        },

        #[error("réglages invalides dans {}", .chemin.display())]
        Syntaxe {
            chemin: PathBuf,
            #[source]
            source: toml::de::Error,
        },
    }

    /// Chemin du fichier de réglages (None si aucun répertoire de config connu).
    pub fn chemin_reglages() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os(VAR_CHEMIN) {
            return Some(PathBuf::from(p));
        }
        dirs::config_dir().map(|d| d.join("calculatrice-pile").join("reglages.toml"))
    }

    impl Reglages {
        /// Analyse un texte TOML (champs absents => défauts).
        pub fn depuis_toml(texte: &str, chemin: &Path) -> Result<Self, ErreurReglages> {
            toml::from_str(texte).map_err(|source| ErreurReglages::Syntaxe {
                chemin: chemin.to_path_buf(),
                source,
            })
        }

        /// Charge un fichier précis. Absent => défauts.
        pub fn charger_depuis(chemin: &Path) -> Result<Self, ErreurReglages> {
            let texte = match std::fs::read_to_string(chemin) {
                Ok(t) => t,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(source) => {
                    return Err(ErreurReglages::Lecture {
                        chemin: chemin.to_path_buf(),
                        source,
                    })
                }
            };
            Self::depuis_toml(&texte, chemin)
        }

        /// Chargement au démarrage : ne bloque jamais l’application.
        pub fn charger() -> Self {
            let Some(chemin) = chemin_reglages() else {
                info!("aucun répertoire de configuration, réglages par défaut");
                return Self::default();
            };

            match Self::charger_depuis(&chemin) {
                Ok(r) => {
                    info!(chemin = %chemin.display(), ?r, "réglages chargés");
                    r
                }
                Err(e) => {
                    warn!(erreur = %e, cause = ?std::error::Error::source(&e), "réglages ignorés");
                    Self::default()
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use super::natif::ErreurReglages;
    use super::Reglages;

    #[test]
    fn defauts() {
        let r = Reglages::default();
        assert_eq!(r.decimales, 2);
        assert!(!r.non_fini_en_erreur);
        assert_eq!(r.options_calcul().decimales, 2);
    }

    #[test]
    fn toml_partiel() {
        let r = Reglages::depuis_toml("decimales = 4\n", Path::new("x.toml")).unwrap();
        assert_eq!(r.decimales, 4);
        assert!(!r.non_fini_en_erreur);
        assert_eq!(r.fenetre, super::Fenetre::default());
    }

    #[test]
    fn toml_complet() {
        let texte = r#"
            decimales = 3
            non_fini_en_erreur = true

            [fenetre]
            largeur = 400.0
            hauteur = 600.0
        "#;
        let r = Reglages::depuis_toml(texte, Path::new("x.toml")).unwrap();
        assert_eq!(r.decimales, 3);
        assert!(r.non_fini_en_erreur);
        assert_eq!(r.fenetre.largeur, 400.0);
        assert_eq!(r.fenetre.hauteur, 600.0);
    }

    #[test]
    fn decimales_bornees() {
        let r = Reglages::depuis_toml("decimales = 500", Path::new("x.toml")).unwrap();
        assert_eq!(r.options_calcul().decimales, 12);
    }

    #[test]
    fn toml_invalide() {
        let e = Reglages::depuis_toml("decimales = \"deux\"", Path::new("x.toml")).unwrap_err();
        assert!(matches!(e, ErreurReglages::Syntaxe { .. }));
        assert!(e.to_string().contains("x.toml"));
    }

    #[test]
    fn fichier_absent_defauts() {
        let dir = tempfile::tempdir().unwrap();
        let r = Reglages::charger_depuis(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(r, Reglages::default());
    }

    #[test]
    fn fichier_present() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "non_fini_en_erreur = true").unwrap();
        let r = Reglages::charger_depuis(f.path()).unwrap();
        assert!(r.non_fini_en_erreur);
        assert!(r.options_calcul().non_fini_en_erreur);
    }

    #[test]
    fn repertoire_illisible_comme_fichier() {
        // un répertoire n’est pas un fichier lisible
        let dir = tempfile::tempdir().unwrap();
        let e = Reglages::charger_depuis(dir.path()).unwrap_err();
        assert!(matches!(e, ErreurReglages::Lecture { .. }));
    }
}
