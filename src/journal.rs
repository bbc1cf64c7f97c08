// src/journal.rs
//
// Journal (tracing) — natif seulement.
// Filtre : $CALCULATRICE_LOG, sinon $RUST_LOG, sinon "info".
// Les enregistrements `log` d’eframe/egui passent par le pont tracing-log.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::EnvFilter;

#[cfg(not(target_arch = "wasm32"))]
const VAR_FILTRE: &str = "CALCULATRICE_LOG";

#[cfg(not(target_arch = "wasm32"))]
const FILTRE_DEFAUT: &str = "info";

/// Filtre d’après l’environnement (directive invalide => défaut).
#[cfg(not(target_arch = "wasm32"))]
fn filtre() -> EnvFilter {
    let directive = std::env::var(VAR_FILTRE)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .unwrap_or_else(|_| FILTRE_DEFAUT.to_string());

    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT))
}

/// Installe le subscriber global. Sans effet s’il y en a déjà un.
#[cfg(not(target_arch = "wasm32"))]
pub fn initialiser() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre())
        .with_target(false)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn initialiser() {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::initialiser;

    #[test]
    fn initialisation_repetable() {
        initialiser();
        initialiser();
        tracing::info!("journal prêt");
    }
}
