use serde::Deserialize;

/// Configuration haut-niveau (TOML).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GlanceConfig {
    /// Inclure aussi les pseudo-FS (tmpfs, proc…) dans l'énumération.
    pub include_pseudo_fs: bool,
    /// Borne d'attente (en secondes) pour les requêtes d'usage.
    /// Absente ou 0 : pas de borne.
    pub timeout_seconds: Option<u64>,
    /// Valeur à appliquer pour la variable d'environnement RUST_LOG.
    pub rust_log: Option<String>,
}
