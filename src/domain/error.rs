use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Erreurs possibles de la bibliothèque.
#[derive(Debug, Error)]
pub enum DiskError {
    /// L'OS n'a pas pu énumérer les systèmes de fichiers montés.
    /// Jamais remplacée par une liste vide silencieuse.
    #[error("mount enumeration failed: {0}")]
    Enumeration(String),

    /// Chemin inexistant, ou hors de tout volume monté.
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// L'OS refuse la requête d'usage.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// La requête a dépassé l'attente bornée (montage réseau lent ?).
    #[error("disk query timed out after {waited:?}: {}", .path.display())]
    Timeout { path: PathBuf, waited: Duration },

    /// Erreur de config.
    #[cfg(feature = "config")]
    #[error("config error: {0}")]
    Config(String),
}
