use std::path::{Path, PathBuf};

use crate::domain::{DiskError, Partition};

/// Capacité d'interrogation de l'OS : énumération des montages et
/// résolution de chemin.
///
/// Les opérations publiques sont écrites contre ce trait, si bien que
/// les tests tournent sur une sonde factice au lieu du vrai système de
/// fichiers. L'implémentation réelle vit dans `infrastructure`.
pub trait MountProbe {
    /// Liste les partitions montées, dans l'ordre retourné par l'OS
    /// (non trié, non stable d'un appel à l'autre).
    ///
    /// Une liste vide est un succès valide (hôte sans montage) ; un
    /// échec d'énumération doit être [`DiskError::Enumeration`].
    fn partitions(&self) -> Result<Vec<Partition>, DiskError>;

    /// Canonicalise `path`.
    ///
    /// [`DiskError::PathNotFound`] si le chemin n'existe pas,
    /// [`DiskError::PermissionDenied`] si l'OS refuse l'accès.
    fn resolve(&self, path: &Path) -> Result<PathBuf, DiskError>;
}
