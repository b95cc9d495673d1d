use std::io;
use std::path::{Path, PathBuf};

use sysinfo::Disks;
use tracing::debug;

use crate::domain::{DiskError, MountProbe, Partition};

/// Sonde réelle, appuyée sur `sysinfo::Disks`.
///
/// Les différences de plateforme (table de montage POSIX, lettres de
/// lecteur Windows) sont absorbées ici ; les appelants n'en voient rien.
#[derive(Debug, Clone, Default)]
pub struct SysinfoProbe {
    include_pseudo_fs: bool,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclut aussi les pseudo-FS (tmpfs, proc…) dans l'énumération.
    /// Par défaut ils sont filtrés, comme une énumération « périphériques
    /// physiques seulement ».
    pub fn with_pseudo_fs(mut self, include: bool) -> Self {
        self.include_pseudo_fs = include;
        self
    }
}

fn is_pseudo_fs(fs: Option<&str>) -> bool {
    matches!(
        fs,
        Some(
            "tmpfs"
                | "ramfs"
                | "devtmpfs"
                | "proc"
                | "sysfs"
                | "cgroup2"
                | "cgroup"
                | "overlay"
                | "squashfs"
        )
    )
}

/// sysinfo ne distingue pas « zéro montage » d'une énumération qui a
/// échoué. Quand la liste revient vide, on recoupe avec la table de
/// montage de l'OS avant de conclure à un succès.
#[cfg(target_os = "linux")]
fn confirm_empty_mount_table() -> Result<(), DiskError> {
    match std::fs::read_to_string("/proc/mounts") {
        Ok(_) => Ok(()),
        Err(err) => Err(DiskError::Enumeration(format!("/proc/mounts: {err}"))),
    }
}

#[cfg(not(target_os = "linux"))]
fn confirm_empty_mount_table() -> Result<(), DiskError> {
    Ok(())
}

impl MountProbe for SysinfoProbe {
    fn partitions(&self) -> Result<Vec<Partition>, DiskError> {
        let disks = Disks::new_with_refreshed_list();

        let mut partitions = Vec::new();
        for d in disks.list() {
            let fs_type = d.file_system().to_str().map(|s| s.to_string());
            if !self.include_pseudo_fs && is_pseudo_fs(fs_type.as_deref()) {
                continue;
            }
            let device = d
                .name()
                .to_str()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string());
            partitions.push(Partition {
                mount_point: d.mount_point().to_string_lossy().into_owned(),
                device,
                fs_type,
                total_bytes: d.total_space(),
                available_bytes: d.available_space(),
            });
        }

        if partitions.is_empty() {
            confirm_empty_mount_table()?;
        }

        debug!(
            partitions = partitions.len(),
            include_pseudo_fs = self.include_pseudo_fs,
            "partitions_listed"
        );
        Ok(partitions)
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, DiskError> {
        std::fs::canonicalize(path).map_err(|err| match err.kind() {
            io::ErrorKind::PermissionDenied => DiskError::PermissionDenied(path.to_path_buf()),
            // Tout autre échec de résolution vaut « chemin introuvable » :
            // le chemin ne désigne aucun volume monté accessible.
            _ => DiskError::PathNotFound(path.to_path_buf()),
        })
    }
}
