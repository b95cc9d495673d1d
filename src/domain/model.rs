#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const GIB: u64 = 1 << 30;

/// Une partition/point de montage visible de l'OS.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Partition {
    /// Point de montage (ex: `/`, `/home`…)
    pub mount_point: String,
    /// Périphérique source si connu (ex: `/dev/sda1`).
    pub device: Option<String>,
    /// Type de FS si disponible (ex: `ext4`, `xfs`…)
    pub fs_type: Option<String>,
    /// Espace total en octets, au moment de l'énumération.
    pub total_bytes: u64,
    /// Espace disponible en octets, au moment de l'énumération.
    pub available_bytes: u64,
}

/// Occupation d'un volume, en octets.
///
/// Instantané valable au moment de la requête seulement ; `total ==
/// used + free` est attendu de l'OS mais pas re-vérifié ici.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiskUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
}

impl DiskUsage {
    /// Gio entiers, division plancher par 2^30 (les fractions sont
    /// tronquées, pas arrondies).
    pub fn total_gib(&self) -> u64 {
        self.total_bytes / GIB
    }

    pub fn used_gib(&self) -> u64 {
        self.used_bytes / GIB
    }

    pub fn free_gib(&self) -> u64 {
        self.free_bytes / GIB
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gib_conversion_floors() {
        let du = DiskUsage {
            total_bytes: GIB + 1,
            used_bytes: GIB - 1,
            free_bytes: 2,
        };
        assert_eq!(du.total_gib(), 1);
        assert_eq!(du.used_gib(), 0);
        assert_eq!(du.free_gib(), 0);
    }

    #[test]
    fn gib_conversion_exact_multiples() {
        let du = DiskUsage {
            total_bytes: 10 * GIB,
            used_bytes: 4 * GIB,
            free_bytes: 6 * GIB,
        };
        assert_eq!(du.total_gib(), 10);
        assert_eq!(du.used_gib(), 4);
        assert_eq!(du.free_gib(), 6);
    }
}
