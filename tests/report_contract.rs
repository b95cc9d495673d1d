use std::path::{Path, PathBuf};
use std::time::Duration;

use disk_glance::{DiskError, MountProbe, Partition};

const GIB: u64 = 1 << 30;

/// Sonde factice : pas de système de fichiers réel sous les tests.
struct FakeProbe {
    partitions: Vec<Partition>,
}

impl FakeProbe {
    fn new(partitions: Vec<Partition>) -> Self {
        Self { partitions }
    }
}

impl MountProbe for FakeProbe {
    fn partitions(&self) -> Result<Vec<Partition>, DiskError> {
        Ok(self.partitions.clone())
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, DiskError> {
        if self
            .partitions
            .iter()
            .any(|p| path.starts_with(&p.mount_point))
        {
            Ok(path.to_path_buf())
        } else {
            Err(DiskError::PathNotFound(path.to_path_buf()))
        }
    }
}

/// Sonde dont l'énumération échoue toujours.
struct BrokenProbe;

impl MountProbe for BrokenProbe {
    fn partitions(&self) -> Result<Vec<Partition>, DiskError> {
        Err(DiskError::Enumeration("mount table unavailable".into()))
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, DiskError> {
        Ok(path.to_path_buf())
    }
}

fn part(mount: &str, total: u64, available: u64) -> Partition {
    Partition {
        mount_point: mount.to_string(),
        device: Some(format!("/dev/fake{}", mount.len())),
        fs_type: Some("ext4".to_string()),
        total_bytes: total,
        available_bytes: available,
    }
}

#[test]
fn example_volume_renders_exact_report() {
    let probe = FakeProbe::new(vec![part("/", 10 * GIB, 6 * GIB)]);
    let report = disk_glance::analyze_disk_with(&probe, Path::new("/")).expect("report");
    assert_eq!(report, "Disk /:\nTotal: 10GB\nUsed: 4GB\nFree: 6GB");
}

#[test]
fn usage_reports_bytes_for_enclosing_volume() {
    let probe = FakeProbe::new(vec![
        part("/", 10 * GIB, 6 * GIB),
        part("/home", 20 * GIB, 5 * GIB),
    ]);
    let du = disk_glance::get_disk_usage_with(&probe, Path::new("/home/user")).expect("usage");
    assert_eq!(du.total_bytes, 20 * GIB);
    assert_eq!(du.used_bytes, 15 * GIB);
    assert_eq!(du.free_bytes, 5 * GIB);
    assert_eq!(du.used_bytes + du.free_bytes, du.total_bytes);
}

#[test]
fn conversion_truncates_fractional_gib() {
    let probe = FakeProbe::new(vec![part("/", GIB + 1, 1)]);
    let report = disk_glance::analyze_disk_with(&probe, Path::new("/")).expect("report");
    assert!(report.contains("Total: 1GB"));
}

#[test]
fn report_carries_labels_and_supplied_path() {
    let probe = FakeProbe::new(vec![part("/", 10 * GIB, 6 * GIB)]);
    let report =
        disk_glance::analyze_disk_with(&probe, Path::new("/var/log")).expect("report");
    assert!(report.contains("Total"));
    assert!(report.contains("Used"));
    assert!(report.contains("Free"));
    // Le chemin fourni, pas le point de montage résolu.
    assert!(report.contains("/var/log"));
}

#[test]
fn missing_path_fails_without_partial_output() {
    let probe = FakeProbe::new(vec![part("/data", 10 * GIB, 6 * GIB)]);
    let usage_err =
        disk_glance::get_disk_usage_with(&probe, Path::new("/no/such/path")).unwrap_err();
    assert!(matches!(usage_err, DiskError::PathNotFound(_)));

    let report_err =
        disk_glance::analyze_disk_with(&probe, Path::new("/no/such/path")).unwrap_err();
    assert!(matches!(report_err, DiskError::PathNotFound(_)));
}

#[test]
fn vanished_mount_is_path_not_found() {
    // Le chemin se résout encore, mais plus aucun montage ne le couvre.
    struct HalfGone;
    impl MountProbe for HalfGone {
        fn partitions(&self) -> Result<Vec<Partition>, DiskError> {
            Ok(Vec::new())
        }
        fn resolve(&self, path: &Path) -> Result<PathBuf, DiskError> {
            Ok(path.to_path_buf())
        }
    }
    let err = disk_glance::get_disk_usage_with(&HalfGone, Path::new("/mnt/data")).unwrap_err();
    assert!(matches!(err, DiskError::PathNotFound(_)));
}

#[test]
fn enumeration_failure_propagates_unchanged() {
    let err = disk_glance::list_partitions_with(&BrokenProbe).unwrap_err();
    assert!(matches!(err, DiskError::Enumeration(_)));

    // get_disk_usage dépend de l'énumération : même verdict.
    let err = disk_glance::get_disk_usage_with(&BrokenProbe, Path::new("/")).unwrap_err();
    assert!(matches!(err, DiskError::Enumeration(_)));
}

#[test]
fn empty_enumeration_is_a_valid_success() {
    let probe = FakeProbe::new(Vec::new());
    let parts = disk_glance::list_partitions_with(&probe).expect("empty list");
    assert!(parts.is_empty());
}

#[test]
fn enumeration_preserves_probe_order() {
    let probe = FakeProbe::new(vec![
        part("/mnt/b", GIB, GIB),
        part("/", GIB, GIB),
        part("/mnt/a", GIB, GIB),
    ]);
    let mounts: Vec<String> = disk_glance::list_partitions_with(&probe)
        .expect("list")
        .into_iter()
        .map(|p| p.mount_point)
        .collect();
    assert_eq!(mounts, vec!["/mnt/b", "/", "/mnt/a"]);
}

#[test]
fn consecutive_queries_are_idempotent() {
    let probe = FakeProbe::new(vec![part("/", 10 * GIB, 6 * GIB)]);
    let first = disk_glance::get_disk_usage_with(&probe, Path::new("/")).expect("first");
    let second = disk_glance::get_disk_usage_with(&probe, Path::new("/")).expect("second");
    assert_eq!(first, second);
}

#[test]
fn permission_error_propagates_from_resolve() {
    struct Forbidden;
    impl MountProbe for Forbidden {
        fn partitions(&self) -> Result<Vec<Partition>, DiskError> {
            Ok(vec![part("/", GIB, GIB)])
        }
        fn resolve(&self, path: &Path) -> Result<PathBuf, DiskError> {
            Err(DiskError::PermissionDenied(path.to_path_buf()))
        }
    }
    let err = disk_glance::analyze_disk_with(&Forbidden, Path::new("/root/private")).unwrap_err();
    assert!(matches!(err, DiskError::PermissionDenied(_)));
}

#[test]
fn bounded_query_passes_result_through() {
    // Le chemin n'existe pas : la sonde réelle répond vite, l'erreur
    // doit traverser la borne inchangée.
    let result =
        disk_glance::get_disk_usage_timeout("/no/such/path", Duration::from_secs(5));
    assert!(matches!(result, Err(DiskError::PathNotFound(_))));
}
