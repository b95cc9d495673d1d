pub mod logging;

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{debug, error};

use crate::domain::{DiskError, DiskUsage, MountProbe, Partition};
use crate::infrastructure::sysinfo::SysinfoProbe;

/// Racine par défaut quand l'appelant ne fournit pas de chemin.
#[cfg(unix)]
pub const DEFAULT_ROOT: &str = "/";
#[cfg(windows)]
pub const DEFAULT_ROOT: &str = "C:\\";

/// Liste les partitions montées (ordre OS, non trié). Une seule
/// tentative ; réessayer appartient à l'appelant.
pub fn list_partitions() -> Result<Vec<Partition>, DiskError> {
    list_partitions_with(&SysinfoProbe::new())
}

pub fn list_partitions_with(probe: &dyn MountProbe) -> Result<Vec<Partition>, DiskError> {
    probe.partitions().map_err(|err| {
        error!(r#where = "partitions", error = %err, "disk_error");
        err
    })
}

/// Projection « points de montage seulement ».
pub fn mount_points() -> Result<Vec<String>, DiskError> {
    Ok(list_partitions()?
        .into_iter()
        .map(|p| p.mount_point)
        .collect())
}

/// Occupation (en octets) du volume qui contient `path`.
pub fn get_disk_usage(path: impl AsRef<Path>) -> Result<DiskUsage, DiskError> {
    get_disk_usage_with(&SysinfoProbe::new(), path.as_ref())
}

pub fn get_disk_usage_with(probe: &dyn MountProbe, path: &Path) -> Result<DiskUsage, DiskError> {
    let canonical = probe.resolve(path).map_err(|err| {
        error!(r#where = "resolve", path = %path.display(), error = %err, "disk_error");
        err
    })?;
    let partitions = list_partitions_with(probe)?;

    // Un montage peut disparaître entre l'énumération et la requête :
    // même verdict qu'un chemin inexistant.
    let enclosing = enclosing_partition(&partitions, &canonical)
        .ok_or_else(|| DiskError::PathNotFound(path.to_path_buf()))?;

    let usage = DiskUsage {
        total_bytes: enclosing.total_bytes,
        used_bytes: enclosing
            .total_bytes
            .saturating_sub(enclosing.available_bytes),
        free_bytes: enclosing.available_bytes,
    };

    debug!(
        path = %path.display(),
        mount = %enclosing.mount_point,
        total_bytes = usage.total_bytes,
        used_bytes = usage.used_bytes,
        free_bytes = usage.free_bytes,
        "usage_resolved"
    );
    Ok(usage)
}

/// Rapport texte figé : libellés `Total`/`Used`/`Free`, valeurs en Gio
/// entiers, chemin de l'appelant repris tel quel. Toute erreur de
/// [`get_disk_usage`] remonte inchangée, sans sortie partielle.
pub fn analyze_disk(path: impl AsRef<Path>) -> Result<String, DiskError> {
    analyze_disk_with(&SysinfoProbe::new(), path.as_ref())
}

pub fn analyze_disk_with(probe: &dyn MountProbe, path: &Path) -> Result<String, DiskError> {
    let usage = get_disk_usage_with(probe, path)?;
    Ok(format_report(path, &usage))
}

/// Variante bornée de [`get_disk_usage`], pour les montages réseau qui
/// peuvent bloquer indéfiniment. Le thread de sonde est détaché en cas
/// de dépassement : un stat NFS coincé n'est pas annulable.
pub fn get_disk_usage_timeout(
    path: impl AsRef<Path>,
    wait: Duration,
) -> Result<DiskUsage, DiskError> {
    bounded(path.as_ref(), wait, |p| get_disk_usage(&p))
}

/// Variante bornée de [`analyze_disk`].
pub fn analyze_disk_timeout(path: impl AsRef<Path>, wait: Duration) -> Result<String, DiskError> {
    bounded(path.as_ref(), wait, |p| analyze_disk(&p))
}

fn bounded<T, F>(path: &Path, wait: Duration, job: F) -> Result<T, DiskError>
where
    T: Send + 'static,
    F: FnOnce(PathBuf) -> Result<T, DiskError> + Send + 'static,
{
    let owned = path.to_path_buf();
    let (tx, rx) = mpsc::channel();
    let job_path = owned.clone();
    thread::spawn(move || {
        let _ = tx.send(job(job_path));
    });
    match rx.recv_timeout(wait) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            error!(r#where = "bounded", path = %owned.display(), waited = ?wait, "disk_timeout");
            Err(DiskError::Timeout {
                path: owned,
                waited: wait,
            })
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(DiskError::Enumeration(
            "disk probe thread terminated unexpectedly".into(),
        )),
    }
}

/// Partition dont le point de montage est le plus long préfixe (par
/// composants) du chemin canonique.
fn enclosing_partition<'a>(partitions: &'a [Partition], canonical: &Path) -> Option<&'a Partition> {
    partitions
        .iter()
        .filter(|p| canonical.starts_with(&p.mount_point))
        .max_by_key(|p| Path::new(&p.mount_point).components().count())
}

fn format_report(path: &Path, usage: &DiskUsage) -> String {
    format!(
        "Disk {}:\nTotal: {}GB\nUsed: {}GB\nFree: {}GB",
        path.display(),
        usage.total_gib(),
        usage.used_gib(),
        usage.free_gib(),
    )
}

#[cfg(feature = "config")]
use crate::domain::GlanceConfig;

#[cfg(feature = "config")]
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<GlanceConfig, DiskError> {
    let path_ref = path.as_ref();
    let data = std::fs::read_to_string(path_ref).map_err(|e| {
        error!(path = %path_ref.display(), error = %e, "config_error");
        DiskError::Config(format!("read {}: {e}", path_ref.display()))
    })?;
    toml::from_str::<GlanceConfig>(&data).map_err(|e| {
        error!(path = %path_ref.display(), error = %e, "config_error");
        DiskError::Config(format!("toml parse: {e}"))
    })
}
