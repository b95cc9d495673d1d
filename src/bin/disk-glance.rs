#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "disk-glance",
    version,
    about = "Résume l'espace disque des volumes montés"
)]
struct Opts {
    /// Chemin à analyser (défaut : racine du système de fichiers)
    #[arg(long, value_name = "PATH")]
    path: Option<PathBuf>,

    /// Lister seulement les points de montage, sans rapport d'usage
    #[arg(long)]
    list: bool,

    /// Inclure aussi les pseudo-FS (tmpfs, proc…)
    #[arg(long)]
    all: bool,

    /// Borne d'attente en secondes (montages réseau lents)
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Fichier de config TOML (feature `config`)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    #[cfg(not(feature = "config"))]
    if opts.config.is_some() {
        anyhow::bail!("--config nécessite la feature `config` (cargo run --features \"cli config\").");
    }

    #[cfg(feature = "config")]
    let (include_pseudo, timeout) = if let Some(p) = &opts.config {
        let cfg = disk_glance::load_config_from_path(p)?;
        if let Some(filter) = cfg.rust_log {
            std::env::set_var("RUST_LOG", filter);
        }
        (
            opts.all || cfg.include_pseudo_fs,
            opts.timeout.or(cfg.timeout_seconds),
        )
    } else {
        (opts.all, opts.timeout)
    };
    #[cfg(not(feature = "config"))]
    let (include_pseudo, timeout) = (opts.all, opts.timeout);

    disk_glance::init_logging();

    let probe = disk_glance::SysinfoProbe::new().with_pseudo_fs(include_pseudo);

    let partitions = disk_glance::list_partitions_with(&probe)?;
    let mounts: Vec<&str> = partitions.iter().map(|p| p.mount_point.as_str()).collect();
    println!("Available partitions: {mounts:?}");
    if opts.list {
        return Ok(());
    }

    let path = opts
        .path
        .unwrap_or_else(|| PathBuf::from(disk_glance::DEFAULT_ROOT));
    let report = match timeout.filter(|secs| *secs > 0) {
        Some(secs) => disk_glance::analyze_disk_timeout(&path, Duration::from_secs(secs))?,
        None => disk_glance::analyze_disk_with(&probe, &path)?,
    };
    println!("{report}");
    Ok(())
}
