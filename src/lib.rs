//! disk-glance — résumé rapide de l'espace disque des volumes montés.
//!
//! # Examples
//! ```no_run
//! let report = disk_glance::analyze_disk("/").expect("report");
//! assert!(report.contains("Total"));
//! ```

#![forbid(unsafe_code)]

mod application;
pub mod domain;
mod infrastructure;

pub use domain::{DiskError, DiskUsage, MountProbe, Partition};

#[cfg(feature = "config")]
pub use domain::GlanceConfig;

// API fonctionnelle
pub use application::{
    analyze_disk, analyze_disk_timeout, analyze_disk_with, get_disk_usage,
    get_disk_usage_timeout, get_disk_usage_with, list_partitions, list_partitions_with,
    mount_points, DEFAULT_ROOT,
};

#[cfg(feature = "config")]
pub use application::load_config_from_path;

pub use application::logging::init_logging;

pub use infrastructure::sysinfo::SysinfoProbe;
