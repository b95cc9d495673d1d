pub mod error;
pub mod model;
pub mod probe;

#[cfg(feature = "config")]
pub mod config;

pub use error::DiskError;
pub use model::{DiskUsage, Partition};
pub use probe::MountProbe;

#[cfg(feature = "config")]
pub use config::GlanceConfig;
