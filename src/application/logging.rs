use tracing::dispatcher;
use tracing_subscriber::{prelude::*, EnvFilter};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap()
}

/// Initialise le logging :
/// - journald si présent (/run/systemd/journal/socket)
/// - sinon fallback sur stderr (fmt)
///
/// Sans effet si un subscriber global est déjà en place.
pub fn init_logging() {
    if dispatcher::has_been_set() {
        return;
    }

    #[cfg(feature = "journald")]
    if std::path::Path::new("/run/systemd/journal/socket").exists() {
        if let Ok(layer) = tracing_journald::layer() {
            if tracing_subscriber::registry()
                .with(env_filter())
                .with(layer)
                .try_init()
                .is_ok()
            {
                return;
            }
        }
    }

    // Fallback: stderr lisible (pas d'ANSI forcé)
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init();
}
