use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _};

/// Installs the global subscriber, filtered by `RUST_LOG` and `info` when unset
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter).with(fmt::layer());

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("logging is already initialized");
        return;
    }

    // forward `log` records from dependencies
    if let Err(error) = tracing_log::LogTracer::init() {
        tracing::warn!("unable to forward log records: {error}");
    }
}
