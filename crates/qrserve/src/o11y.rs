use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "qrserve=info,tower_http=info";

/// Install the global tracing subscriber
///
/// Filter comes from `RUST_LOG`. Logs go to stderr so the QR code on stdout
/// is not interleaved with them.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
