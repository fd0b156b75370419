use std::{path::Path, sync::Arc};

use axum::{
    Router,
    extract::Request,
    handler::Handler,
    http::{HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
};
use tokio::net::TcpListener;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, error, info};

use crate::error::{Error, Result};

pub mod listing;

/// Unix epoch as an HTTP date
pub const EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Headers set on every response so clients always refetch
pub const NO_CACHE_HEADERS: [(&str, &str); 4] = [
    ("expires", EPOCH),
    ("cache-control", "no-cache, private, max-age=0"),
    ("pragma", "no-cache"),
    ("x-accel-expires", "0"),
];

/// Validators stripped from requests so the file service never answers 304
pub const CONDITIONAL_HEADERS: [&str; 6] = [
    "etag",
    "if-modified-since",
    "if-match",
    "if-none-match",
    "if-range",
    "if-unmodified-since",
];

/// Strip conditional request headers and force no-cache response headers
pub async fn no_cache(mut request: Request, next: Next) -> Response {
    let headers = request.headers_mut();
    for name in CONDITIONAL_HEADERS {
        headers.remove(name);
    }

    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    for (name, value) in NO_CACHE_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    response
}

/// Build the application serving `root`
pub fn router(root: &Path) -> Router {
    let listing = listing::list_directory.with_state(Arc::new(root.to_path_buf()));
    let serve_dir = ServeDir::new(root).fallback(listing);

    Router::new()
        .fallback_service(serve_dir)
        .layer(middleware::from_fn(no_cache))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Bind the HTTP listener on `host:port`
///
/// # Errors
/// Returns [`Error::Bind`] if the address cannot be bound
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .map_err(|source| Error::Bind {
            addr: display_addr(host, port),
            source,
        })
}

/// Serve `root` on `listener` until Ctrl-C or SIGTERM
///
/// # Errors
/// Returns [`Error::Serve`] if the server fails while running
pub async fn serve(listener: TcpListener, root: &Path) -> Result<()> {
    let addr = listener.local_addr().map_err(Error::Serve)?;

    info!("Serving {} on {addr}", root.display());

    axum::serve(listener, router(root))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)?;

    info!("HTTP server stopped");
    Ok(())
}

fn display_addr(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to setup SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down..."),
        () = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
