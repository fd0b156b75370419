use tracing::{info, warn};

use crate::{config::Config, error::Result, net, qr, ui, web};

/// Run the startup sequence and serve until shut down
///
/// # Errors
/// Returns the first error hit while starting up or serving
pub async fn run(config: &Config) -> Result<()> {
    if !config.root_exists() {
        warn!(
            "{} is not a directory, every request will return 404",
            config.root().display()
        );
    }

    let port = net::select_port(&config.host, config.port).await?;
    info!("Selected port {port}");

    let ip = net::outbound_ip().await?;
    let url = net::share_url(ip, port);

    ui::status(&format!("Sharing {}", config.root().display()));
    ui::field("Listening", &format!("{}:{port}", config.host));
    ui::field("URL", &url);
    ui::qr_banner(&qr::render(&url)?, &url);

    let listener = web::bind(&config.host, port).await?;
    web::serve(listener, config.root()).await
}
