use clap::Parser;
use miette::{IntoDiagnostic, Result};
use qrserve::{app, cli::Cli, o11y};

#[tokio::main]
async fn main() -> Result<()> {
    o11y::init();

    let cli = Cli::parse();
    let Some(config) = cli.config() else {
        cli.print_usage().into_diagnostic()?;
        return Ok(());
    };

    app::run(&config).await?;
    Ok(())
}
