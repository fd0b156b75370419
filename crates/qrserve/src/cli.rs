use std::{io::Write, path::PathBuf};

use clap::{ArgAction, CommandFactory, Parser};

use crate::config::{Config, DEFAULT_HOST};

const EXAMPLES: &str = "\
Examples:
    qrserve ./
    qrserve -h 127.0.0.1 -p 8080 /path/to/folder/";

/// qrserve - share a directory over HTTP and print a QR code for its URL
#[derive(Debug, Parser)]
#[command(
    name = "qrserve",
    version,
    disable_help_flag = true,
    override_usage = "qrserve [-h host] [-p port] <path>",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// directory to serve
    pub path: Option<PathBuf>,

    /// host to serve on (default: 0.0.0.0)
    #[arg(short = 'h', long, value_name = "host")]
    pub host: Option<String>,

    /// port to listen on (default: auto)
    #[arg(
        short = 'p',
        long,
        value_name = "port",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: Option<u16>,

    /// print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Build the startup configuration, or `None` when no path was given
    #[must_use]
    pub fn config(&self) -> Option<Config> {
        let path = self.path.as_ref()?;
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        Some(Config::new(host, self.port, path))
    }

    /// Whether any option was passed on the command line
    #[must_use]
    pub fn has_options(&self) -> bool {
        self.host.is_some() || self.port.is_some()
    }

    /// Print usage to stderr
    ///
    /// # Errors
    /// Returns an error if stderr cannot be written to
    pub fn print_usage(&self) -> std::io::Result<()> {
        let mut stderr = std::io::stderr().lock();
        if self.has_options() {
            writeln!(stderr, "Did you forget to provide `path` argument?\n")?;
        }
        write!(stderr, "{}", Self::command().render_help())
    }
}
