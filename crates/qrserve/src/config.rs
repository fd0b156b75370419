use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

/// Ports probed in order when no explicit port is requested
pub const CANDIDATE_PORTS: [u16; 4] = [5000, 8000, 5001, 8001];

/// Bind host used when `-h` is not given
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSelection {
    /// Probe [`CANDIDATE_PORTS`] and take the first free one
    Auto,
    /// Use exactly this port, failing if it is taken
    Explicit(u16),
}

impl PortSelection {
    /// Ports to probe, in order
    #[must_use]
    pub fn candidates(&self) -> Cow<'static, [u16]> {
        match self {
            Self::Auto => Cow::Borrowed(&CANDIDATE_PORTS),
            Self::Explicit(port) => Cow::Owned(vec![*port]),
        }
    }
}

impl From<Option<u16>> for PortSelection {
    fn from(port: Option<u16>) -> Self {
        port.map_or(Self::Auto, Self::Explicit)
    }
}

/// Startup configuration, built once from the command line
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind the HTTP server on
    pub host: String,

    /// How the listening port is chosen
    pub port: PortSelection,

    /// Directory served as the document root
    pub root: PathBuf,
}

impl Config {
    #[must_use]
    pub fn new(host: impl Into<String>, port: Option<u16>, root: impl Into<PathBuf>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            root: root.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the document root exists and is a directory
    #[must_use]
    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }
}
