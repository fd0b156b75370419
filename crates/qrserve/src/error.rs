#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum Error {
    #[error("port {port} is not available on {host}")]
    #[diagnostic(
        code(qrserve::port_unavailable),
        help("pick another port with -p, or omit -p to probe the default candidates")
    )]
    PortUnavailable {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("port bind failed: none of {ports:?} is available on {host}")]
    #[diagnostic(
        code(qrserve::no_port_available),
        help("free one of the candidate ports or pass an explicit port with -p")
    )]
    NoPortAvailable { host: String, ports: Vec<u16> },

    #[error("Failed to determine outbound IP address: {0}")]
    #[diagnostic(
        code(qrserve::outbound_ip),
        help("check that at least one network interface is up and has a route")
    )]
    OutboundIp(#[source] std::io::Error),

    #[error("Failed to encode QR code: {0}")]
    #[diagnostic(code(qrserve::qr_code))]
    QrCode(#[from] qrcode::types::QrError),

    #[error("Failed to bind HTTP socket on {addr}: {source}")]
    #[diagnostic(code(qrserve::bind))]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    #[diagnostic(code(qrserve::serve))]
    Serve(#[source] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
