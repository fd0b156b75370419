use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use tokio::net::{TcpListener, UdpSocket};
use tracing::{debug, warn};

use crate::{
    config::PortSelection,
    error::{Error, Result},
};

/// Remote endpoint used to let the OS pick the outbound interface.
/// Nothing is sent to it.
pub const OUTBOUND_PROBE_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);

/// Bind a TCP listener on `host:port` and release it straight away
///
/// # Errors
/// Returns the bind error if the address is unavailable or `host` does not resolve
pub async fn try_listen(host: &str, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    debug!("Probed {}", listener.local_addr()?);
    Ok(())
}

/// Pick the port the server will listen on
///
/// An explicit port is probed once with no fallback. Otherwise the
/// candidate ports are tried in order.
///
/// # Errors
/// Returns [`Error::PortUnavailable`] if an explicit port is taken, or
/// [`Error::NoPortAvailable`] if every candidate is taken
pub async fn select_port(host: &str, selection: PortSelection) -> Result<u16> {
    match selection {
        PortSelection::Explicit(port) => match try_listen(host, port).await {
            Ok(()) => Ok(port),
            Err(source) => Err(Error::PortUnavailable {
                host: host.to_string(),
                port,
                source,
            }),
        },
        PortSelection::Auto => probe_candidates(host, &selection.candidates()).await,
    }
}

/// Return the first port in `ports` that can be bound on `host`
///
/// # Errors
/// Returns [`Error::NoPortAvailable`] if none of them can be bound
pub async fn probe_candidates(host: &str, ports: &[u16]) -> Result<u16> {
    for &port in ports {
        match try_listen(host, port).await {
            Ok(()) => return Ok(port),
            Err(e) => warn!("port {port} is not available: {e}"),
        }
    }

    Err(Error::NoPortAvailable {
        host: host.to_string(),
        ports: ports.to_vec(),
    })
}

/// Local address the OS would use to reach the internet
///
/// # Errors
/// Returns [`Error::OutboundIp`] if the probe socket cannot be opened or connected
pub async fn outbound_ip() -> Result<IpAddr> {
    outbound_ip_via(OUTBOUND_PROBE_ADDR).await
}

/// Local address the OS would use to reach `target`
///
/// Connecting a UDP socket only selects a route; no packets are sent.
///
/// # Errors
/// Returns [`Error::OutboundIp`] if the probe socket cannot be opened or connected
pub async fn outbound_ip_via(target: SocketAddr) -> Result<IpAddr> {
    let bind_addr = match target {
        SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    };

    let socket = UdpSocket::bind(bind_addr).await.map_err(Error::OutboundIp)?;
    socket.connect(target).await.map_err(Error::OutboundIp)?;
    let local = socket.local_addr().map_err(Error::OutboundIp)?;

    debug!("Outbound address toward {target} is {local}");
    Ok(local.ip())
}

/// URL a second device should open
#[must_use]
pub fn share_url(ip: IpAddr, port: u16) -> String {
    format!("http://{}/", SocketAddr::new(ip, port))
}
