use url::Url;
use std::net::SocketAddr;
use strum_macros::Display;
use rand::seq::SliceRandom;
use std::error::Error;

#[derive(Clone, Debug, Display, PartialEq)]
pub enum NetOpError {
    InvalidUrl(String),
    InvalidUrlScheme(String),
    MissingHostName,
    UnableToResolveHostName(String)
}

impl Error for NetOpError {}

/// `ws` dials plain TCP, `wss` wraps the socket in TLS.
pub fn use_tls_and_port(endpoint: &Url) -> Result<(bool, u16), NetOpError> {
    let use_tls = match endpoint.scheme() {
        "ws" => false,
        "wss" => true,
        s => return Err(NetOpError::InvalidUrlScheme(s.into()))
    };
    let port = endpoint.port().unwrap_or(if use_tls { 443 } else { 80 });
    Ok((use_tls, port))
}

pub fn host_name(endpoint: &Url) -> Result<String, NetOpError> {
    endpoint.host_str()
        .filter(|host| !host.is_empty())
        .map(String::from)
        .ok_or(NetOpError::MissingHostName)
}

/// Resolves on the blocking pool and picks one of the addresses at random.
pub async fn resolve_address(endpoint: Url, port: u16) -> Result<SocketAddr, NetOpError> {
    let lookup = tokio::task::spawn_blocking(move || -> Result<SocketAddr, NetOpError> {
        let addrs = endpoint.socket_addrs(|| Some(port))
            .map_err(|e| NetOpError::UnableToResolveHostName(e.to_string()))?;
        addrs.choose(&mut rand::thread_rng())
            .copied()
            .ok_or_else(|| NetOpError::UnableToResolveHostName(endpoint.host_str().unwrap_or("null").into()))
    });

    match lookup.await {
        Ok(resolved) => resolved,
        Err(e) => Err(NetOpError::UnableToResolveHostName(e.to_string()))
    }
}
