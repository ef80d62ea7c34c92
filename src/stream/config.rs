use url::Url;
use std::net::SocketAddr;
use crate::net;
use crate::stream::errors::SockError;

pub struct SockConfig {
    pub use_tls: bool,
    pub address: SocketAddr,
    pub host_name: String,
}

impl SockConfig {

    pub async fn new(endpoint: &Url) -> Result<SockConfig, SockError> {
        let (use_tls, port) = net::use_tls_and_port(endpoint)?;
        let host_name = net::host_name(endpoint)?;
        let address = net::resolve_address(endpoint.clone(), port).await?;
        Ok(SockConfig { use_tls, address, host_name })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn plain_loopback_config() {
        let url = Url::parse("ws://127.0.0.1:4100/").unwrap();
        let config = SockConfig::new(&url).await.unwrap();
        assert!(!config.use_tls);
        assert_eq!(config.address.port(), 4100);
        assert_eq!(config.host_name, "127.0.0.1");
    }

    #[tokio::test]
    async fn unknown_scheme_fails_before_resolving() {
        let url = Url::parse("tcp://127.0.0.1:4100/").unwrap();
        match SockConfig::new(&url).await {
            Err(SockError::InvalidUrlScheme(s)) => assert_eq!(s, "tcp"),
            _ => panic!("expected InvalidUrlScheme")
        }
    }
}
