use std::time::Duration;

use url::Url;

use crate::net;
use crate::net::NetOpError;

pub const DEFAULT_ENDPOINT: &str = "wss://xrplcluster.com/";
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const CLOSE_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub tick_interval: Duration,
    pub close_timeout: Duration
}

impl ClientConfig {

    pub fn new(endpoint: Url) -> Result<ClientConfig, NetOpError> {
        net::use_tls_and_port(&endpoint)?;
        net::host_name(&endpoint)?;
        Ok(ClientConfig { endpoint, tick_interval: TICK_INTERVAL, close_timeout: CLOSE_TIMEOUT })
    }

    pub fn compiled_in() -> Result<ClientConfig, NetOpError> {
        let endpoint = Url::parse(DEFAULT_ENDPOINT)
            .map_err(|e| NetOpError::InvalidUrl(e.to_string()))?;
        ClientConfig::new(endpoint)
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_close_timeout(mut self, close_timeout: Duration) -> Self {
        self.close_timeout = close_timeout;
        self
    }
}
