use std::error::Error;
use strum_macros::Display;
use crate::net::NetOpError;
use crate::stream::errors::SockError;

#[derive(Display, Debug)]
pub enum ConnectionError {
    SocketError(SockError),
    NetOpError(NetOpError),
    HandshakeError(String)
}

impl Error for ConnectionError {}

impl From<SockError> for ConnectionError {
    fn from(e: SockError) -> Self { ConnectionError::SocketError(e) }
}

impl From<NetOpError> for ConnectionError {
    fn from(e: NetOpError) -> Self {
        ConnectionError::NetOpError(e)
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for ConnectionError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        ConnectionError::HandshakeError(e.to_string())
    }
}
