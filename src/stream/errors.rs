use std::error::Error;
use strum_macros::Display;
use crate::net::NetOpError;

#[derive(Clone, Debug, Display)]
pub enum SockError {
    InvalidUrl(String),
    InvalidUrlScheme(String),
    MissingHostName,
    UnableToResolveHostName(String),
    IoError(String),
    TlsError(String)
}

impl Error for SockError {}

impl From<NetOpError> for SockError {
    fn from(f: NetOpError) -> Self {
        match f {
            NetOpError::InvalidUrl(s) => SockError::InvalidUrl(s),
            NetOpError::InvalidUrlScheme(s) => SockError::InvalidUrlScheme(s),
            NetOpError::MissingHostName => SockError::MissingHostName,
            NetOpError::UnableToResolveHostName(s) => SockError::UnableToResolveHostName(s)
        }
    }
}
