use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project::pin_project;
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::net::TcpStream;
use tokio_native_tls::TlsConnector;
use tokio_native_tls::TlsStream;

use crate::stream::config::SockConfig;
use crate::stream::errors::SockError;

/// Byte stream underneath the WebSocket framing.
#[pin_project(project = TransportProj)]
#[derive(Debug)]
pub enum Transport {
    Plain(#[pin] TcpStream),
    Tls(#[pin] TlsStream<TcpStream>)
}

pub async fn open(config: SockConfig) -> Result<Transport, SockError> {
    if config.use_tls {
        tls(config).await.map(Transport::Tls)
    } else {
        tcp(config).await.map(Transport::Plain)
    }
}

pub async fn tcp(config: SockConfig) -> Result<TcpStream, SockError> {
    dial(&config).await
}

pub async fn tls(config: SockConfig) -> Result<TlsStream<TcpStream>, SockError> {
    let plain = dial(&config).await?;
    let connector = native_tls::TlsConnector::new()
        .map(TlsConnector::from)
        .map_err(|e| SockError::TlsError(e.to_string()))?;

    connector.connect(&config.host_name, plain).await
        .map_err(|e| SockError::TlsError(e.to_string()))
}

async fn dial(config: &SockConfig) -> Result<TcpStream, SockError> {
    let stream = TcpStream::connect(config.address).await
        .map_err(|e| SockError::IoError(e.to_string()))?;
    if let Err(e) = stream.set_nodelay(true) {
        log::debug!("nodelay not set on {}. {}", config.address, e);
    }
    Ok(stream)
}

impl AsyncRead for Transport {
    fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &mut ReadBuf<'_>) -> Poll<io::Result<()>> {
        match self.project() {
            TransportProj::Plain(s) => s.poll_read(cx, buf),
            TransportProj::Tls(s) => s.poll_read(cx, buf)
        }
    }
}

impl AsyncWrite for Transport {
    fn poll_write(self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        match self.project() {
            TransportProj::Plain(s) => s.poll_write(cx, buf),
            TransportProj::Tls(s) => s.poll_write(cx, buf)
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.project() {
            TransportProj::Plain(s) => s.poll_flush(cx),
            TransportProj::Tls(s) => s.poll_flush(cx)
        }
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.project() {
            TransportProj::Plain(s) => s.poll_shutdown(cx),
            TransportProj::Tls(s) => s.poll_shutdown(cx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn plain_transport_moves_bytes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 5];
            sock.read_exact(&mut buf).await.unwrap();
            sock.write_all(&buf).await.unwrap();
        });

        let config = SockConfig { use_tls: false, address, host_name: "127.0.0.1".into() };
        let mut transport = open(config).await.unwrap();
        assert!(matches!(transport, Transport::Plain(_)));

        transport.write_all(b"hello").await.unwrap();
        let mut echoed = [0u8; 5];
        transport.read_exact(&mut echoed).await.unwrap();
        assert_eq!(&echoed, b"hello");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn refused_connection_is_io_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let config = SockConfig { use_tls: false, address, host_name: "127.0.0.1".into() };
        assert!(matches!(open(config).await, Err(SockError::IoError(_))));
    }
}
