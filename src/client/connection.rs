use futures::StreamExt;
use futures::stream::SplitSink;
use tokio::task::JoinHandle;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;

use crate::client::completion::CompletionHandle;
use crate::client::config::ClientConfig;
use crate::client::errors::ConnectionError;
use crate::client::reader;
use crate::stream::config::SockConfig;
use crate::stream::{socket, Transport};

pub type WsStream = WebSocketStream<Transport>;

/// An open WebSocket with its reader task. Dropping it stops the reader
/// and releases the socket.
pub struct Connection {
    sink: SplitSink<WsStream, Message>,
    reader: JoinHandle<()>
}

/// Dials the endpoint and completes the WebSocket upgrade. The reader task
/// starts only once the upgrade has succeeded.
pub async fn connect(config: &ClientConfig) -> Result<(Connection, CompletionHandle), ConnectionError> {
    let sock_config = SockConfig::new(&config.endpoint).await?;
    log::debug!("dialing {} (tls: {})", sock_config.address, sock_config.use_tls);

    let transport = socket::open(sock_config).await?;
    let (ws, response) = tokio_tungstenite::client_async(config.endpoint.as_str(), transport).await?;
    log::debug!("handshake done. status: {}", response.status());

    let completion = CompletionHandle::new();
    Ok((Connection::start(ws, completion.clone()), completion))
}

impl Connection {

    fn start(ws: WsStream, completion: CompletionHandle) -> Connection {
        let (sink, source) = ws.split();
        let reader = tokio::spawn(reader::read_messages(source, completion));
        Connection { sink, reader }
    }

    pub fn sink_mut(&mut self) -> &mut SplitSink<WsStream, Message> {
        &mut self.sink
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.reader.abort();
        log::debug!("connection released");
    }
}
