use std::time::Duration;

use futures::{Sink, SinkExt};
use tokio::time;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;

use crate::client::completion::CompletionHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutdownOutcome {
    Acknowledged,
    TimedOut,
    CloseNotSent
}

pub fn normal_close() -> Message {
    Message::Close(Some(CloseFrame { code: CloseCode::Normal, reason: "".into() }))
}

/// Best-effort close handshake: send the close frame, then give the peer
/// `timeout` to finish its side.
pub async fn shutdown<K>(sink: &mut K, completion: &CompletionHandle, timeout: Duration) -> ShutdownOutcome
    where
        K: Sink<Message, Error = WsError> + Unpin
{
    if let Err(e) = sink.send(normal_close()).await {
        log::info!("write close: {}", e);
        return ShutdownOutcome::CloseNotSent;
    }

    tokio::select! {
        _ = completion.wait() => ShutdownOutcome::Acknowledged,
        _ = time::sleep(timeout) => {
            log::debug!("No close acknowledgement within {:?}", timeout);
            ShutdownOutcome::TimedOut
        }
    }
}
