use futures::{Stream, StreamExt};
use tokio_tungstenite::tungstenite::{Error as WsError, Message};

use crate::client::completion::CompletionHandle;

/// Logs every inbound message until the stream fails or the peer closes.
/// `completion` is set on the way out, whichever way that is.
pub async fn read_messages<S>(mut source: S, completion: CompletionHandle)
    where
        S: Stream<Item = Result<Message, WsError>> + Unpin
{
    let _done = completion.arm();
    let mut closing = false;

    loop {
        match source.next().await {
            Some(Ok(Message::Text(text))) => log::info!("recv: {}", text),
            Some(Ok(Message::Binary(data))) => log::info!("recv: {}", String::from_utf8_lossy(&data)),
            Some(Ok(Message::Close(frame))) => {
                match frame {
                    Some(frame) => log::info!("read: close {} {}", u16::from(frame.code), frame.reason),
                    None => log::info!("read: close without status")
                }
                // the next poll flushes the close reply and ends the stream
                closing = true;
            }
            Some(Ok(other)) => log::trace!("control frame skipped. {:?}", other),
            Some(Err(WsError::ConnectionClosed)) | None if closing => {
                log::debug!("close handshake finished");
                break;
            }
            Some(Err(e)) => {
                log::info!("read: {}", e);
                break;
            }
            None => {
                log::info!("read: connection closed");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::stream;
    use std::time::Duration;
    use tokio::time;
    use tokio_tungstenite::tungstenite::protocol::CloseFrame;
    use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;

    use crate::logging::capture;

    #[tokio::test]
    async fn peer_close_is_logged_and_reading_continues_to_stream_end() {
        capture::start();
        let inbound = stream::iter(vec![
            Ok(Message::Text("a".into())),
            Ok(Message::Binary(b"b".to_vec())),
            Ok(Message::Close(Some(CloseFrame { code: CloseCode::Normal, reason: "".into() }))),
            Err(WsError::ConnectionClosed),
        ]);
        let completion = CompletionHandle::new();

        read_messages(inbound, completion.clone()).await;

        assert!(completion.is_set());
        assert!(capture::contains("recv: a"));
        assert!(capture::contains("recv: b"));
        assert!(capture::starts_with("read: close 1000"));
        assert!(!capture::starts_with("read: Connection closed"));
    }

    #[tokio::test]
    async fn completion_waits_for_the_end_after_close() {
        let (tx, rx) = mpsc::unbounded::<Result<Message, WsError>>();
        let completion = CompletionHandle::new();
        let reader = tokio::spawn(read_messages(rx, completion.clone()));

        tx.unbounded_send(Ok(Message::Close(None))).unwrap();
        time::sleep(Duration::from_millis(50)).await;
        assert!(!completion.is_set());

        drop(tx);
        time::timeout(Duration::from_secs(1), reader).await.unwrap().unwrap();
        assert!(completion.is_set());
    }

    #[tokio::test]
    async fn read_error_sets_completion() {
        capture::start();
        let inbound = stream::iter(vec![
            Ok(Message::Ping(vec![1])),
            Err(WsError::AlreadyClosed),
            Ok(Message::Text("never read".into())),
        ]);
        let completion = CompletionHandle::new();

        read_messages(inbound, completion.clone()).await;

        assert!(completion.is_set());
        assert!(capture::starts_with("read: "));
        assert!(!capture::contains("recv: never read"));
    }

    #[tokio::test]
    async fn completion_stays_unset_while_reading() {
        capture::start();
        let (tx, rx) = mpsc::unbounded::<Result<Message, WsError>>();
        let completion = CompletionHandle::new();
        let reader = tokio::spawn(read_messages(rx, completion.clone()));

        tx.unbounded_send(Ok(Message::Text("tick".into()))).unwrap();
        time::sleep(Duration::from_millis(50)).await;
        assert!(!completion.is_set());
        assert!(capture::contains("recv: tick"));

        drop(tx);
        time::timeout(Duration::from_secs(1), reader).await.unwrap().unwrap();
        assert!(completion.is_set());
        assert!(capture::contains("read: connection closed"));
    }
}
