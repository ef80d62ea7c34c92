use futures::{Sink, SinkExt};
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_tungstenite::tungstenite::{Error as WsError, Message};

use crate::client::completion::CompletionHandle;
use crate::client::config::ClientConfig;
use crate::client::shutdown;
use crate::signal::InterruptHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriterExit {
    ReaderDone,
    WriteFailed,
    Interrupted(shutdown::ShutdownOutcome)
}

pub fn timestamp_message() -> Message {
    Message::Text(chrono::Local::now().to_string())
}

/// Sends a timestamp every tick until the reader stops, a send fails or
/// the process is interrupted. All sends on the connection happen here.
pub async fn write_messages<K>(sink: &mut K,
                               completion: &CompletionHandle,
                               interrupt: &mut InterruptHandle,
                               config: &ClientConfig) -> WriterExit
    where
        K: Sink<Message, Error = WsError> + Unpin
{
    let mut ticker = time::interval_at(Instant::now() + config.tick_interval, config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // no `biased;`: when several events are ready any of them may win
        tokio::select! {
            _ = completion.wait() => {
                return WriterExit::ReaderDone;
            }
            _ = ticker.tick() => {
                if let Err(e) = sink.send(timestamp_message()).await {
                    log::info!("write: {}", e);
                    return WriterExit::WriteFailed;
                }
            }
            _ = interrupt.recv() => {
                log::info!("interrupt");
                let outcome = shutdown::shutdown(sink, completion, config.close_timeout).await;
                return WriterExit::Interrupted(outcome);
            }
        }
    }
}
