pub mod completion;
pub mod config;
pub mod connection;
pub mod errors;
pub mod reader;
pub mod shutdown;
pub mod writer;

pub use completion::CompletionHandle;
pub use config::ClientConfig;
pub use connection::{connect, Connection};
pub use errors::ConnectionError;
pub use writer::WriterExit;

use crate::signal::InterruptHandle;

/// Connects, then runs the reader in the background and the writer here
/// until one of them stops. The connection is released on return.
pub async fn run(config: ClientConfig, mut interrupt: InterruptHandle) -> Result<WriterExit, ConnectionError> {
    log::info!("connecting to {}", config.endpoint);

    let (mut connection, completion) = connect(&config).await?;

    let exit = writer::write_messages(connection.sink_mut(), &completion, &mut interrupt, &config).await;
    log::debug!("writer stopped. {:?}", exit);
    Ok(exit)
}
