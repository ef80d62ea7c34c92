use ws_ticker::client::{self, ClientConfig};
use ws_ticker::logging;
use ws_ticker::signal::InterruptHandle;

#[tokio::main]
async fn main() {
    logging::init();

    let interrupt = InterruptHandle::setup();

    let config = match ClientConfig::compiled_in() {
        Ok(config) => config,
        Err(e) => {
            log::error!("config: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = client::run(config, interrupt).await {
        log::error!("dial: {:?}", e);
        std::process::exit(1);
    }
}
