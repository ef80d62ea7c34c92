use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

pub const CONFIG_FILE: &str = "conf/log4rs.yaml";
const PATTERN: &str = "{d(%Y/%m/%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Loads `conf/log4rs.yaml`, falling back to stderr at info level.
pub fn init() {
    if let Err(file_err) = log4rs::init_file(CONFIG_FILE, Default::default()) {
        match fallback_config().map(log4rs::init_config) {
            Ok(Ok(_handle)) => log::debug!("{} not loaded ({}), using console defaults", CONFIG_FILE, file_err),
            Ok(Err(e)) => eprintln!("logger already set. {}", e),
            Err(e) => eprintln!("invalid logger config. {}", e)
        }
    }
}

fn fallback_config() -> Result<Config, log4rs::config::runtime::ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
}
