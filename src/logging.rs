//! log4rs setup.
//!
//! Logs always go to stderr so stdout only carries the generated HCL.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise logging from `log4rs.yml` if it exists, else a stderr logger at info.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {LOG_CONFIG_FILE}: {e}"))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}
