//! log4rs setup.

use crate::config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

const STDERR_PATTERN: &str = "{h({l}):5} {m}{n}";

/// Path of the log4rs config, honouring [`config::ENV_LOG_CONFIG`].
fn log_config_path() -> PathBuf {
    std::env::var(config::ENV_LOG_CONFIG)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(config::DEFAULT_LOG_CONFIG))
}

/// Stderr logging at `info`, used when no config file is present.
pub fn default_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
        .map_err(|e| format!("Error building log config: {e}"))?;
    Ok(config)
}

/// Initialise log4rs from the config file if it exists, else log to stderr.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    let path = log_config_path();
    if Path::new(&path).exists() {
        log4rs::init_file(&path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        log::debug!("Logging configured from {}", path.display());
    } else {
        log4rs::init_config(default_config()?)
            .map_err(|e| format!("Error initializing log4rs: {e}"))?;
    }
    Ok(())
}
