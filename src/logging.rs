//! File logging for the terminal runner.
//!
//! Logs never go to stdout/stderr while the game owns the terminal, so without
//! `--log-file` nothing is installed and the `log` macros are no-ops.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Install a file logger at `path` with the given threshold.
pub fn init_file_log(path: &Path, level: LevelFilter) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("invalid logging configuration")?;

    log4rs::init_config(config).context("logger already installed")?;
    Ok(())
}
