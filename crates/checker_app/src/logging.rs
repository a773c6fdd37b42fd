//! Logging initialization for checker_app.
//!
//! The terminal is the display surface, so logs go to `./checker.log`;
//! if the file cannot be created, logging falls back to stderr.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger,
};

const LOG_PATH: &str = "./checker.log";

pub fn initialize() {
    let level = LevelFilter::Info;
    let config = build_config();

    match File::create(Path::new(LOG_PATH)) {
        Ok(file) => {
            let _ = WriteLogger::init(level, config, file);
        }
        Err(err) => {
            eprintln!("Warning: could not create log file at {LOG_PATH}: {err}");
            let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
