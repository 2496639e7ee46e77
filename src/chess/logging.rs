use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::env;
use std::io;

pub const LOG_ENV: &str = "SAN2UCI_LOG";

fn level_from_str(s: &str) -> LevelFilter {
    match s.trim().to_lowercase().as_str() {
        "off" | "none" => LevelFilter::Off,
        "error" | "err" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Error,
    }
}

/// Level from `SAN2UCI_LOG`, raised to at least `Debug` when verbose.
pub fn resolve_level(env_value: Option<&str>, verbose: bool) -> LevelFilter {
    let level = env_value.map_or(LevelFilter::Error, level_from_str);
    if verbose {
        level.max(LevelFilter::Debug)
    } else {
        level
    }
}

/// Route `log` records to stderr. Skip diagnostics and the summary are not
/// log records and are written regardless of this level.
pub fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
    let env_value = env::var(LOG_ENV).ok();
    let level = resolve_level(env_value.as_deref(), verbose);
    WriteLogger::init(level, Config::default(), io::stderr())
}
