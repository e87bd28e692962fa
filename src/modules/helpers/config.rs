use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use log::{warn, LevelFilter};

pub const DEFAULT_CARS: usize = 12;
pub const DEFAULT_LANES: usize = 4;
pub const DEFAULT_LOG_FILE: &str = "program.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub logging_level: LevelFilter,
    pub log_file: String,
    pub default_cars: usize,
    pub default_lanes: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            logging_level: LevelFilter::Info,
            log_file: DEFAULT_LOG_FILE.to_string(),
            default_cars: DEFAULT_CARS,
            default_lanes: DEFAULT_LANES,
        }
    }
}

impl Config {
    /// # load config from the environment
    /// reads `.env` first if there is one. missing values use the defaults
    pub fn from_env() -> Config {
        dotenv().ok();

        Config::from_lookup(|key| env::var(key).ok())
    }

    /// build the config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Config {
            logging_level: lookup("LOGGING_LEVEL")
                .map(|level| parse_level(&level))
                .unwrap_or(defaults.logging_level),
            log_file: lookup("LOG_FILE").unwrap_or(defaults.log_file),
            default_cars: parse_count(&lookup, "DEFAULT_CARS", defaults.default_cars),
            default_lanes: parse_count(&lookup, "DEFAULT_LANES", defaults.default_lanes),
        }
    }
}

fn parse_level(verbosity: &str) -> LevelFilter {
    match verbosity.to_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        // default to info
        _ => LevelFilter::Info,
    }
}

fn parse_count<F>(lookup: &F, key: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => match usize::from_str(value.trim()) {
            Ok(count) if count > 0 => count,
            _ => {
                warn!(target: "config", "ignoring {}={:?}, using {}", key, value, default);
                default
            }
        },
        None => default,
    }
}
