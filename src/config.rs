use clap::Parser;
use thiserror::Error;

pub const DEFAULT_MAX: u8 = 10;
pub const MAX_CEILING: u8 = 100;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Volume demo with window-level keyboard routing")]
pub struct Cli {
    /// Highest volume level the counter can reach
    #[arg(long, default_value_t = DEFAULT_MAX)]
    pub max: u8,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("volume ceiling must be at least 1")]
    ZeroMax,
    #[error("volume ceiling {0} exceeds the limit of {limit}", limit = MAX_CEILING)]
    MaxTooLarge(u8),
}

impl Config {
    pub fn new(max: u8) -> Result<Self, ConfigError> {
        match max {
            0 => Err(ConfigError::ZeroMax),
            max if max > MAX_CEILING => Err(ConfigError::MaxTooLarge(max)),
            max => Ok(Config { max }),
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Config::new(cli.max)
    }
}
