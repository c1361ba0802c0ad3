use std::time::Duration;

use config::{Config, ConfigError, File};
use port_watch_core::RegionTable;
use serde::Deserialize;
use strum::{AsRefStr, EnumIter, EnumString};

use crate::tracker::TrackerConfig;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub log_level: LogLevel,
    pub command_buffer_size: usize,
    pub feed: FeedSettings,
    pub regions: RegionTable,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FeedSettings {
    pub url: String,
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    #[serde(default)]
    pub max_retries: u32,
    /// Unset means the feed is fetched once at startup and then only on request.
    #[serde(default, with = "humantime_serde")]
    pub poll_interval: Option<Duration>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    Local,
    Development,
    Production,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Settings {
    /// Loads `config/<environment>.yml` where the environment is taken from
    /// `APP_ENVIRONMENT` (defaults to local). Values can be overridden with
    /// `PORT_WATCH__<SECTION>__<KEY>` environment variables.
    pub fn new() -> Result<Settings, ConfigError> {
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| Environment::Local.as_ref().to_string())
            .parse()
            .map_err(|e| ConfigError::Message(format!("failed to parse APP_ENVIRONMENT: {e}")))?;

        Config::builder()
            .add_source(
                File::with_name(&format!("config/{}", environment.as_ref().to_lowercase()))
                    .required(true),
            )
            .add_source(config::Environment::with_prefix("PORT_WATCH").separator("__"))
            .set_override("environment", environment.as_ref())?
            .build()?
            .try_deserialize()
    }

    pub fn tracker(&self) -> TrackerConfig {
        TrackerConfig {
            poll_interval: self.feed.poll_interval,
            command_buffer_size: self.command_buffer_size,
        }
    }
}
