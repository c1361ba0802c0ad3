#![deny(rust_2018_idioms)]

use config::{Config, File};
use strum::IntoEnumIterator;
use vessel_tracker::settings::{Environment, Settings};

pub mod helper;

fn load_settings(file: &str, environment: &str) -> Settings {
    Config::builder()
        .add_source(File::with_name(file).required(true))
        .set_override("environment", environment)
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize::<Settings>()
        .unwrap()
}

#[test]
fn test_local_settings_are_valid() {
    let settings = load_settings("config/local.yml", "Local");

    assert_eq!(settings.environment, Environment::Local);
    assert_eq!(settings.regions.len(), 5);
    assert_eq!(settings.regions.default_region().name, "Durban");
    assert!(settings.feed.poll_interval.is_none());
}

#[test]
fn test_development_settings_are_valid() {
    let settings = load_settings("config/development.yml", "Development");

    assert_eq!(
        settings.feed.poll_interval,
        Some(std::time::Duration::from_secs(300))
    );
}

#[test]
fn test_production_settings_are_valid() {
    let settings = load_settings("config/production.yml", "Production");

    assert_eq!(settings.feed.max_retries, 0);
    assert_eq!(
        settings.feed.request_timeout,
        std::time::Duration::from_secs(10)
    );
}

#[test]
fn test_every_environment_has_a_config_file() {
    for environment in Environment::iter() {
        let name = environment.as_ref();
        let settings = load_settings(&format!("config/{}", name.to_lowercase()), name);

        assert_eq!(settings.environment, environment);
    }
}
