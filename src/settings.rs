use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::server::pagination::{PageSize, QUESTIONS_PER_PAGE};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_size: u32,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn page_size(&self) -> PageSize {
        PageSize(self.page_size.max(1))
    }
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
}

/// Defaults, then `configuration.toml` (if present), then `TRIVIA__*` variables,
/// e.g. `TRIVIA__APPLICATION__PORT=8080`. A `.env` file is loaded first.
pub fn get_settings() -> Result<Settings, ConfigError> {
    dotenv::dotenv().ok();
    defaults()?
        .add_source(File::with_name("configuration").required(false))
        .add_source(
            Environment::with_prefix("TRIVIA")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 5000_i64)?
        .set_default("application.page_size", i64::from(QUESTIONS_PER_PAGE))?
        .set_default("database.path", "trivia.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let settings: Settings = defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.database.path, "trivia.db");
        assert_eq!(settings.application.page_size(), PageSize(QUESTIONS_PER_PAGE));
        assert_eq!(settings.application.address(), "127.0.0.1:5000");
    }

    #[test]
    fn string_numbers_override_defaults() {
        let settings: Settings = defaults()
            .unwrap()
            .set_override("application.port", "8080")
            .unwrap()
            .set_override("application.page_size", "5")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.application.port, 8080);
        assert_eq!(settings.application.page_size(), PageSize(5));
    }

    #[test]
    fn page_size_is_at_least_one() {
        let settings = ApplicationSettings {
            host: "localhost".to_owned(),
            port: 5000,
            page_size: 0,
        };
        assert_eq!(settings.page_size(), PageSize(1));
        assert_eq!(settings.address(), "localhost:5000");
    }
}
