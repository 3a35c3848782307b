//! Configuration data structures for the Foodgram backend.
//!
//! The configuration is a TOML document. It can be provided:
//!
//! - As the whole content of the `FOODGRAM_CONFIG_TOML` environment variable.
//! - As a file whose path is given in `FOODGRAM_CONFIG_TOML_PATH`.
//! - As a file in the default location, `./share/default/config/foodgram.toml`.
//!
//! Individual values can be overridden with environment variables prefixed
//! with `FOODGRAM_CONFIG_OVERRIDE_`, using a double underscore to separate
//! sections. For example:
//!
//! ```text
//! FOODGRAM_CONFIG_OVERRIDE_HTTP_API__ACCESS_TOKENS__ADMIN=MySecretToken
//! ```
//!
//! Missing values take their defaults, so an empty document is a valid
//! configuration. This is the default configuration:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core.database]
//! driver = "sqlite3"
//! path = "./storage/foodgram/lib/database/sqlite3.db"
//!
//! [core.pagination]
//! default_page_size = 6
//! max_page_size = 100
//!
//! [core.media]
//! root = "./storage/foodgram/media"
//! url_prefix = "/media/"
//!
//! [core.shopping_list]
//! font_path = "./share/default/fonts/DejaVuSans.ttf"
//!
//! [http_api]
//! bind_address = "0.0.0.0:8000"
//!
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
pub mod v1;

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use camino::Utf8PathBuf;
use derive_more::Display;
use foodgram_located_error::{DynError, LocatedError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The whole `foodgram.toml` file content. It has priority over the config file.
pub const ENV_VAR_CONFIG_TOML: &str = "FOODGRAM_CONFIG_TOML";

/// The `foodgram.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "FOODGRAM_CONFIG_TOML_PATH";

/// Prefix for the variables that override single configuration values.
pub const CONFIG_OVERRIDE_PREFIX: &str = "FOODGRAM_CONFIG_OVERRIDE_";

/// Separator between sections in the override variable names.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

/// Default location for the configuration file.
pub const DEFAULT_CONFIG_TOML_PATH: &str = "./share/default/config/foodgram.toml";

pub type Configuration = v1::Configuration;
pub type Core = v1::core::Core;
pub type Database = v1::database::Database;
pub type HttpApi = v1::http_api::HttpApi;
pub type Logging = v1::logging::Logging;
pub type Media = v1::core::Media;
pub type PaginationPolicy = v1::core::PaginationPolicy;
pub type ShoppingList = v1::core::ShoppingList;

/// Label to token map of the tokens accepted by the administration API.
pub type AccessTokens = HashMap<String, String>;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }
}

/// The minimum severity of the messages written to the log.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Hash, Clone, Copy, Display)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    /// A threshold lower than all security levels.
    #[display("off")]
    Off,
    /// Corresponds to the `Error` security level.
    #[display("error")]
    Error,
    /// Corresponds to the `Warn` security level.
    #[display("warn")]
    Warn,
    /// Corresponds to the `Info` security level.
    #[display("info")]
    Info,
    /// Corresponds to the `Debug` security level.
    #[display("debug")]
    Debug,
    /// Corresponds to the `Trace` security level.
    #[display("trace")]
    Trace,
}

/// TLS certificate and key used to serve the API over HTTPS.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct TslConfig {
    /// Path to the SSL certificate file.
    #[serde(default = "TslConfig::default_ssl_cert_path")]
    pub ssl_cert_path: Utf8PathBuf,

    /// Path to the SSL key file.
    #[serde(default = "TslConfig::default_ssl_key_path")]
    pub ssl_key_path: Utf8PathBuf,
}

impl TslConfig {
    fn default_ssl_cert_path() -> Utf8PathBuf {
        Utf8PathBuf::new()
    }

    fn default_ssl_key_path() -> Utf8PathBuf {
        Utf8PathBuf::new()
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load the configuration from the configuration file.
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    /// The configuration could not be encoded as TOML.
    #[error("Failed encoding the configuration: {source}")]
    UnableToEncode {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}

impl From<toml::ser::Error> for Error {
    #[track_caller]
    fn from(err: toml::ser::Error) -> Self {
        Self::UnableToEncode {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}
