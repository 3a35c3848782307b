//! Version `1` of the configuration schema.
//!
//! The top level sections are:
//!
//! - [`logging`](crate::v1::logging::Logging): how much is written to the log.
//! - [`core`](crate::v1::core::Core): database, pagination, media and
//!   shopping list export.
//! - [`http_api`](crate::v1::http_api::HttpApi): the REST API server.
pub mod core;
pub mod database;
pub mod http_api;
pub mod logging;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::core::Core;
use self::http_api::HttpApi;
use self::logging::Logging;
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Root configuration of the Foodgram backend.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default = "Logging::default")]
    pub logging: Logging,

    /// Core configuration.
    #[serde(default = "Core::default")]
    pub core: Core,

    /// The REST API configuration.
    #[serde(default = "HttpApi::default")]
    pub http_api: HttpApi,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct.
    ///
    /// The TOML passed in the environment has priority over the file. Single
    /// values can then be overridden with `FOODGRAM_CONFIG_OVERRIDE_*`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the environment variable does not exist or has a bad configuration.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::string(config_toml))
        } else {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration cannot be encoded.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string(self)?)
    }
}
