//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `FOODGRAM_`.
use foodgram_configuration::{Configuration, Info, DEFAULT_CONFIG_TOML_PATH};

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `foodgram.toml`.
/// 2. Environment variable: `FOODGRAM_CONFIG_TOML`. The variable contains the same contents as the `foodgram.toml` file.
///
/// Environment variable has priority over the config file.
///
/// Refer to the [configuration documentation](https://docs.rs/foodgram-configuration) for the configuration options.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either
/// `./share/default/config/foodgram.toml` file or the env var `FOODGRAM_CONFIG_TOML`.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_CONFIG_TOML_PATH.to_string()).expect("it should gather the configuration sources");

    Configuration::load(&info).expect("it should load the configuration")
}
