//! Configuration presets used in tests.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use foodgram_configuration::{Configuration, Threshold};

use crate::random;

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one server at the same time.
///
/// - The API binds to a free port on the loopback interface.
/// - The database is a new `SQLite` file in the temp directory.
/// - Uploaded images go to a new directory in the temp directory.
/// - Logging is off.
///
/// # Panics
///
/// Will panic if the temp directory path is not valid UTF-8.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for the API
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);

    let temp_directory = env::temp_dir();
    let random_id = random::string(16);

    // Ephemeral sqlite database
    let temp_file = temp_directory.join(format!("foodgram_{random_id}.db"));
    config.core.database.path = temp_file.to_str().expect("it should be a valid UTF-8 path").to_owned();

    // Ephemeral media root
    let media_root = temp_directory.join(format!("foodgram_media_{random_id}"));
    config.core.media.root = media_root
        .to_str()
        .expect("it should be a valid UTF-8 path")
        .to_owned()
        .into();

    config
}
