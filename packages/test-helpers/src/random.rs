use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Returns a random alphanumeric string of a certain size.
///
/// # Panics
///
/// It never panics.
#[must_use]
pub fn string(size: usize) -> String {
    thread_rng().sample_iter(&Alphanumeric).take(size).map(char::from).collect()
}

/// Returns a random lowercase username that passes the username validation.
#[must_use]
pub fn username() -> String {
    format!("user_{}", string(10).to_lowercase())
}

/// Returns a random email address.
#[must_use]
pub fn email() -> String {
    format!("{}@example.com", string(12).to_lowercase())
}

/// Returns a random hex color code like `#A1B2C3`.
#[must_use]
pub fn color() -> String {
    format!("#{:06X}", thread_rng().gen_range(0..=0x00FF_FFFF))
}

/// Returns a random lowercase slug.
#[must_use]
pub fn slug() -> String {
    string(12).to_lowercase()
}
