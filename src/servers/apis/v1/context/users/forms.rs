//! Request bodies of the [`users`](crate::servers::apis::v1::context::users)
//! API context.
use serde::Deserialize;

use crate::core::users::{PasswordChange, Registration};
use crate::servers::apis::v1::forms::positive;

#[derive(Deserialize, Debug, Default)]
pub struct RegistrationForm {
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

/// The `recipes_limit` query param of the subscription endpoints: how many
/// recipes of each author are included.
#[derive(Deserialize, Debug, Default)]
pub struct RecipesLimitQuery {
    pub recipes_limit: Option<String>,
}

impl RecipesLimitQuery {
    /// The limit, when it is a positive integer.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        positive(self.recipes_limit.as_deref())
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct SetPasswordForm {
    pub new_password: Option<String>,
    pub current_password: Option<String>,
}

impl From<RegistrationForm> for Registration {
    fn from(form: RegistrationForm) -> Self {
        Registration {
            email: form.email,
            username: form.username,
            first_name: form.first_name,
            last_name: form.last_name,
            password: form.password,
        }
    }
}

impl From<SetPasswordForm> for PasswordChange {
    fn from(form: SetPasswordForm) -> Self {
        PasswordChange {
            new_password: form.new_password,
            current_password: form.current_password,
        }
    }
}
