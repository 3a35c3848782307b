//! Request bodies of the [`auth_token`](crate::servers::apis::v1::context::auth_token)
//! API context.
use serde::Deserialize;

use crate::core::users::Credentials;

#[derive(Deserialize, Debug, Default)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<LoginForm> for Credentials {
    fn from(form: LoginForm) -> Self {
        Credentials {
            email: form.email,
            password: form.password,
        }
    }
}
