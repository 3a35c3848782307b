//! API resources for the [`auth_token`](crate::servers::apis::v1::context::auth_token)
//! API context.
use serde::{Deserialize, Serialize};

use crate::core::auth::Token;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct AuthToken {
    pub auth_token: String,
}

impl From<Token> for AuthToken {
    fn from(token: Token) -> Self {
        AuthToken {
            auth_token: token.as_str().to_string(),
        }
    }
}
