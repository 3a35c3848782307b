pub fn connection_with_invalid_token(bind_address: &str) -> ConnectionInfo {
    ConnectionInfo::authenticated(bind_address, "0000000000000000000000000000000000000000")
}

pub fn connection_with_no_token(bind_address: &str) -> ConnectionInfo {
    ConnectionInfo::anonymous(bind_address)
}

/// Where the API is and which credentials the client sends.
#[derive(Clone)]
pub struct ConnectionInfo {
    pub bind_address: String,
    /// Login token of a user, sent in the `Authorization` header.
    pub auth_token: Option<String>,
    /// Administrator token, sent in the `token` query param.
    pub api_token: Option<String>,
}

impl ConnectionInfo {
    pub fn authenticated(bind_address: &str, auth_token: &str) -> Self {
        Self {
            bind_address: bind_address.to_string(),
            auth_token: Some(auth_token.to_string()),
            api_token: None,
        }
    }

    pub fn anonymous(bind_address: &str) -> Self {
        Self {
            bind_address: bind_address.to_string(),
            auth_token: None,
            api_token: None,
        }
    }

    pub fn admin(bind_address: &str, api_token: &str) -> Self {
        Self {
            bind_address: bind_address.to_string(),
            auth_token: None,
            api_token: Some(api_token.to_string()),
        }
    }
}
