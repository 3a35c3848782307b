use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::{AccessTokens, TslConfig};

/// Configuration for the REST API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpApi {
    /// The address the API will bind to.
    /// The format is `ip:port`, for example `0.0.0.0:8000`. If you want the
    /// operating system to choose a random port, use port `0`.
    #[serde(default = "HttpApi::default_bind_address")]
    pub bind_address: SocketAddr,

    /// TSL config. The API is served over plain HTTP when it is missing.
    #[serde(default = "HttpApi::default_tsl_config")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsl_config: Option<TslConfig>,

    /// Access tokens for the administration endpoints. The key is a label
    /// identifying the token and the value is the token itself.
    #[serde(default = "HttpApi::default_access_tokens")]
    pub access_tokens: AccessTokens,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self {
            bind_address: Self::default_bind_address(),
            tsl_config: Self::default_tsl_config(),
            access_tokens: Self::default_access_tokens(),
        }
    }
}

impl HttpApi {
    fn default_bind_address() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), 8000)
    }

    fn default_tsl_config() -> Option<TslConfig> {
        None
    }

    fn default_access_tokens() -> AccessTokens {
        [(String::from("admin"), String::from("MyAccessToken"))]
            .iter()
            .cloned()
            .collect()
    }

    pub fn override_admin_token(&mut self, api_admin_token: &str) {
        self.access_tokens.insert("admin".to_string(), api_admin_token.to_string());
    }

    #[must_use]
    pub fn contains_token(&self, token: &str) -> bool {
        self.access_tokens.values().any(|t| t == token)
    }
}
