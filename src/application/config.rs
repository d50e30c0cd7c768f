use crate::constants::{ARGO_APP_KEY, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use crate::model::version::VersionPolicy;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

#[derive(DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Login credentials for the family portal
///
/// Either `username` and `password` or a previously issued `token` must be set.
pub struct Credentials {
    /// Ministerial school code
    pub school_code: String,
    /// Username of the family account
    pub username: String,
    /// Password of the family account
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Token issued by an earlier login, used instead of username and password
    #[serde(skip_serializing, default)]
    pub token: Option<String>,
}

impl Credentials {
    /// Credentials for a username and password login
    pub fn new(
        school_code: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            school_code: school_code.into(),
            username: username.into(),
            password: password.into(),
            token: None,
        }
    }

    /// Credentials resuming a session from an already issued token
    pub fn with_token(school_code: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            school_code: school_code.into(),
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Returns `true` if a token login should be performed
    #[must_use]
    pub fn uses_token(&self) -> bool {
        self.token.is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("school_code", &self.school_code)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the family REST API, without trailing slash
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Identification the client announces to the portal
pub struct ProtocolConfig {
    /// Application key sent as `x-key-app`
    pub app_key: String,
    /// Protocol version sent as `x-version` until the portal suggests another one
    pub version: String,
    /// User agent sent with every request
    pub user_agent: String,
    /// What to do when the portal rejects the announced version
    pub version_policy: VersionPolicy,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            app_key: ARGO_APP_KEY.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            user_agent: USER_AGENT.to_string(),
            version_policy: VersionPolicy::default(),
        }
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Argo client
pub struct Config {
    /// Login credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Protocol identification
    pub protocol: ProtocolConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// Missing variables fall back to the portal defaults; missing credentials
    /// are reported but do not prevent construction, since a client may log in
    /// later with explicit credentials.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let school_code = get_env_or_default("ARGO_SCHOOL_CODE", String::new());
        let username = get_env_or_default("ARGO_USERNAME", String::new());
        let password = get_env_or_default("ARGO_PASSWORD", String::new());
        let token: Option<String> = get_env_or_none("ARGO_TOKEN");

        if school_code.is_empty() {
            error!("ARGO_SCHOOL_CODE not found in environment variables or .env file");
        }
        if token.is_none() && (username.is_empty() || password.is_empty()) {
            error!("ARGO_USERNAME/ARGO_PASSWORD or ARGO_TOKEN not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                school_code,
                username,
                password,
                token,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("ARGO_REST_BASE_URL", DEFAULT_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                timeout: get_env_or_default("ARGO_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            protocol: ProtocolConfig {
                app_key: get_env_or_default("ARGO_APP_KEY", ARGO_APP_KEY.to_string()),
                version: get_env_or_default("ARGO_API_VERSION", DEFAULT_API_VERSION.to_string()),
                user_agent: get_env_or_default("ARGO_USER_AGENT", USER_AGENT.to_string()),
                version_policy: get_env_or_default("ARGO_VERSION_POLICY", VersionPolicy::default()),
            },
        }
    }

    /// Creates a configuration with the given credentials and default settings,
    /// without reading the environment
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
            protocol: ProtocolConfig::default(),
        }
    }

    /// Overrides the REST base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the version renegotiation policy
    #[must_use]
    pub fn with_version_policy(mut self, policy: VersionPolicy) -> Self {
        self.protocol.version_policy = policy;
        self
    }

    /// Builds the URL of an endpoint
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.rest_api.base_url,
            endpoint.trim_start_matches('/')
        )
    }
}
