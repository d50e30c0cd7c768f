/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the Argo family portal
//!
//! This module provides a client that handles:
//! - Login with credentials or an issued token
//! - The identifying headers required by every data call
//! - A single retry with the protocol version suggested by the portal
//!
//! # Example
//! ```ignore
//! use argo_client::application::client::Client;
//! use argo_client::config::Config;
//!
//! let client = Client::new(Config::new()).await?;
//! let homework = client.call("compiti", None).await?;
//! ```

use crate::application::auth::{Auth, Session};
use crate::application::config::{Config, Credentials};
use crate::application::interfaces::student::StudentService;
use crate::constants::{headers, params};
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::{make_http_request, parse_json};
use crate::model::version::extract_suggested_version;
use crate::utils::time::{format_day, today};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the Argo family portal
pub struct Client {
    auth: Arc<Auth>,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client and logs in with the configured credentials
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Logged in client
    /// * `Err(AppError)` - If the login fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.auth.login().await?;
        Ok(client)
    }

    /// Creates a new client without logging in
    ///
    /// Data calls fail with [`AppError::NotLoggedIn`] until one of the login
    /// methods succeeds.
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone())?);

        Ok(Self { auth, config })
    }

    /// Logs in with a school code, username and password
    ///
    /// # Returns
    /// * `Ok(Session)` - The session with the token and the student identifiers
    /// * `Err(AppError)` - If the portal rejects the credentials
    pub async fn login(
        &self,
        school_code: &str,
        username: &str,
        password: &str,
    ) -> Result<Session, AppError> {
        self.auth
            .login_with(Credentials::new(school_code, username, password))
            .await
    }

    /// Opens a session from a token issued by an earlier login
    pub async fn login_with_token(&self, school_code: &str, token: &str) -> Result<Session, AppError> {
        self.auth
            .login_with(Credentials::with_token(school_code, token))
            .await
    }

    /// Calls an endpoint of the portal
    ///
    /// Any endpoint name is accepted, see [`Endpoint`] for the known ones.
    ///
    /// # Arguments
    /// * `method` - Endpoint name, e.g. `"assenze"`
    /// * `date` - Day sent as `datGiorno`, today when `None`
    ///
    /// # Returns
    /// * `Ok(Value)` - The decoded JSON payload
    /// * `Err(AppError::NotLoggedIn)` - If there is no active session; nothing is sent
    /// * `Err(AppError)` - If the request fails
    pub async fn call(
        &self,
        method: impl AsRef<str>,
        date: Option<NaiveDate>,
    ) -> Result<Value, AppError> {
        let session = self.auth.get_session().await?;

        let method = method.as_ref().trim().trim_matches('/');
        if method.is_empty() {
            return Err(AppError::InvalidInput("endpoint name is empty".to_string()));
        }
        let day = format_day(date.unwrap_or_else(today));

        match self.call_internal(&session, method, &day).await {
            Err(AppError::AuthenticationFailed { status, message })
                if self.config.protocol.version_policy.renegotiates() =>
            {
                let Some(suggested) = extract_suggested_version(&message, &session.api_version)
                else {
                    return Err(AppError::AuthenticationFailed { status, message });
                };
                warn!(
                    "{} rejected protocol version {}, retrying with {}",
                    method, session.api_version, suggested
                );
                let session = self.auth.renegotiate(&suggested).await?;
                self.call_internal(&session, method, &day).await
            }
            result => result,
        }
    }

    /// Calls one of the known endpoints
    pub async fn call_endpoint(
        &self,
        endpoint: Endpoint,
        date: Option<NaiveDate>,
    ) -> Result<Value, AppError> {
        self.call(endpoint, date).await
    }

    async fn call_internal(
        &self,
        session: &Session,
        method: &str,
        day: &str,
    ) -> Result<Value, AppError> {
        let url = self.config.endpoint_url(method);
        let protocol = &self.config.protocol;

        let request_headers = vec![
            (headers::KEY_APP, protocol.app_key.as_str()),
            (headers::VERSION, session.api_version.as_str()),
            (headers::USER_AGENT, protocol.user_agent.as_str()),
            (headers::AUTH_TOKEN, session.auth_token()),
            (headers::SCHOOL_CODE, session.card.school_code.as_str()),
            (headers::STUDENT_ID, session.student_id()),
            (headers::CARD_ID, session.card_id()),
            (headers::SCHOOL_ID, session.school_id()),
        ];

        info!("Calling {} for {}", method, day);
        let response = make_http_request(
            self.auth.http_client(),
            &url,
            request_headers,
            &[(params::DAY, day.to_string())],
        )
        .await?;
        let value: Value = parse_json(response).await?;
        debug!("Response decoded for {}", method);
        Ok(value)
    }

    /// Returns `true` while a session is active
    pub async fn is_logged_in(&self) -> bool {
        self.auth.is_logged_in().await
    }

    /// Gets the current session
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Logs out and clears the current session
    pub async fn logout(&self) -> Result<(), AppError> {
        self.auth.logout().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

#[async_trait]
impl StudentService for Client {
    async fn absences(&self) -> Result<Value, AppError> {
        self.call_endpoint(Endpoint::Assenze, None).await
    }

    async fn today(&self, date: Option<NaiveDate>) -> Result<Value, AppError> {
        self.call_endpoint(Endpoint::Oggi, date).await
    }

    async fn disciplinary_notes(&self) -> Result<Value, AppError> {
        self.call_endpoint(Endpoint::NoteDisciplinari, None).await
    }

    async fn daily_marks(&self) -> Result<Value, AppError> {
        self.call_endpoint(Endpoint::VotiGiornalieri, None).await
    }

    async fn final_marks(&self) -> Result<Value, AppError> {
        self.call_endpoint(Endpoint::VotiScrutinio, None).await
    }

    async fn homework(&self) -> Result<Value, AppError> {
        self.call_endpoint(Endpoint::Compiti, None).await
    }

    async fn lesson_topics(&self) -> Result<Value, AppError> {
        self.call_endpoint(Endpoint::Argomenti, None).await
    }

    async fn reminders(&self) -> Result<Value, AppError> {
        self.call_endpoint(Endpoint::Promemoria, None).await
    }

    async fn timetable(&self) -> Result<Value, AppError> {
        self.call_endpoint(Endpoint::Orario, None).await
    }

    async fn teachers(&self) -> Result<Value, AppError> {
        self.call_endpoint(Endpoint::DocentiClasse, None).await
    }
}
