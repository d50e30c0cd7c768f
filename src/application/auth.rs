/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authentication module for the Argo family portal
//!
//! This module handles the session lifecycle:
//! - Credential exchange (`login`) or resuming from an issued token
//! - Lookup of the student card carrying the identifiers of every data call
//! - Protocol version renegotiation when the portal rejects the announced version
//! - Logout

use crate::application::config::{Config, Credentials};
use crate::constants::{CARDS_ENDPOINT, LOGIN_ENDPOINT, headers};
use crate::error::AppError;
use crate::model::auth::{LoginResponse, StudentCard};
use crate::model::http::{make_http_request, parse_json};
use crate::model::version::extract_suggested_version;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// An authenticated session
///
/// A `Session` only exists while the user is logged in; it is dropped on
/// logout and replaced on every successful login or version renegotiation.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Ministerial school code the session was opened for
    pub school_code: String,
    /// Username, absent when the session was resumed from a token
    pub username: Option<String>,
    /// Token returned by the credential exchange
    pub token: String,
    /// Student card with the identifiers used by data calls
    pub card: StudentCard,
    /// Protocol version accepted by the portal for this session
    pub api_version: String,
    /// When the session was opened
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Token to send with data calls
    #[must_use]
    pub fn auth_token(&self) -> &str {
        &self.card.auth_token
    }

    /// Student identifier (`prgAlunno`)
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.card.student_id
    }

    /// Card identifier (`prgScheda`)
    #[must_use]
    pub fn card_id(&self) -> &str {
        &self.card.card_id
    }

    /// School identifier (`prgScuola`)
    #[must_use]
    pub fn school_id(&self) -> &str {
        &self.card.school_id
    }
}

/// Authentication manager for the Argo family portal
///
/// Keeps the credentials of the last login, the protocol version in effect
/// and the current session, if any.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    credentials: RwLock<Credentials>,
    version: RwLock<String>,
    session: RwLock<Option<Session>>,
}

impl Auth {
    /// Creates a new Auth instance without logging in
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(config.protocol.user_agent.as_str())
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            credentials: RwLock::new(config.credentials.clone()),
            version: RwLock::new(config.protocol.version.clone()),
            session: RwLock::new(None),
            client,
            config,
        })
    }

    /// Gets the current session
    ///
    /// # Returns
    /// * `Ok(Session)` - The active session
    /// * `Err(AppError::NotLoggedIn)` - If no login succeeded yet or after logout
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.session
            .read()
            .await
            .clone()
            .ok_or(AppError::NotLoggedIn)
    }

    /// HTTP client shared by every request of this session
    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Returns `true` while a session is active
    pub async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Protocol version that the next request will announce
    pub async fn current_version(&self) -> String {
        self.version.read().await.clone()
    }

    /// Logs in with the configured credentials
    ///
    /// When the portal rejects the request and the version policy allows it,
    /// the version suggested in the error payload is tried once.
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session
    /// * `Err(AppError)` - If login fails
    pub async fn login(&self) -> Result<Session, AppError> {
        let credentials = self.credentials.read().await.clone();
        self.login_with(credentials).await
    }

    /// Logs in with new credentials
    ///
    /// The credentials replace the stored ones only if the login succeeds; a
    /// rejected login leaves the current session and credentials untouched.
    pub async fn login_with(&self, credentials: Credentials) -> Result<Session, AppError> {
        let version = self.current_version().await;
        let renegotiate = self.config.protocol.version_policy.renegotiates();
        self.login_internal(credentials, version, renegotiate).await
    }

    /// Logs in again announcing `version`, without further renegotiation
    ///
    /// Used when a data call is rejected with a suggested version.
    pub async fn renegotiate(&self, version: &str) -> Result<Session, AppError> {
        warn!("Renegotiating protocol version: {}", version);
        let credentials = self.credentials.read().await.clone();
        self.login_internal(credentials, version.to_string(), false)
            .await
    }

    /// Logs out and clears the current session
    ///
    /// The credentials and the negotiated version are kept, so that a later
    /// [`login`](Self::login) does not need them again.
    pub async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        *self.session.write().await = None;
        info!("✓ Logged out successfully");
        Ok(())
    }

    async fn login_internal(
        &self,
        credentials: Credentials,
        version: String,
        renegotiate: bool,
    ) -> Result<Session, AppError> {
        validate_credentials(&credentials)?;

        info!(
            "Logging in to school {} with protocol version {}",
            credentials.school_code, version
        );

        let session = match self.authenticate(&credentials, &version).await {
            Ok(session) => session,
            Err(AppError::AuthenticationFailed { status, message }) if renegotiate => {
                let Some(suggested) = extract_suggested_version(&message, &version) else {
                    debug!("No suggested version found in rejected login");
                    return Err(AppError::AuthenticationFailed { status, message });
                };
                warn!(
                    "Portal rejected protocol version {}, retrying with {}",
                    version, suggested
                );
                self.authenticate(&credentials, &suggested).await?
            }
            Err(e) => return Err(e),
        };

        *self.credentials.write().await = credentials;
        *self.version.write().await = session.api_version.clone();
        *self.session.write().await = Some(session.clone());

        info!(
            "✓ Login successful, student card: {}",
            session.card_id()
        );
        Ok(session)
    }

    /// Performs the credential exchange (unless a token is given) and the card lookup
    async fn authenticate(
        &self,
        credentials: &Credentials,
        version: &str,
    ) -> Result<Session, AppError> {
        let token = match &credentials.token {
            Some(token) => {
                debug!("Resuming session from an issued token");
                token.clone()
            }
            None => self.exchange_credentials(credentials, version).await?,
        };

        let card = self
            .fetch_card(&credentials.school_code, &token, version)
            .await?;

        Ok(Session {
            school_code: credentials.school_code.clone(),
            username: (!credentials.uses_token()).then(|| credentials.username.clone()),
            token,
            card,
            api_version: version.to_string(),
            logged_in_at: Utc::now(),
        })
    }

    async fn exchange_credentials(
        &self,
        credentials: &Credentials,
        version: &str,
    ) -> Result<String, AppError> {
        let url = self.config.endpoint_url(LOGIN_ENDPOINT);
        let protocol = &self.config.protocol;

        let request_headers = vec![
            (headers::KEY_APP, protocol.app_key.as_str()),
            (headers::VERSION, version),
            (headers::USER_AGENT, protocol.user_agent.as_str()),
            (headers::SCHOOL_CODE, credentials.school_code.as_str()),
            (headers::USER_ID, credentials.username.as_str()),
            (headers::PASSWORD, credentials.password.as_str()),
        ];

        debug!("Sending login request to: {}", url);
        let response = make_http_request(&self.client, &url, request_headers, &[]).await?;
        let login: LoginResponse = parse_json(response).await?;
        Ok(login.token)
    }

    async fn fetch_card(
        &self,
        school_code: &str,
        token: &str,
        version: &str,
    ) -> Result<StudentCard, AppError> {
        let url = self.config.endpoint_url(CARDS_ENDPOINT);
        let protocol = &self.config.protocol;

        let request_headers = vec![
            (headers::KEY_APP, protocol.app_key.as_str()),
            (headers::VERSION, version),
            (headers::USER_AGENT, protocol.user_agent.as_str()),
            (headers::SCHOOL_CODE, school_code),
            (headers::AUTH_TOKEN, token),
        ];

        debug!("Fetching student cards from: {}", url);
        let response = make_http_request(&self.client, &url, request_headers, &[]).await?;
        let cards: Vec<StudentCard> = parse_json(response).await?;

        cards
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InvalidInput("portal returned no student card".to_string()))
    }
}

fn validate_credentials(credentials: &Credentials) -> Result<(), AppError> {
    if credentials.school_code.trim().is_empty() {
        return Err(AppError::InvalidInput("school code is required".to_string()));
    }
    if !credentials.uses_token() && credentials.username.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "username or token is required".to_string(),
        ));
    }
    Ok(())
}
