/// Application key sent with every request in the `x-key-app` header
pub const ARGO_APP_KEY: &str = "ax6542sdru3217t4eesd9";
/// Protocol version announced in the `x-version` header unless overridden
pub const DEFAULT_API_VERSION: &str = "2.0.2";
/// Base URL of the family REST API
pub const DEFAULT_BASE_URL: &str = "https://www.portaleargo.it/famiglia/api/rest";
/// User agent the portal expects from its own web client
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/57.0.2987.133 Safari/537.36";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Format of the `datGiorno` query parameter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Endpoint performing the credential exchange
pub const LOGIN_ENDPOINT: &str = "login";
/// Endpoint returning the student cards of the logged in user
pub const CARDS_ENDPOINT: &str = "schede";

/// Header names used by the portal
pub mod headers {
    /// Application key
    pub const KEY_APP: &str = "x-key-app";
    /// Protocol version
    pub const VERSION: &str = "x-version";
    /// User agent
    pub const USER_AGENT: &str = "user-agent";
    /// Ministerial school code
    pub const SCHOOL_CODE: &str = "x-cod-min";
    /// Username, login only
    pub const USER_ID: &str = "x-user-id";
    /// Password, login only
    pub const PASSWORD: &str = "x-pwd";
    /// Authentication token
    pub const AUTH_TOKEN: &str = "x-auth-token";
    /// Student identifier
    pub const STUDENT_ID: &str = "x-prg-alunno";
    /// Student card identifier
    pub const CARD_ID: &str = "x-prg-scheda";
    /// School identifier
    pub const SCHOOL_ID: &str = "x-prg-scuola";
}

/// Query parameter names used by the portal
pub mod params {
    /// Cache-busting timestamp in milliseconds
    pub const TIMESTAMP: &str = "_dc";
    /// Reference day of a data call
    pub const DAY: &str = "datGiorno";
}
