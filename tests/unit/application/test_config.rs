use argo_client::prelude::*;

#[test]
fn test_config_with_credentials_defaults() {
    let config = Config::with_credentials(Credentials::new("SS16836", "user", "pwd"));

    assert_eq!(config.credentials.school_code, "SS16836");
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.protocol.version, DEFAULT_API_VERSION);
    assert_eq!(config.protocol.user_agent, USER_AGENT);
    assert_eq!(config.protocol.version_policy, VersionPolicy::Renegotiate);
}

#[test]
fn test_config_builders() {
    let config = Config::with_credentials(Credentials::default())
        .with_base_url("http://127.0.0.1:8080/rest/")
        .with_version_policy(VersionPolicy::Strict);

    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:8080/rest");
    assert_eq!(config.endpoint_url("schede"), "http://127.0.0.1:8080/rest/schede");
    assert_eq!(config.protocol.version_policy, VersionPolicy::Strict);
}

#[test]
fn test_config_display_hides_password() {
    let config = Config::with_credentials(Credentials::new("SS16836", "user", "top-secret"));
    let display = config.to_string();

    assert!(display.contains("SS16836"));
    assert!(!display.contains("top-secret"));
}

#[test]
fn test_config_serialization_round_trip_keeps_settings() {
    let config = Config::with_credentials(Credentials::new("SS16836", "user", "pwd"))
        .with_version_policy(VersionPolicy::Strict);

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"version_policy\":\"strict\""));

    let restored: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.protocol, config.protocol);
    assert_eq!(restored.rest_api, config.rest_api);
    // Secrets are never serialized
    assert!(restored.credentials.password.is_empty());
}
