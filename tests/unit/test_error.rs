use argo_client::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_not_logged_in() {
    let error = AppError::NotLoggedIn;
    assert_eq!(error.to_string(), "not logged in");
}

#[test]
fn test_app_error_display_authentication_failed() {
    let error = AppError::authentication_failed(StatusCode::UNAUTHORIZED, "bad credentials");
    let text = error.to_string();
    assert!(text.starts_with("authentication failed"));
    assert!(text.contains("401"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("endpoint name is empty".to_string());
    assert_eq!(error.to_string(), "invalid input: endpoint name is empty");
}

#[test]
fn test_app_error_predicates() {
    assert!(AppError::NotLoggedIn.is_not_logged_in());
    assert!(!AppError::NotLoggedIn.is_authentication_failed());

    let error = AppError::authentication_failed(StatusCode::FORBIDDEN, "");
    assert!(error.is_authentication_failed());
    assert!(!error.is_not_logged_in());
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => assert!(app_error.source().is_some()),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_authentication_failed_keeps_payload() {
    let error = AppError::authentication_failed(StatusCode::UNAUTHORIZED, "versione 2.1.0");
    match error {
        AppError::AuthenticationFailed { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "versione 2.1.0");
        }
        _ => panic!("Expected AuthenticationFailed"),
    }
}
