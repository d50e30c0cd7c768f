// Common utilities for integration tests

use argo_client::prelude::*;

/// Creates a client logged in with the credentials from the environment
pub async fn create_logged_in_client() -> Client {
    setup_logger();
    Client::new(Config::new())
        .await
        .expect("Failed to login, check the ARGO_* environment variables")
}
