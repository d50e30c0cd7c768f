/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::constants::params;
use crate::error::AppError;
use crate::utils::time::timestamp_millis;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Makes a GET request to the portal
///
/// The `_dc` timestamp is appended to `query` on every attempt. Any response
/// with a non-success status is turned into [`AppError::AuthenticationFailed`]
/// carrying the status and the response body, so that callers can look for a
/// suggested protocol version in it.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Extra query parameters
///
/// # Example
///
/// ```ignore
/// use argo_client::model::http::make_http_request;
/// use reqwest::Client;
///
/// let client = Client::new();
/// let headers = vec![("x-key-app", "key"), ("x-version", "2.0.2")];
/// let response = make_http_request(
///     &client,
///     "https://www.portaleargo.it/famiglia/api/rest/login",
///     headers,
///     &[],
/// )
/// .await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, String)],
) -> Result<Response, AppError> {
    debug!("GET {}", url);

    let mut request = client.get(url);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    let timestamp = timestamp_millis().to_string();
    request = request.query(&[(params::TIMESTAMP, timestamp.as_str())]);
    if !query.is_empty() {
        request = request.query(query);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!("Failed to read body of rejected response: {}", e);
            String::new()
        }
    };
    error!("Request to {} failed with status {}: {}", url, status, body);
    Err(AppError::authentication_failed(status, body))
}

/// Decodes a successful response body as JSON
///
/// The body is read as text first so that malformed payloads surface as
/// [`AppError::Json`] rather than as a transport error.
pub async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
