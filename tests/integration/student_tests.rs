use crate::common;
use argo_client::prelude::*;
use chrono::Duration;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_every_endpoint_returns_json() {
    let client = common::create_logged_in_client().await;

    for endpoint in Endpoint::ALL {
        let value = client
            .call_endpoint(endpoint, None)
            .await
            .unwrap_or_else(|e| panic!("{endpoint} failed: {e}"));
        assert!(
            value.is_object() || value.is_array(),
            "{endpoint} should return an object or an array"
        );
        info!("{} returned a valid payload", endpoint);
    }
}

#[tokio::test]
#[ignore]
async fn test_yesterday_activities() {
    let client = common::create_logged_in_client().await;
    let yesterday = today() - Duration::days(1);

    let value = client
        .today(Some(yesterday))
        .await
        .expect("yesterday's activities should be available");
    assert!(!value.is_null());
}
