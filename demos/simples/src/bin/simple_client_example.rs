use argo_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting simple client example");

    // Credentials come from ARGO_* environment variables or a .env file
    let client = Client::new(Config::new()).await?;
    let session = client.get_session().await?;
    info!(
        "✓ Logged in, student {} (card {})",
        session.student_id(),
        session.card_id()
    );

    let absences = client.absences().await?;
    info!("Absences: {}", serde_json::to_string_pretty(&absences)?);

    let yesterday = today() - chrono::Duration::days(1);
    let activities = client.today(Some(yesterday)).await?;
    info!("Yesterday: {}", serde_json::to_string_pretty(&activities)?);

    // Endpoints without a named wrapper can be called by name
    let board = client.call("bachecanuova", None).await;
    match board {
        Ok(value) => info!("Notice board: {}", value),
        Err(e) => info!("Notice board not available: {}", e),
    }

    client.logout().await?;
    Ok(())
}
