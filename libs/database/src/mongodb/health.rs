use mongodb::Client;
use mongodb::bson::doc;
use std::time::Instant;

/// Result of a detailed MongoDB health probe
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Driver error text when unhealthy
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// `ping` the admin database, reporting latency and the failure message.
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = ping(client).await;
    let response_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    HealthStatus {
        healthy: result.is_ok(),
        message: result.err().map(|e| e.to_string()),
        response_time_ms,
    }
}

async fn ping(client: &Client) -> mongodb::error::Result<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}
