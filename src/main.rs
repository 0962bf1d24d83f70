use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;

use webpay_gateway::api::{self, AppState, OrderDirectory};
use webpay_gateway::config::Config;
use webpay_gateway::webpay::{LoggingEvents, LookupClient, ReturnHandler};

/// Demo order store; a real deployment resolves totals from the
/// commerce platform's order storage.
struct InMemoryOrders {
    totals_minor: HashMap<String, u64>,
}

#[async_trait]
impl OrderDirectory for InMemoryOrders {
    async fn total_minor(&self, order_id: &str) -> Option<u64> {
        self.totals_minor.get(order_id).copied()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Log startup info
    tracing::info!("Starting WebPay gateway");
    tracing::info!("Environment: {}", config.server.environment);
    tracing::info!("Gateway mode: {}", config.webpay.mode);

    let lookup = LookupClient::new(config.webpay.clone());
    let handler = Arc::new(ReturnHandler::new(
        lookup,
        LoggingEvents,
        config.webpay.mode,
    ));
    let orders = Arc::new(InMemoryOrders {
        totals_minor: HashMap::new(),
    });

    let state = AppState {
        credentials: config.webpay.clone(),
        handler,
        orders,
        environment: config.server.environment.clone(),
    };

    // Build router
    let app = api::router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
