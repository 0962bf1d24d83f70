//! HTTP surface for the gateway shim
//!
//! Thin axum layer between the storefront, the processor's return
//! redirects, and the gateway core. Order storage and payment
//! persistence stay behind the [`OrderDirectory`] and
//! [`PaymentEvents`] seams.
//!
//! [`PaymentEvents`]: crate::webpay::PaymentEvents

pub mod checkout;
pub mod health;
pub mod payment;

use std::sync::Arc;

use async_trait::async_trait;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::GatewayCredentials;
use crate::webpay::{LoggingEvents, ReturnHandler};

/// Server-side view of order totals.
///
/// The amount sent to the lookup endpoint is always recomputed through
/// this seam; the client-controlled return request is never trusted
/// for it.
#[async_trait]
pub trait OrderDirectory: Send + Sync {
    /// Total for the order in minor units, or `None` if unknown.
    async fn total_minor(&self, order_id: &str) -> Option<u64>;
}

#[derive(Clone)]
pub struct AppState {
    pub credentials: GatewayCredentials,
    pub handler: Arc<ReturnHandler<LoggingEvents>>,
    pub orders: Arc<dyn OrderDirectory>,
    pub environment: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/checkout", post(checkout::start_checkout))
        .route("/payment/return", get(payment::payment_return))
        .route("/payment/cancel", get(payment::payment_cancel))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
