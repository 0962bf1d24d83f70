use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub gateway_mode: String,
    pub webpay_configured: bool,
}

pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let version = env!("CARGO_PKG_VERSION").to_string();

    let webpay_configured = !state.credentials.product_id.is_empty()
        && !state.credentials.pay_item_id.is_empty()
        && !state.credentials.mac_key.is_empty();

    let response = HealthResponse {
        status: "healthy".to_string(),
        version,
        environment: state.environment.clone(),
        gateway_mode: state.credentials.mode.to_string(),
        webpay_configured,
    };

    Ok(Json(response))
}
