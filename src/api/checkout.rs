use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::api::AppState;
use crate::webpay::types::OutboundTransaction;
use crate::webpay::{amount, redirect, RedirectPayload};

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub order_id: String,
    /// Order total in major currency units (naira)
    pub total: Decimal,
    pub return_url: String,
    pub cancel_url: String,
    pub customer_name: String,
    pub customer_email: String,
    pub site_host: String,
}

/// Start a checkout attempt: mint a transaction reference, sign the
/// payload, and hand the storefront everything it needs to render the
/// redirect form.
pub async fn start_checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<RedirectPayload>, StatusCode> {
    let amount_minor =
        amount::to_minor_units(request.total).ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;

    let transaction_ref = redirect::transaction_reference(&request.order_id, Utc::now());

    let transaction = OutboundTransaction {
        transaction_ref: transaction_ref.clone(),
        amount_minor,
        order_id: request.order_id,
        return_url: request.return_url,
        cancel_url: request.cancel_url,
        customer_name: request.customer_name,
        customer_email: request.customer_email,
        site_host: request.site_host,
    };

    let payload = redirect::build_redirect_payload(&state.credentials, &transaction);

    info!(
        transaction_ref,
        amount_minor,
        endpoint = payload.endpoint,
        "Built WebPay redirect payload"
    );

    Ok(Json(payload))
}
