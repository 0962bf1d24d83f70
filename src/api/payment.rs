use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::api::AppState;
use crate::webpay::{GatewayError, TransactionStatus};

/// Query parameters WebPay appends when redirecting the shopper back.
#[derive(Debug, Deserialize)]
pub struct ReturnQuery {
    pub txn_ref: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReturnResponse {
    pub txn_ref: String,
    pub status: TransactionStatus,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub status: String,
}

/// Accept/decline/exception return from the hosted payment page.
pub async fn payment_return(
    State(state): State<AppState>,
    Query(query): Query<ReturnQuery>,
) -> Result<Json<ReturnResponse>, StatusCode> {
    // The order id is everything before the reference's final 'X'
    // separator; order ids may themselves contain 'X'. The total is
    // recomputed server-side before anything is verified.
    let txn_ref = query.txn_ref.as_deref().filter(|r| !r.is_empty());
    let amount_minor = match txn_ref {
        Some(reference) => {
            let order_id = reference
                .rsplit_once('X')
                .map(|(id, _)| id)
                .unwrap_or_default();
            state
                .orders
                .total_minor(order_id)
                .await
                .ok_or(StatusCode::NOT_FOUND)?
        }
        // Let the handler produce its missing-reference error.
        None => 0,
    };

    let status = state
        .handler
        .on_return(txn_ref, amount_minor)
        .await
        .map_err(|err| match err {
            GatewayError::MissingReference => StatusCode::BAD_REQUEST,
            GatewayError::Transport { .. } | GatewayError::InvalidResponse { .. } => {
                error!("Payment return handling failed: {}", err);
                StatusCode::BAD_GATEWAY
            }
        })?;

    Ok(Json(ReturnResponse {
        txn_ref: txn_ref.unwrap_or_default().to_string(),
        status,
    }))
}

/// Explicit cancel return from the hosted payment page.
pub async fn payment_cancel(
    State(state): State<AppState>,
    Query(query): Query<ReturnQuery>,
) -> Json<CancelResponse> {
    state.handler.on_cancel(query.txn_ref.as_deref()).await;
    Json(CancelResponse {
        status: "cancelled".to_string(),
    })
}
