//! Server-side transaction verification
//!
//! Return-URL parameters are client-controlled, so the payment outcome
//! is only ever taken from a signed server-to-server lookup against
//! the WebPay transaction endpoint.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

use crate::config::{GatewayCredentials, Mode};
use crate::webpay::error::{GatewayError, GatewayResult};
use crate::webpay::signature;
use crate::webpay::status::TransactionStatus;
use crate::webpay::types::LookupResult;

/// Production transaction lookup endpoint.
pub const LIVE_LOOKUP_URL: &str =
    "https://webpay.interswitchng.com/paydirect/api/v1/gettransaction.json";
/// Sandbox transaction lookup endpoint.
pub const TEST_LOOKUP_URL: &str =
    "https://sandbox.interswitchng.com/webpay/api/v1/gettransaction.json";

/// Request timeout; WebPay does not define one, so a timed-out lookup
/// surfaces as a transport error after 30 seconds.
const LOOKUP_TIMEOUT_SECS: u64 = 30;

/// Lookup endpoint for a gateway mode. Only two branches exist.
pub fn lookup_url(mode: Mode) -> &'static str {
    match mode {
        Mode::Live => LIVE_LOOKUP_URL,
        Mode::Test => TEST_LOOKUP_URL,
    }
}

/// Signed client for the WebPay transaction lookup endpoint.
///
/// One outbound GET per [`lookup`] call; no retries live here, a
/// caller with a retry policy owns them.
///
/// [`lookup`]: LookupClient::lookup
pub struct LookupClient {
    credentials: GatewayCredentials,
    client: Client,
    endpoint: String,
}

impl LookupClient {
    pub fn new(credentials: GatewayCredentials) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        let endpoint = lookup_url(credentials.mode).to_string();

        Self {
            credentials,
            client,
            endpoint,
        }
    }

    /// Point the client at a non-standard endpoint. Test hook; real
    /// deployments always use the mode-selected constant.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Verify one transaction against the processor.
    ///
    /// `amount_minor` is the order total recomputed server-side, in
    /// minor units, and must match the amount the redirect was signed
    /// with.
    pub async fn lookup(
        &self,
        transaction_ref: &str,
        amount_minor: u64,
    ) -> GatewayResult<LookupResult> {
        let hash = signature::lookup_signature(&self.credentials, transaction_ref);

        info!(
            transaction_ref,
            amount_minor, "Looking up WebPay transaction"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header("Hash", hash)
            .query(&[
                ("productid", self.credentials.product_id.as_str()),
                ("transactionreference", transaction_ref),
                ("amount", &amount_minor.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(transaction_ref, %status, "WebPay lookup returned an error status");
            return Err(GatewayError::transport(format!(
                "lookup returned HTTP {}",
                status
            )));
        }

        let body = response.text().await?;
        let reply: LookupReply = serde_json::from_str(&body).map_err(|e| {
            error!(transaction_ref, "WebPay lookup body was not valid JSON: {}", e);
            GatewayError::invalid_response(format!("body is not valid JSON: {}", e))
        })?;

        // The processor identifies the transaction by echoing the
        // merchant reference. No echo means no transaction; that is a
        // verification failure, never a pending payment.
        if reply.txn_ref.as_deref().unwrap_or("").is_empty() {
            error!(transaction_ref, "WebPay lookup did not echo the transaction reference");
            return Err(GatewayError::invalid_response(
                "unable to identify payment transaction",
            ));
        }

        let status = TransactionStatus::classify(&reply.response_code);
        info!(
            transaction_ref,
            response_code = %reply.response_code,
            ?status,
            "WebPay lookup complete"
        );

        Ok(LookupResult {
            response_code: reply.response_code,
            response_description: reply.response_description,
            payment_reference: reply.payment_reference,
            status,
        })
    }
}

/// Wire shape of the lookup reply; only the consumed fields.
#[derive(Debug, Deserialize)]
struct LookupReply {
    #[serde(rename = "ResponseCode", default)]
    response_code: String,
    #[serde(rename = "ResponseDescription", default)]
    response_description: String,
    #[serde(rename = "PaymentReference", default)]
    payment_reference: String,
    /// Echoed merchant reference; its absence is a hard failure
    #[serde(rename = "txn_ref", default)]
    txn_ref: Option<String>,
}
