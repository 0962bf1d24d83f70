//! Hosted-page redirect payload
//!
//! Builds the exact field set the WebPay hosted payment page expects
//! and picks the pay endpoint for the configured mode. Rendering the
//! actual browser form belongs to the host platform.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::config::{GatewayCredentials, Mode};
use crate::webpay::signature;
use crate::webpay::types::OutboundTransaction;

/// Production hosted payment page.
pub const LIVE_PAY_URL: &str = "https://webpay.interswitchng.com/paydirect/pay";
/// Sandbox hosted payment page.
pub const TEST_PAY_URL: &str = "https://sandbox.interswitchng.com/webpay/pay";

/// Everything the host platform needs to render the redirect form.
#[derive(Debug, Clone, Serialize)]
pub struct RedirectPayload {
    /// Hosted page URL for the configured mode
    pub endpoint: &'static str,
    pub fields: RedirectFields,
}

/// Form fields for the hosted payment page.
///
/// Field names are fixed by the WebPay API contract and must not be
/// renamed; serde renames carry the wire spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectFields {
    pub product_id: String,
    pub site_redirect_url: String,
    pub txn_ref: String,
    pub hash: String,
    pub amount: u64,
    pub order_id: String,
    pub currency: String,
    pub site_name: String,
    pub cust_name: String,
    pub cust_name_desc: String,
    pub cust_id: String,
    pub cust_id_desc: String,
    pub pay_item_id: String,
    pub email: String,
    #[serde(rename = "ACCEPTURL")]
    pub accept_url: String,
    #[serde(rename = "DECLINEURL")]
    pub decline_url: String,
    #[serde(rename = "EXCEPTIONURL")]
    pub exception_url: String,
    #[serde(rename = "CANCELURL")]
    pub cancel_url: String,
}

/// Pay endpoint for a gateway mode. Only two branches exist.
pub fn pay_url(mode: Mode) -> &'static str {
    match mode {
        Mode::Live => LIVE_PAY_URL,
        Mode::Test => TEST_PAY_URL,
    }
}

/// Assemble the signed redirect payload for one checkout attempt.
///
/// Accept, decline and exception URLs all point back at the success
/// return URL; WebPay reports the actual outcome through the lookup
/// call, not through which URL it hit. Empty credential fields still
/// build a payload; [`Config::validate`] rejects them before this
/// stage.
///
/// [`Config::validate`]: crate::config::Config::validate
pub fn build_redirect_payload(
    credentials: &GatewayCredentials,
    transaction: &OutboundTransaction,
) -> RedirectPayload {
    let hash = signature::redirect_signature(
        credentials,
        &transaction.transaction_ref,
        transaction.amount_minor,
        &transaction.return_url,
    );

    RedirectPayload {
        endpoint: pay_url(credentials.mode),
        fields: RedirectFields {
            product_id: credentials.product_id.clone(),
            site_redirect_url: transaction.return_url.clone(),
            txn_ref: transaction.transaction_ref.clone(),
            hash,
            amount: transaction.amount_minor,
            order_id: transaction.order_id.clone(),
            currency: credentials.currency_code.clone(),
            site_name: transaction.site_host.clone(),
            cust_name: transaction.customer_name.clone(),
            cust_name_desc: "Customer username".to_string(),
            cust_id: transaction.customer_email.clone(),
            cust_id_desc: "Customer email address".to_string(),
            pay_item_id: credentials.pay_item_id.clone(),
            email: transaction.customer_email.clone(),
            accept_url: transaction.return_url.clone(),
            decline_url: transaction.return_url.clone(),
            exception_url: transaction.return_url.clone(),
            cancel_url: transaction.cancel_url.clone(),
        },
    }
}

/// Generate a merchant transaction reference for one checkout attempt.
///
/// `"{order_id}X{unix_timestamp}"`, with the order id stripped to
/// URL-safe characters. Uniqueness across attempts comes from the
/// timestamp; uniqueness within one second is the caller's problem and
/// in practice a shopper cannot start two attempts for the same order
/// that fast.
pub fn transaction_reference(order_id: &str, at: DateTime<Utc>) -> String {
    static URL_UNSAFE: OnceLock<Regex> = OnceLock::new();
    let unsafe_chars = URL_UNSAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._-]").unwrap());
    format!("{}X{}", unsafe_chars.replace_all(order_id, ""), at.timestamp())
}
