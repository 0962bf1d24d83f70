//! WebPay flow types
//!
//! Data carried through the redirect-out / verify-on-return flow and
//! the event payloads handed to the host commerce platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Mode;
use crate::webpay::status::TransactionStatus;

/// One checkout attempt headed to the hosted payment page.
///
/// Built once per attempt and discarded after the redirect is issued;
/// only `transaction_ref` survives the round-trip, echoed back by the
/// processor in the return URL.
#[derive(Debug, Clone)]
pub struct OutboundTransaction {
    /// Caller-generated reference, unique per attempt for this merchant
    pub transaction_ref: String,
    /// Order total in minor units (kobo)
    pub amount_minor: u64,
    pub order_id: String,
    /// URL the processor returns the shopper to after payment
    pub return_url: String,
    /// URL the processor returns the shopper to on explicit cancel
    pub cancel_url: String,
    pub customer_name: String,
    pub customer_email: String,
    /// Merchant site host shown on the hosted page
    pub site_host: String,
}

/// Verified transaction state from the lookup endpoint.
///
/// Produced fresh on every return; never cached. Persistence belongs to
/// the host platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    pub response_code: String,
    pub response_description: String,
    /// Processor-side identifier for the attempt
    pub payment_reference: String,
    pub status: TransactionStatus,
}

/// Payload for the "payment authorized" collaborator event.
///
/// Mirrors what the host platform records on its payment entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizedPayment {
    pub transaction_ref: String,
    pub payment_reference: String,
    pub response_code: String,
    pub response_description: String,
    pub amount_minor: u64,
    pub authorized_at: DateTime<Utc>,
    pub mode: Mode,
}

/// Payload for the pending/failed/cancelled notification events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentNotice {
    pub transaction_ref: String,
    /// Absent when the processor never saw the attempt (e.g. cancel)
    pub payment_reference: Option<String>,
    pub description: Option<String>,
}
