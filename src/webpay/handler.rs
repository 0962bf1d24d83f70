//! Return and cancel orchestration
//!
//! Drives the verify-on-return half of the flow: extract the merchant
//! reference, verify server-side, classify, and hand the outcome to
//! the host platform through the [`PaymentEvents`] seam. Persistence
//! and shopper messaging stay on the host side of that seam.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::config::Mode;
use crate::webpay::error::{GatewayError, GatewayResult};
use crate::webpay::lookup::LookupClient;
use crate::webpay::status::TransactionStatus;
use crate::webpay::types::{AuthorizedPayment, PaymentNotice};

/// Outcome sink implemented by the host commerce platform.
///
/// Exactly one event fires per handled return: `payment_authorized`
/// creates a payment record plus a success message, the other three
/// are notification-only.
#[async_trait]
pub trait PaymentEvents: Send + Sync {
    async fn payment_authorized(&self, payment: AuthorizedPayment);
    async fn payment_pending(&self, notice: PaymentNotice);
    async fn payment_failed(&self, notice: PaymentNotice);
    async fn payment_cancelled(&self, notice: PaymentNotice);
}

/// Handles the shopper's return from the hosted payment page.
pub struct ReturnHandler<E: PaymentEvents> {
    lookup: LookupClient,
    events: E,
    mode: Mode,
}

impl<E: PaymentEvents> ReturnHandler<E> {
    pub fn new(lookup: LookupClient, events: E, mode: Mode) -> Self {
        Self {
            lookup,
            events,
            mode,
        }
    }

    /// Handle the success/decline/exception return.
    ///
    /// `txn_ref` comes from the return request's query string and is
    /// only trusted as a lookup key; `amount_minor` must be the order
    /// total recomputed server-side. A missing reference fails before
    /// any network call.
    pub async fn on_return(
        &self,
        txn_ref: Option<&str>,
        amount_minor: u64,
    ) -> GatewayResult<TransactionStatus> {
        let transaction_ref = match txn_ref {
            Some(value) if !value.is_empty() => value,
            _ => {
                warn!("Return request carried no transaction reference");
                return Err(GatewayError::MissingReference);
            }
        };

        let result = self.lookup.lookup(transaction_ref, amount_minor).await?;

        match result.status {
            TransactionStatus::Success => {
                self.events
                    .payment_authorized(AuthorizedPayment {
                        transaction_ref: transaction_ref.to_string(),
                        payment_reference: result.payment_reference,
                        response_code: result.response_code,
                        response_description: result.response_description,
                        amount_minor,
                        authorized_at: Utc::now(),
                        mode: self.mode,
                    })
                    .await;
            }
            TransactionStatus::Pending => {
                self.events
                    .payment_pending(PaymentNotice {
                        transaction_ref: transaction_ref.to_string(),
                        payment_reference: Some(result.payment_reference),
                        description: Some(result.response_description),
                    })
                    .await;
            }
            TransactionStatus::Failure => {
                self.events
                    .payment_failed(PaymentNotice {
                        transaction_ref: transaction_ref.to_string(),
                        payment_reference: Some(result.payment_reference),
                        description: Some(result.response_description),
                    })
                    .await;
            }
        }

        Ok(result.status)
    }

    /// Handle the explicit cancel return. No lookup happens on this
    /// path; the shopper never completed the hosted page.
    pub async fn on_cancel(&self, txn_ref: Option<&str>) {
        info!(txn_ref, "Shopper cancelled at the payment page");
        self.events
            .payment_cancelled(PaymentNotice {
                transaction_ref: txn_ref.unwrap_or_default().to_string(),
                payment_reference: None,
                description: None,
            })
            .await;
    }
}

/// Event sink that only logs; the demo binary's stand-in for a real
/// order/payment system.
pub struct LoggingEvents;

#[async_trait]
impl PaymentEvents for LoggingEvents {
    async fn payment_authorized(&self, payment: AuthorizedPayment) {
        info!(
            transaction_ref = %payment.transaction_ref,
            payment_reference = %payment.payment_reference,
            amount_minor = payment.amount_minor,
            mode = %payment.mode,
            "Payment authorized"
        );
    }

    async fn payment_pending(&self, notice: PaymentNotice) {
        info!(transaction_ref = %notice.transaction_ref, "Payment pending");
    }

    async fn payment_failed(&self, notice: PaymentNotice) {
        warn!(transaction_ref = %notice.transaction_ref, "Payment failed");
    }

    async fn payment_cancelled(&self, notice: PaymentNotice) {
        info!(transaction_ref = %notice.transaction_ref, "Payment cancelled");
    }
}
