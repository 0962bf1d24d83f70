//! Interswitch WebPay gateway integration
//!
//! Offsite redirect flow: build a signed payload that sends the
//! shopper to the hosted payment page, then verify the transaction
//! server-side when they come back and report the outcome to the host
//! platform.

pub mod amount;
pub mod error;
pub mod handler;
pub mod lookup;
pub mod redirect;
pub mod signature;
pub mod status;
pub mod types;

pub use error::{GatewayError, GatewayResult};
pub use handler::{LoggingEvents, PaymentEvents, ReturnHandler};
pub use lookup::LookupClient;
pub use redirect::{build_redirect_payload, transaction_reference, RedirectPayload};
pub use status::TransactionStatus;
pub use types::{AuthorizedPayment, LookupResult, OutboundTransaction, PaymentNotice};
