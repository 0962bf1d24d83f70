use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures in the WebPay redirect/verify flow.
///
/// Every variant propagates to the caller; nothing is retried or
/// swallowed inside this crate. The MAC key is never part of any
/// message.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The return request carried no transaction reference. Fatal for
    /// this invocation; no lookup is attempted.
    #[error("no transaction reference found on return")]
    MissingReference,

    /// Network, timeout, or HTTP-level failure calling the lookup
    /// endpoint. The caller owns any retry policy.
    #[error("transaction lookup transport failure: {message}")]
    Transport { message: String },

    /// The processor reply could not be parsed, or did not identify the
    /// transaction. Must never be interpreted as a payment outcome.
    #[error("invalid transaction lookup response: {message}")]
    InvalidResponse { message: String },
}

impl GatewayError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::transport("lookup request timed out")
        } else {
            GatewayError::transport(format!("request error: {}", err))
        }
    }
}
