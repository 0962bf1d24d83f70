//! WebPay response-code classification

use serde::{Deserialize, Serialize};

/// Outcome of a verified transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Payment was approved by the processor
    Success,
    /// Payment is awaiting settlement or customer action
    Pending,
    /// Payment was declined, errored, or the code is unknown
    Failure,
}

impl TransactionStatus {
    /// Map a WebPay `ResponseCode` to an outcome.
    ///
    /// The codes are discrete values from the Interswitch response-code
    /// table, not a numeric range: `00` approved, `11` approved with
    /// partial settlement, `09` and `10` in progress. Everything else,
    /// including codes this integration has never seen, is a failure.
    pub fn classify(response_code: &str) -> Self {
        match response_code {
            "00" | "11" => Self::Success,
            "09" | "10" => Self::Pending,
            _ => Self::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_codes_are_success() {
        assert_eq!(TransactionStatus::classify("00"), TransactionStatus::Success);
        assert_eq!(TransactionStatus::classify("11"), TransactionStatus::Success);
    }

    #[test]
    fn test_in_progress_codes_are_pending() {
        assert_eq!(TransactionStatus::classify("09"), TransactionStatus::Pending);
        assert_eq!(TransactionStatus::classify("10"), TransactionStatus::Pending);
    }

    #[test]
    fn test_unknown_codes_are_failure() {
        assert_eq!(TransactionStatus::classify("99"), TransactionStatus::Failure);
        assert_eq!(TransactionStatus::classify("Z5"), TransactionStatus::Failure);
        assert_eq!(TransactionStatus::classify(""), TransactionStatus::Failure);
        // No numeric-range rule: codes adjacent to success codes still fail.
        assert_eq!(TransactionStatus::classify("01"), TransactionStatus::Failure);
        assert_eq!(TransactionStatus::classify("12"), TransactionStatus::Failure);
    }
}
