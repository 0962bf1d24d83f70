//! WebPay request signing
//!
//! Interswitch authenticates both the hosted-page redirect and the
//! server-side transaction lookup with a SHA-512 digest over a fixed
//! concatenation of request fields and the merchant MAC key. The two
//! call sites use different field orders and must stay separate.

use sha2::{Digest, Sha512};

use crate::config::GatewayCredentials;

/// Hex-encoded SHA-512 over the concatenation of `parts`, in order,
/// with no delimiter between fields.
pub fn sign(parts: &[&str]) -> String {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Signature for the outbound hosted-page redirect.
///
/// Field order is fixed by the WebPay API contract:
/// `txn_ref . product_id . pay_item_id . amount . site_redirect_url . mac_key`.
pub fn redirect_signature(
    credentials: &GatewayCredentials,
    transaction_ref: &str,
    amount_minor: u64,
    return_url: &str,
) -> String {
    sign(&[
        transaction_ref,
        &credentials.product_id,
        &credentials.pay_item_id,
        &amount_minor.to_string(),
        return_url,
        credentials.mac_key.reveal(),
    ])
}

/// Signature for the server-side transaction lookup, sent as the
/// `Hash` request header.
///
/// Field order is fixed: `product_id . txn_ref . mac_key`.
pub fn lookup_signature(credentials: &GatewayCredentials, transaction_ref: &str) -> String {
    sign(&[
        &credentials.product_id,
        transaction_ref,
        credentials.mac_key.reveal(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MacKey, Mode};

    fn test_credentials() -> GatewayCredentials {
        GatewayCredentials {
            product_id: "PROD1".to_string(),
            pay_item_id: "ITEM1".to_string(),
            mac_key: MacKey::new("secret"),
            currency_code: "NGN".to_string(),
            mode: Mode::Test,
        }
    }

    #[test]
    fn test_sign_matches_sha512_of_concatenation() {
        // sha512("abc")
        let expected = "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                        2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f";
        assert_eq!(sign(&["abc"]), expected);
        // Concatenation has no delimiter, so the split point is invisible.
        assert_eq!(sign(&["ab", "c"]), expected);
    }

    #[test]
    fn test_sign_is_deterministic() {
        let parts = ["ORDER1X1700000000", "PROD1", "secret"];
        assert_eq!(sign(&parts), sign(&parts));
    }

    #[test]
    fn test_sign_is_order_sensitive() {
        assert_ne!(sign(&["a", "b"]), sign(&["b", "a"]));
    }

    #[test]
    fn test_sign_is_content_sensitive() {
        assert_ne!(
            sign(&["ORDER1X1700000000", "PROD1", "secret"]),
            sign(&["ORDER1X1700000000", "PROD2", "secret"])
        );
    }

    #[test]
    fn test_redirect_signature_golden_vector() {
        let signature = redirect_signature(
            &test_credentials(),
            "ORDER1X1700000000",
            150_000,
            "https://shop.example/return",
        );
        assert_eq!(
            signature,
            "e033df740e32311d8d19540f3b0c883f62e7ac126d1c9f557ecefadc9f3be6d6\
             04551eff5ece8ede8a78cc9e1c1744273ee5e307242461213ec1e8ca09176673"
        );
    }

    #[test]
    fn test_lookup_signature_golden_vector() {
        let signature = lookup_signature(&test_credentials(), "ORDER1X1700000000");
        assert_eq!(
            signature,
            "896f929021d65189494bed8c0ae693d15ba9c253da39cfe64159d116a230aa05\
             1d82cebde0b0e6fa3813ab2fa14554807f3f0cee608252dbdc2302af79bf407c"
        );
    }

    #[test]
    fn test_redirect_and_lookup_orderings_do_not_collide() {
        let credentials = test_credentials();
        let redirect = redirect_signature(
            &credentials,
            "ORDER1X1700000000",
            150_000,
            "https://shop.example/return",
        );
        let lookup = lookup_signature(&credentials, "ORDER1X1700000000");
        assert_ne!(redirect, lookup);
    }
}
