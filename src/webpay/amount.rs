//! Minor-unit conversion
//!
//! WebPay amount fields are integers in the smallest currency unit
//! (kobo for NGN). The same conversion feeds both the redirect payload
//! and the lookup query, so the two always agree.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Convert a decimal currency amount into integer minor units.
///
/// Multiplies by 100 and rounds half-away-from-zero, so a fractional
/// kobo like `1234.565` becomes `123457`. Negative or overflowing
/// amounts yield `None`; order totals are validated upstream.
pub fn to_minor_units(amount: Decimal) -> Option<u64> {
    let minor = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    minor.to_u64()
}
