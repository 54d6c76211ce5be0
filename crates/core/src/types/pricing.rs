//! Derived pricing helpers.
//!
//! Discount percentages are always derived from the stored price pair,
//! never stored themselves.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Percentage discount of `offer_price` against `price`, rounded to the
/// nearest whole percent.
///
/// Returns 0 when `price` is zero or the offer is not below the price.
#[must_use]
pub fn discount_percent(price: Decimal, offer_price: Decimal) -> u32 {
    if price.is_zero() || offer_price >= price {
        return 0;
    }
    let ratio = (price - offer_price) / price * Decimal::from(100);
    ratio
        .round()
        .to_u32()
        .unwrap_or(0)
}
