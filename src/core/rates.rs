//! Permitted Dutch BTW (VAT) percentages.
//!
//! The editing layer only ever offers rates from this closed set; the
//! totals engine itself accepts any number and simply computes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Standard rate (hoog tarief), 21%.
pub const STANDARD_RATE: Decimal = dec!(21);

/// Reduced rate (laag tarief), 9%.
pub const REDUCED_RATE: Decimal = dec!(9);

/// Zero rate (nultarief), 0%.
pub const ZERO_RATE: Decimal = dec!(0);

/// All permitted rates, ascending.
pub fn permitted_rates() -> [Decimal; 3] {
    [ZERO_RATE, REDUCED_RATE, STANDARD_RATE]
}

/// Check whether `rate` is one of the permitted BTW percentages.
pub fn is_permitted_rate(rate: Decimal) -> bool {
    permitted_rates().contains(&rate)
}
