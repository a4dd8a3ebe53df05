//! Money rounding and Dutch display formatting.
//!
//! Rounding happens only at the display and export boundary. The totals
//! engine works at full precision and never calls into this module.

use rust_decimal::{Decimal, RoundingStrategy};

/// Commercial rounding: round half away from zero to `dp` decimal places.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an EUR amount the Dutch way: "€ 1.234,56".
///
/// Always two decimals, thousands separated by periods, comma as the
/// decimal separator, minus sign between the euro sign and the amount.
pub fn format_eur(amount: Decimal) -> String {
    let rounded = round_half_up(amount, 2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let plain = format!("{abs:.2}");
    let (int_part, frac_part) = plain
        .split_once('.')
        .unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::new();
    let digits = int_part.as_bytes();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit as char);
    }

    if negative {
        format!("€ -{grouped},{frac_part}")
    } else {
        format!("€ {grouped},{frac_part}")
    }
}

/// Format a BTW percentage for table cells: "21%", "9%", "0%".
///
/// Trailing zeros are stripped; a fractional rate keeps its comma form.
pub fn format_rate(rate: Decimal) -> String {
    let normalized = rate.normalize();
    format!("{}%", normalized.to_string().replace('.', ","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_half_up(dec!(2.345), 2), dec!(2.35));
        assert_eq!(round_half_up(dec!(2.344), 2), dec!(2.34));
        assert_eq!(round_half_up(dec!(-2.345), 2), dec!(-2.35));
    }

    #[test]
    fn formats_plain_amounts() {
        assert_eq!(format_eur(dec!(0)), "€ 0,00");
        assert_eq!(format_eur(dec!(85)), "€ 85,00");
        assert_eq!(format_eur(dec!(142.8)), "€ 142,80");
    }

    #[test]
    fn formats_with_thousands_grouping() {
        assert_eq!(format_eur(dec!(1234.56)), "€ 1.234,56");
        assert_eq!(format_eur(dec!(1234567.89)), "€ 1.234.567,89");
        assert_eq!(format_eur(dec!(1000)), "€ 1.000,00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_eur(dec!(-68)), "€ -68,00");
        assert_eq!(format_eur(dec!(-1234.5)), "€ -1.234,50");
    }

    #[test]
    fn negative_that_rounds_to_zero_loses_its_sign() {
        assert_eq!(format_eur(dec!(-0.001)), "€ 0,00");
    }

    #[test]
    fn rounds_before_formatting() {
        assert_eq!(format_eur(dec!(10.005)), "€ 10,01");
        assert_eq!(format_eur(dec!(10.004)), "€ 10,00");
    }

    #[test]
    fn rates() {
        assert_eq!(format_rate(dec!(21)), "21%");
        assert_eq!(format_rate(dec!(9.00)), "9%");
        assert_eq!(format_rate(dec!(0)), "0%");
    }
}
