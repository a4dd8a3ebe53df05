//! Totals engine: pure derivation of document totals.
//!
//! Every amount here is full-precision [`Decimal`]; rounding is the
//! display layer's job. The engine is total: any document, including an
//! empty one or one with an out-of-range discount, produces a result.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::Document;

/// Tax collected for one BTW rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxBucket {
    /// BTW percentage this bucket collects.
    pub rate: Decimal,
    /// Sum of discounted line amounts taxed at this rate.
    pub base: Decimal,
    /// Tax owed on `base` at `rate`.
    pub tax: Decimal,
}

/// Derived monetary state of a document. Never stored, always recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTotals {
    /// Sum of all line totals before discount.
    pub subtotal: Decimal,
    /// Document-level discount amount.
    pub discount_amount: Decimal,
    /// Net amount after discount.
    pub subtotal_after_discount: Decimal,
    /// Per-rate breakdown, sorted ascending by rate. Every rate with at
    /// least one contributing line appears, zero amounts included.
    pub tax_breakdown: Vec<TaxBucket>,
    /// Exact sum of the bucket tax values.
    pub tax_total: Decimal,
    /// Payable amount: net plus tax.
    pub grand_total: Decimal,
}

impl DocumentTotals {
    /// All-zero totals, the result for a document without lines.
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            subtotal_after_discount: Decimal::ZERO,
            tax_breakdown: Vec::new(),
            tax_total: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }
}

/// Compute the full monetary state of `document`.
///
/// The document-level discount is distributed uniformly: every line's
/// amount is scaled by the same factor before tax bucketing, so each
/// rate bears its proportional share of the discount. The discount
/// percentage is applied as given, never clamped.
pub fn calculate_totals(document: &Document) -> DocumentTotals {
    if document.lines.is_empty() {
        return DocumentTotals::zero();
    }

    let hundred = dec!(100);
    let subtotal: Decimal = document.lines.iter().map(|line| line.line_total()).sum();
    let discount_amount = subtotal * document.meta.discount_percentage / hundred;
    let subtotal_after_discount = subtotal - discount_amount;

    let discount_factor = Decimal::ONE - document.meta.discount_percentage / hundred;

    let mut bases: HashMap<Decimal, Decimal> = HashMap::new();
    for line in &document.lines {
        let discounted = line.line_total() * discount_factor;
        *bases.entry(line.tax_rate.normalize()).or_insert(Decimal::ZERO) += discounted;
    }

    let mut tax_breakdown: Vec<TaxBucket> = bases
        .into_iter()
        .map(|(rate, base)| TaxBucket {
            rate,
            base,
            tax: base * rate / hundred,
        })
        .collect();
    tax_breakdown.sort_by(|a, b| a.rate.cmp(&b.rate));

    let tax_total: Decimal = tax_breakdown.iter().map(|bucket| bucket.tax).sum();
    let grand_total = subtotal_after_discount + tax_total;

    DocumentTotals {
        subtotal,
        discount_amount,
        subtotal_after_discount,
        tax_breakdown,
        tax_total,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DocumentKind, LineItem};
    use chrono::NaiveDate;

    fn document_with_lines(lines: Vec<LineItem>) -> Document {
        let issue_date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut document = Document::with_issue_date(DocumentKind::Invoice, issue_date);
        document.lines = lines;
        document
    }

    #[test]
    fn empty_document_is_all_zero() {
        let document = document_with_lines(Vec::new());
        assert_eq!(calculate_totals(&document), DocumentTotals::zero());
    }

    #[test]
    fn single_line_standard_rate() {
        let document = document_with_lines(vec![LineItem::new(
            "li-1",
            "Advieswerk",
            dec!(8),
            dec!(85),
            dec!(21),
        )]);
        let totals = calculate_totals(&document);
        assert_eq!(totals.subtotal, dec!(680));
        assert_eq!(totals.discount_amount, Decimal::ZERO);
        assert_eq!(totals.tax_breakdown.len(), 1);
        assert_eq!(totals.tax_breakdown[0].rate, dec!(21));
        assert_eq!(totals.tax_breakdown[0].tax, dec!(142.80));
        assert_eq!(totals.grand_total, dec!(822.80));
    }

    #[test]
    fn document_discount_scales_every_bucket() {
        let mut document = document_with_lines(vec![LineItem::new(
            "li-1",
            "Advieswerk",
            dec!(8),
            dec!(85),
            dec!(21),
        )]);
        document.meta.discount_percentage = dec!(10);
        let totals = calculate_totals(&document);
        assert_eq!(totals.subtotal, dec!(680));
        assert_eq!(totals.discount_amount, dec!(68));
        assert_eq!(totals.subtotal_after_discount, dec!(612));
        assert_eq!(totals.tax_breakdown[0].tax, dec!(128.52));
        assert_eq!(totals.grand_total, dec!(740.52));
    }

    #[test]
    fn mixed_rates_bucket_separately_and_sort_ascending() {
        let document = document_with_lines(vec![
            LineItem::new("li-1", "Advieswerk", dec!(1), dec!(100), dec!(21)),
            LineItem::new("li-2", "Boeken", dec!(1), dec!(50), dec!(9)),
        ]);
        let totals = calculate_totals(&document);
        assert_eq!(totals.subtotal, dec!(150));
        assert_eq!(totals.tax_breakdown.len(), 2);
        assert_eq!(totals.tax_breakdown[0].rate, dec!(9));
        assert_eq!(totals.tax_breakdown[0].tax, dec!(4.50));
        assert_eq!(totals.tax_breakdown[1].rate, dec!(21));
        assert_eq!(totals.tax_breakdown[1].tax, dec!(21));
        assert_eq!(totals.tax_total, dec!(25.50));
        assert_eq!(totals.grand_total, dec!(175.50));
    }

    #[test]
    fn full_discount_zeroes_tax_but_keeps_buckets() {
        let mut document = document_with_lines(vec![LineItem::new(
            "li-1",
            "Advieswerk",
            dec!(1),
            dec!(100),
            dec!(21),
        )]);
        document.meta.discount_percentage = dec!(100);
        let totals = calculate_totals(&document);
        assert_eq!(totals.subtotal, dec!(100));
        assert_eq!(totals.discount_amount, dec!(100));
        assert_eq!(totals.subtotal_after_discount, Decimal::ZERO);
        assert_eq!(totals.tax_breakdown.len(), 1);
        assert_eq!(totals.tax_breakdown[0].tax, Decimal::ZERO);
        assert_eq!(totals.grand_total, Decimal::ZERO);
    }

    #[test]
    fn out_of_range_discount_computes_arithmetically() {
        let mut document = document_with_lines(vec![LineItem::new(
            "li-1",
            "Advieswerk",
            dec!(1),
            dec!(100),
            dec!(21),
        )]);
        document.meta.discount_percentage = dec!(150);
        let totals = calculate_totals(&document);
        assert_eq!(totals.discount_amount, dec!(150));
        assert_eq!(totals.subtotal_after_discount, dec!(-50));
    }

    #[test]
    fn same_rate_at_different_scales_shares_one_bucket() {
        let mut document = document_with_lines(vec![
            LineItem::new("li-1", "A", dec!(1), dec!(10), dec!(21)),
            LineItem::new("li-2", "B", dec!(1), dec!(10), dec!(21)),
        ]);
        document.lines[1].tax_rate = dec!(21.0);
        let totals = calculate_totals(&document);
        assert_eq!(totals.tax_breakdown.len(), 1);
        assert_eq!(totals.tax_breakdown[0].base, dec!(20));
    }

    #[test]
    fn tax_total_equals_sum_of_buckets_exactly() {
        let mut document = document_with_lines(vec![
            LineItem::new("li-1", "A", dec!(3.5), dec!(19.99), dec!(21)),
            LineItem::new("li-2", "B", dec!(0.25), dec!(7.77), dec!(9)),
            LineItem::new("li-3", "C", dec!(12), dec!(1.01), dec!(0)),
        ]);
        document.meta.discount_percentage = dec!(3.33);
        let totals = calculate_totals(&document);
        let summed: Decimal = totals.tax_breakdown.iter().map(|b| b.tax).sum();
        assert_eq!(totals.tax_total, summed);
    }
}
