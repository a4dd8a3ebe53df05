//! Editing-layer validation.
//!
//! The totals engine computes for any input; these checks are the
//! finalize gate the engine itself refuses to be. All errors are
//! collected, not just the first.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::rates;
use super::types::Document;

/// Validate a document for finalizing (numbering, ranges, due term).
/// Returns all validation errors found.
pub fn validate_document(document: &Document) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if document.meta.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "document number must not be empty",
        ));
    }

    if document.meta.discount_percentage < Decimal::ZERO
        || document.meta.discount_percentage > dec!(100)
    {
        errors.push(ValidationError::new(
            "discount_percentage",
            format!(
                "discount must be between 0 and 100, got {}",
                document.meta.discount_percentage
            ),
        ));
    }

    match document.meta.due {
        None => {
            errors.push(ValidationError::new(
                "due",
                "a due date (invoice) or validity window (quote) must be set",
            ));
        }
        Some(term) => {
            if term.resolve(document.meta.issue_date) < document.meta.issue_date {
                errors.push(ValidationError::new(
                    "due",
                    "due date must not be before the issue date",
                ));
            }
        }
    }

    for (i, line) in document.lines.iter().enumerate() {
        let prefix = format!("lines[{i}]");

        if line.description.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}.description"),
                "line description must not be empty",
            ));
        }

        if line.quantity.is_sign_negative() {
            errors.push(ValidationError::new(
                format!("{prefix}.quantity"),
                "quantity must not be negative",
            ));
        }

        if line.unit_price.is_sign_negative() {
            errors.push(ValidationError::new(
                format!("{prefix}.unit_price"),
                "unit price must not be negative",
            ));
        }

        if !rates::is_permitted_rate(line.tax_rate) {
            errors.push(ValidationError::new(
                format!("{prefix}.tax_rate"),
                format!(
                    "tax rate {}% is not a permitted BTW percentage (0, 9 or 21)",
                    line.tax_rate.normalize()
                ),
            ));
        }
    }

    errors
}

/// Non-blocking hints for a draft in progress.
///
/// Blank issuer and recipient names are not errors: the renderer falls
/// back to placeholders. The editing layer can still surface them.
pub fn draft_warnings(document: &Document) -> Vec<ValidationError> {
    let mut warnings = Vec::new();

    if document.meta.issuer.name.trim().is_empty() {
        warnings.push(ValidationError::new(
            "issuer.name",
            "issuer name is blank; the document will print a placeholder",
        ));
    }

    if document.meta.recipient.name.trim().is_empty() {
        warnings.push(ValidationError::new(
            "recipient.name",
            "recipient name is blank; the document will print a placeholder",
        ));
    }

    warnings
}
