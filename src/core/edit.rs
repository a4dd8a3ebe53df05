//! Pure editing operations on [`Document`].
//!
//! Every operation consumes the document and returns the next state, so
//! the editing layer holds exactly one current document at a time and
//! totals can never observe a half-applied edit.

use rust_decimal::Decimal;

use super::error::FactuurError;
use super::rates;
use super::types::{Document, DueTerm, Issuer, LineItem, Recipient};

/// A single-field change to one line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemEdit {
    Description(String),
    Quantity(Decimal),
    UnitPrice(Decimal),
    TaxRate(Decimal),
}

impl Document {
    /// Append a blank line: quantity 1, price 0, standard rate, fresh id.
    pub fn add_line_item(mut self) -> Self {
        let id = self.fresh_line_id();
        self.lines.push(LineItem::new(
            id,
            "",
            Decimal::ONE,
            Decimal::ZERO,
            rates::STANDARD_RATE,
        ));
        self
    }

    /// Apply `edit` to the line with the given id.
    ///
    /// Unknown ids are an error; all other lines are untouched either way.
    pub fn update_line_item(
        mut self,
        id: &str,
        edit: LineItemEdit,
    ) -> Result<Self, FactuurError> {
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.id == id)
            .ok_or_else(|| FactuurError::UnknownLineItem(id.to_string()))?;
        match edit {
            LineItemEdit::Description(description) => line.description = description,
            LineItemEdit::Quantity(quantity) => line.quantity = quantity,
            LineItemEdit::UnitPrice(unit_price) => line.unit_price = unit_price,
            LineItemEdit::TaxRate(tax_rate) => line.tax_rate = tax_rate,
        }
        Ok(self)
    }

    /// Remove the line with the given id. Unknown ids are a no-op;
    /// removing the last line leaves an empty, still valid document.
    pub fn remove_line_item(mut self, id: &str) -> Self {
        self.lines.retain(|line| line.id != id);
        self
    }

    pub fn set_number(mut self, number: impl Into<String>) -> Self {
        self.meta.number = number.into();
        self
    }

    pub fn set_discount_percentage(mut self, percentage: Decimal) -> Self {
        self.meta.discount_percentage = percentage;
        self
    }

    pub fn set_due_term(mut self, due: Option<DueTerm>) -> Self {
        self.meta.due = due;
        self
    }

    pub fn set_notes(mut self, notes: impl Into<String>) -> Self {
        self.meta.notes = notes.into();
        self
    }

    pub fn set_issuer(mut self, issuer: Issuer) -> Self {
        self.meta.issuer = issuer;
        self
    }

    pub fn set_recipient(mut self, recipient: Recipient) -> Self {
        self.meta.recipient = recipient;
        self
    }
}
