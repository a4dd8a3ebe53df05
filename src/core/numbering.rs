use chrono::{Datelike, NaiveDate};

use super::error::FactuurError;
use super::types::DocumentKind;

/// Sequential document number generator, one series per document kind.
///
/// Generates numbers in the format `{prefix}{year}-{sequential}`,
/// e.g. "F-2025-001", "F-2025-002" for invoices and "OFF-2025-001"
/// for quotes.
///
/// Dutch administration rules require consecutive invoice numbering.
/// This struct tracks the last issued number within its series and
/// ensures no gaps.
#[derive(Debug, Clone)]
pub struct DocumentNumberSequence {
    prefix: String,
    year: i32,
    next_number: u64,
    zero_pad: usize,
}

impl DocumentNumberSequence {
    /// Create a new series for a document kind, starting at 1.
    pub fn new(kind: DocumentKind, year: i32) -> Self {
        Self {
            prefix: kind.number_prefix().to_string(),
            year,
            next_number: 1,
            zero_pad: 3,
        }
    }

    /// Create a series continuing from a given number.
    pub fn starting_at(kind: DocumentKind, year: i32, next_number: u64) -> Self {
        Self {
            prefix: kind.number_prefix().to_string(),
            year,
            next_number,
            zero_pad: 3,
        }
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next document number.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            num,
            width = self.zero_pad
        )
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            self.next_number,
            width = self.zero_pad
        )
    }

    /// Current year of the series.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Next counter value that will be issued, without formatting.
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Advance to a new year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), FactuurError> {
        if new_year <= self.year {
            return Err(FactuurError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        self.year = new_year;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance year if the given date is in a new year.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let date_year = date.year();
        if date_year > self.year {
            self.year = date_year;
            self.next_number = 1;
            true
        } else {
            false
        }
    }
}
