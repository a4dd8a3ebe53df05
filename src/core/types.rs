use chrono::{Duration, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rates;

/// Kind of commercial document produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Factuur: a payable invoice with a due date.
    Invoice,
    /// Offerte: a quote with a validity window.
    Quote,
}

impl DocumentKind {
    /// Dutch document title as printed in the layout header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Invoice => "FACTUUR",
            Self::Quote => "OFFERTE",
        }
    }

    /// Lowercase slug used in export filenames.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Invoice => "factuur",
            Self::Quote => "offerte",
        }
    }

    /// Prefix for sequential document numbering per series.
    pub fn number_prefix(&self) -> &'static str {
        match self {
            Self::Invoice => "F-",
            Self::Quote => "OFF-",
        }
    }
}

/// One sellable line of a document.
///
/// The line total is always derived via [`LineItem::line_total`], never
/// stored, so a line can never disagree with its own quantity and price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque identifier, unique within the document, assigned at creation.
    pub id: String,
    /// Free text; may be empty while editing.
    pub description: String,
    /// Non-negative; fractional values are valid (e.g. hours).
    pub quantity: Decimal,
    /// Net price per unit in EUR.
    pub unit_price: Decimal,
    /// BTW percentage, drawn from the permitted set (0, 9, 21).
    pub tax_rate: Decimal,
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            quantity,
            unit_price,
            tax_rate,
        }
    }

    /// Net line amount: `quantity * unit_price`, full precision.
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// Postal address. All fields may be empty while a draft is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }

    /// Printable address lines, skipping whatever is still blank.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.street.trim().is_empty() {
            lines.push(self.street.trim().to_string());
        }
        let locality = format!("{} {}", self.postal_code.trim(), self.city.trim());
        if !locality.trim().is_empty() {
            lines.push(locality.trim().to_string());
        }
        lines
    }
}

/// Party issuing the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    pub name: String,
    pub address: Address,
    /// KvK registration number.
    pub kvk_number: Option<String>,
    /// Bank account for payment (IBAN).
    pub iban: Option<String>,
    /// Raw logo image payload; decoded only at the PDF boundary.
    pub logo: Option<Vec<u8>>,
}

/// Party the document is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub address: Address,
}

impl Recipient {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// Due date of an invoice, or validity window of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DueTerm {
    /// Explicit calendar date.
    Date(NaiveDate),
    /// Derived as `issue_date + N` days.
    DaysAfterIssue(i64),
}

impl DueTerm {
    /// Concrete date this term resolves to for a given issue date.
    pub fn resolve(&self, issue_date: NaiveDate) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::DaysAfterIssue(days) => issue_date + Duration::days(*days),
        }
    }
}

/// Everything about a document that is not a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub kind: DocumentKind,
    /// Free-form, expected unique per issuer per series.
    pub number: String,
    pub issue_date: NaiveDate,
    /// Due date (invoice) or expiry (quote); optional while editing.
    pub due: Option<DueTerm>,
    /// Document-level discount in percent, applied to the whole document.
    pub discount_percentage: Decimal,
    pub issuer: Issuer,
    pub recipient: Recipient,
    /// Free-text footer.
    pub notes: String,
}

/// Aggregate root: metadata plus an ordered line sequence.
///
/// Line order is meaningful for display only, never for calculation.
/// Every editing operation in [`crate::core::edit`] consumes the document
/// and returns the next state; totals are derived on demand by
/// [`crate::core::calculate_totals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub meta: DocumentMeta,
    pub lines: Vec<LineItem>,
    /// Monotonic line-id counter; persisted so ids are never reused
    /// within a draft, even across remove/add cycles.
    #[serde(default)]
    pub(crate) next_line_id: u64,
}

impl Document {
    /// Fresh draft with sensible defaults: today's issue date, one blank
    /// line at quantity 1 / price 0 / standard rate, 0% discount.
    pub fn new(kind: DocumentKind) -> Self {
        Self::with_issue_date(kind, Local::now().date_naive())
    }

    /// Like [`Document::new`] with an explicit issue date.
    pub fn with_issue_date(kind: DocumentKind, issue_date: NaiveDate) -> Self {
        let mut document = Self {
            meta: DocumentMeta {
                kind,
                number: String::new(),
                issue_date,
                due: None,
                discount_percentage: Decimal::ZERO,
                issuer: Issuer::default(),
                recipient: Recipient::default(),
                notes: String::new(),
            },
            lines: Vec::new(),
            next_line_id: 0,
        };
        let id = document.fresh_line_id();
        document.lines.push(LineItem::new(
            id,
            "",
            Decimal::ONE,
            Decimal::ZERO,
            rates::STANDARD_RATE,
        ));
        document
    }

    /// Next unique line id. Skips ids already present, which covers
    /// drafts restored from storage that predate the counter.
    pub(crate) fn fresh_line_id(&mut self) -> String {
        loop {
            self.next_line_id += 1;
            let id = format!("li-{}", self.next_line_id);
            if !self.lines.iter().any(|line| line.id == id) {
                return id;
            }
        }
    }

    /// Concrete due/expiry date, when a term is set.
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.meta.due.map(|term| term.resolve(self.meta.issue_date))
    }
}
