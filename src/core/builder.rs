use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::FactuurError;
use super::rates;
use super::types::{Address, Document, DocumentKind, DueTerm, Issuer, LineItem, Recipient};
use super::validation;

/// Builder for constructing complete documents in one expression.
///
/// ```
/// use factuur::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = DocumentBuilder::new(DocumentKind::Invoice, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
///     .number("F-2025-0001")
///     .due(DueTerm::DaysAfterIssue(14))
///     .issuer(IssuerBuilder::new("Jansen Webdesign")
///         .address(Address::new("Keizersgracht 1", "1015 CS", "Amsterdam"))
///         .kvk_number("12345678")
///         .iban("NL02ABNA0123456789")
///         .build())
///     .recipient(Recipient::new("Bakkerij de Boer", Address::new("Dorpsstraat 8", "1411 AB", "Naarden")))
///     .line("Advieswerk maart", dec!(8), dec!(85), dec!(21))
///     .build();
/// assert!(invoice.is_ok());
/// ```
pub struct DocumentBuilder {
    kind: DocumentKind,
    issue_date: NaiveDate,
    number: String,
    due: Option<DueTerm>,
    discount_percentage: Decimal,
    issuer: Issuer,
    recipient: Recipient,
    notes: String,
    lines: Vec<(String, Decimal, Decimal, Decimal)>,
}

impl DocumentBuilder {
    pub fn new(kind: DocumentKind, issue_date: NaiveDate) -> Self {
        Self {
            kind,
            issue_date,
            number: String::new(),
            due: None,
            discount_percentage: Decimal::ZERO,
            issuer: Issuer::default(),
            recipient: Recipient::default(),
            notes: String::new(),
            lines: Vec::new(),
        }
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn due(mut self, due: DueTerm) -> Self {
        self.due = Some(due);
        self
    }

    pub fn discount_percentage(mut self, percentage: Decimal) -> Self {
        self.discount_percentage = percentage;
        self
    }

    pub fn issuer(mut self, issuer: Issuer) -> Self {
        self.issuer = issuer;
        self
    }

    pub fn recipient(mut self, recipient: Recipient) -> Self {
        self.recipient = recipient;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Append a line. Ids are assigned by the document on build.
    pub fn line(
        mut self,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        self.lines
            .push((description.into(), quantity, unit_price, tax_rate));
        self
    }

    /// Build the document and run finalize validation.
    /// Returns all validation errors joined, not just the first.
    pub fn build(self) -> Result<Document, FactuurError> {
        if self.lines.is_empty() {
            return Err(FactuurError::Builder(
                "at least one line item is required".into(),
            ));
        }

        // Input limits to prevent abuse
        if self.lines.len() > 10_000 {
            return Err(FactuurError::Builder(
                "document cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(FactuurError::Builder(
                "document number cannot exceed 200 characters".into(),
            ));
        }

        let document = self.assemble();

        let errors = validation::validate_document(&document);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FactuurError::Validation(msg));
        }

        Ok(document)
    }

    /// Build without validation. Useful for drafts and tests.
    pub fn build_unchecked(self) -> Document {
        self.assemble()
    }

    fn assemble(self) -> Document {
        let mut document = Document::with_issue_date(self.kind, self.issue_date);
        document.lines.clear();
        document.meta.number = self.number;
        document.meta.due = self.due;
        document.meta.discount_percentage = self.discount_percentage;
        document.meta.issuer = self.issuer;
        document.meta.recipient = self.recipient;
        document.meta.notes = self.notes;
        for (description, quantity, unit_price, tax_rate) in self.lines {
            let id = document.fresh_line_id();
            document
                .lines
                .push(LineItem::new(id, description, quantity, unit_price, tax_rate));
        }
        document
    }
}

/// Builder for the issuing party.
pub struct IssuerBuilder {
    name: String,
    address: Address,
    kvk_number: Option<String>,
    iban: Option<String>,
    logo: Option<Vec<u8>>,
}

impl IssuerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: Address::default(),
            kvk_number: None,
            iban: None,
            logo: None,
        }
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn kvk_number(mut self, number: impl Into<String>) -> Self {
        self.kvk_number = Some(number.into());
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    pub fn logo(mut self, bytes: Vec<u8>) -> Self {
        self.logo = Some(bytes);
        self
    }

    pub fn build(self) -> Issuer {
        Issuer {
            name: self.name,
            address: self.address,
            kvk_number: self.kvk_number,
            iban: self.iban,
            logo: self.logo,
        }
    }
}
