//! Positioned A4 layout for invoices and quotes.
//!
//! Coordinates are millimeters with the origin at the bottom-left of the
//! page, matching the PDF coordinate system. The cursor walks downward
//! from the top margin; rows that do not fit flow onto continuation
//! pages with a repeated table header. The totals footer is never split
//! across a page boundary.

use chrono::NaiveDateTime;

use crate::core::money::{format_eur, format_rate};
use crate::core::{Document, DocumentKind, DocumentTotals};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const MARGIN_LEFT: f32 = 15.0;
const MARGIN_RIGHT: f32 = 195.0;
const CONTENT_TOP: f32 = 285.0;
const CONTENT_BOTTOM: f32 = 25.0;
const ROW_STEP: f32 = 6.0;
const DETAIL_STEP: f32 = 5.0;

const COL_DESCRIPTION: f32 = MARGIN_LEFT;
const COL_QUANTITY: f32 = 115.0;
const COL_UNIT_PRICE: f32 = 135.0;
const COL_RATE: f32 = 158.0;
const COL_TOTAL: f32 = 172.0;

/// Fallback issuer name when the draft has none yet.
pub const ISSUER_PLACEHOLDER: &str = "Uw bedrijf";
/// Fallback recipient name when the draft has none yet.
pub const RECIPIENT_PLACEHOLDER: &str = "Klantnaam";

/// One positioned element on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        content: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
    },
    /// Reserved area for the issuer logo, top-right of the first page.
    LogoSlot {
        x: f32,
        y: f32,
        width: f32,
    },
}

/// One A4 page of positioned elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    pub elements: Vec<LayoutElement>,
}

/// A fully paginated document, ready for a presentation target.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub pages: Vec<LayoutPage>,
    /// Raw logo payload for the slot on page one, if the issuer has one.
    pub logo: Option<Vec<u8>>,
}

struct LayoutCursor {
    pages: Vec<LayoutPage>,
    y: f32,
}

impl LayoutCursor {
    fn new() -> Self {
        Self {
            pages: vec![LayoutPage::default()],
            y: CONTENT_TOP,
        }
    }

    fn page(&mut self) -> &mut LayoutPage {
        // The cursor always holds at least one page.
        self.pages.last_mut().unwrap()
    }

    fn text(&mut self, x: f32, y: f32, size: f32, bold: bool, content: impl Into<String>) {
        self.page().elements.push(LayoutElement::Text {
            x,
            y,
            size,
            bold,
            content: content.into(),
        });
    }

    fn rule(&mut self, y: f32) {
        self.page().elements.push(LayoutElement::Rule {
            x1: MARGIN_LEFT,
            x2: MARGIN_RIGHT,
            y,
        });
    }

    fn new_page(&mut self) {
        self.pages.push(LayoutPage::default());
        self.y = CONTENT_TOP;
    }

    fn fits(&self, height: f32) -> bool {
        self.y - height >= CONTENT_BOTTOM
    }
}

/// Lay out a document and its totals as positioned pages.
pub fn layout_document(document: &Document, totals: &DocumentTotals) -> DocumentLayout {
    let mut cursor = LayoutCursor::new();

    issuer_header(&mut cursor, document);
    title_block(&mut cursor, document);
    recipient_and_meta(&mut cursor, document);
    table(&mut cursor, document);
    totals_footer(&mut cursor, document, totals);
    notes_footer(&mut cursor, document);

    DocumentLayout {
        pages: cursor.pages,
        logo: document.meta.issuer.logo.clone(),
    }
}

fn display_name(name: &str, placeholder: &'static str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

fn issuer_header(cursor: &mut LayoutCursor, document: &Document) {
    let issuer = &document.meta.issuer;

    cursor.text(
        MARGIN_LEFT,
        cursor.y,
        16.0,
        true,
        display_name(&issuer.name, ISSUER_PLACEHOLDER),
    );
    cursor.y -= 7.0;

    for line in issuer.address.lines() {
        cursor.text(MARGIN_LEFT, cursor.y, 10.0, false, line);
        cursor.y -= DETAIL_STEP;
    }
    if let Some(kvk) = &issuer.kvk_number {
        cursor.text(MARGIN_LEFT, cursor.y, 10.0, false, format!("KvK {kvk}"));
        cursor.y -= DETAIL_STEP;
    }
    if let Some(iban) = &issuer.iban {
        cursor.text(MARGIN_LEFT, cursor.y, 10.0, false, format!("IBAN {iban}"));
        cursor.y -= DETAIL_STEP;
    }

    if issuer.logo.is_some() {
        cursor.page().elements.push(LayoutElement::LogoSlot {
            x: 155.0,
            y: 262.0,
            width: 40.0,
        });
    }
}

fn title_block(cursor: &mut LayoutCursor, document: &Document) {
    cursor.text(140.0, CONTENT_TOP, 24.0, true, document.meta.kind.title());
    let number = document.meta.number.trim();
    if !number.is_empty() {
        cursor.text(140.0, CONTENT_TOP - 8.0, 12.0, true, number);
    }
}

fn recipient_and_meta(cursor: &mut LayoutCursor, document: &Document) {
    let top = 245.0;
    cursor.rule(top + 6.0);

    cursor.text(MARGIN_LEFT, top, 11.0, true, "Aan:");
    let mut y = top - ROW_STEP;
    cursor.text(
        MARGIN_LEFT,
        y,
        10.0,
        false,
        display_name(&document.meta.recipient.name, RECIPIENT_PLACEHOLDER),
    );
    y -= DETAIL_STEP;
    for line in document.meta.recipient.address.lines() {
        cursor.text(MARGIN_LEFT, y, 10.0, false, line);
        y -= DETAIL_STEP;
    }

    let label_x = 120.0;
    let value_x = 150.0;
    let mut meta_y = top;
    cursor.text(label_x, meta_y, 10.0, true, "Nummer:");
    let number = document.meta.number.trim();
    cursor.text(
        value_x,
        meta_y,
        10.0,
        false,
        if number.is_empty() { "concept" } else { number },
    );
    meta_y -= ROW_STEP;

    cursor.text(label_x, meta_y, 10.0, true, "Datum:");
    cursor.text(
        value_x,
        meta_y,
        10.0,
        false,
        document.meta.issue_date.format("%d-%m-%Y").to_string(),
    );
    meta_y -= ROW_STEP;

    if let Some(due_date) = document.due_date() {
        let label = match document.meta.kind {
            DocumentKind::Invoice => "Vervaldatum:",
            DocumentKind::Quote => "Geldig tot:",
        };
        cursor.text(label_x, meta_y, 10.0, true, label);
        cursor.text(
            value_x,
            meta_y,
            10.0,
            false,
            due_date.format("%d-%m-%Y").to_string(),
        );
    }

    cursor.y = 215.0;
}

fn table_header(cursor: &mut LayoutCursor) {
    let y = cursor.y;
    cursor.text(COL_DESCRIPTION, y, 10.0, true, "Omschrijving");
    cursor.text(COL_QUANTITY, y, 10.0, true, "Aantal");
    cursor.text(COL_UNIT_PRICE, y, 10.0, true, "Prijs");
    cursor.text(COL_RATE, y, 10.0, true, "BTW");
    cursor.text(COL_TOTAL, y, 10.0, true, "Bedrag");
    cursor.rule(y - 2.0);
    cursor.y = y - ROW_STEP - 2.0;
}

fn table(cursor: &mut LayoutCursor, document: &Document) {
    table_header(cursor);

    for line in &document.lines {
        if !cursor.fits(ROW_STEP) {
            cursor.new_page();
            table_header(cursor);
        }
        let y = cursor.y;
        cursor.text(COL_DESCRIPTION, y, 10.0, false, line.description.trim());
        cursor.text(COL_QUANTITY, y, 10.0, false, line.quantity.normalize().to_string());
        cursor.text(COL_UNIT_PRICE, y, 10.0, false, format_eur(line.unit_price));
        cursor.text(COL_RATE, y, 10.0, false, format_rate(line.tax_rate));
        cursor.text(COL_TOTAL, y, 10.0, false, format_eur(line.line_total()));
        cursor.y -= ROW_STEP;
    }
}

fn totals_footer(cursor: &mut LayoutCursor, document: &Document, totals: &DocumentTotals) {
    let label_x = 135.0;
    let value_x = COL_TOTAL;

    let discount_shown = !totals.discount_amount.is_zero();
    let nonzero_buckets: Vec<_> = totals
        .tax_breakdown
        .iter()
        .filter(|bucket| !bucket.tax.is_zero())
        .collect();

    // The footer moves to a new page as a whole rather than splitting.
    let line_count = 2 + discount_shown as usize + nonzero_buckets.len() + 1;
    let height = line_count as f32 * ROW_STEP + 6.0;
    if !cursor.fits(height) {
        cursor.new_page();
    }

    cursor.y -= 2.0;
    cursor.rule(cursor.y + ROW_STEP - 2.0);

    cursor.text(label_x, cursor.y, 10.0, false, "Subtotaal");
    cursor.text(value_x, cursor.y, 10.0, false, format_eur(totals.subtotal));
    cursor.y -= ROW_STEP;

    if discount_shown {
        cursor.text(
            label_x,
            cursor.y,
            10.0,
            false,
            format!(
                "Korting ({})",
                format_rate(document.meta.discount_percentage)
            ),
        );
        cursor.text(
            value_x,
            cursor.y,
            10.0,
            false,
            format_eur(-totals.discount_amount),
        );
        cursor.y -= ROW_STEP;

        cursor.text(label_x, cursor.y, 10.0, false, "Subtotaal na korting");
        cursor.text(
            value_x,
            cursor.y,
            10.0,
            false,
            format_eur(totals.subtotal_after_discount),
        );
        cursor.y -= ROW_STEP;
    }

    for bucket in &nonzero_buckets {
        cursor.text(
            label_x,
            cursor.y,
            10.0,
            false,
            format!("BTW {}", format_rate(bucket.rate)),
        );
        cursor.text(value_x, cursor.y, 10.0, false, format_eur(bucket.tax));
        cursor.y -= ROW_STEP;
    }

    cursor.rule(cursor.y + ROW_STEP - 2.0);
    cursor.text(label_x, cursor.y, 12.0, true, "Totaal");
    cursor.text(value_x, cursor.y, 12.0, true, format_eur(totals.grand_total));
    cursor.y -= ROW_STEP + 2.0;
}

fn notes_footer(cursor: &mut LayoutCursor, document: &Document) {
    let mut lines: Vec<String> = Vec::new();

    let notes = document.meta.notes.trim();
    if !notes.is_empty() {
        lines.extend(notes.lines().map(|line| line.trim().to_string()));
    }

    if document.meta.kind == DocumentKind::Invoice {
        if let (Some(iban), Some(due_date)) = (&document.meta.issuer.iban, document.due_date()) {
            lines.push(format!(
                "Gelieve het totaalbedrag vóór {} over te maken op {}.",
                due_date.format("%d-%m-%Y"),
                iban
            ));
        }
    }

    if lines.is_empty() {
        return;
    }

    let height = lines.len() as f32 * DETAIL_STEP + ROW_STEP;
    if !cursor.fits(height) {
        cursor.new_page();
    }

    cursor.y -= ROW_STEP;
    for line in lines {
        cursor.text(MARGIN_LEFT, cursor.y, 9.0, false, line);
        cursor.y -= DETAIL_STEP;
    }
}

/// Filename for an exported PDF: kind slug, sanitized number, timestamp.
///
/// The timestamp keeps repeated exports of the same draft from
/// overwriting each other.
pub fn export_filename(document: &Document, timestamp: NaiveDateTime) -> String {
    let number = sanitize_for_filename(&document.meta.number);
    format!(
        "{}-{}-{}.pdf",
        document.meta.kind.slug(),
        number,
        timestamp.format("%Y%m%d-%H%M%S")
    )
}

fn sanitize_for_filename(raw: &str) -> String {
    let mut out = String::new();
    for c in raw.trim().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    let out = out.trim_matches('-').to_string();
    if out.is_empty() { "concept".to_string() } else { out }
}
