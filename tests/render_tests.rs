use chrono::NaiveDate;
use factuur::core::*;
use factuur::render::layout::{export_filename, layout_document, DocumentLayout, LayoutElement};
use factuur::render::preview::render_text;
use insta::assert_snapshot;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_invoice() -> Document {
    DocumentBuilder::new(DocumentKind::Invoice, date(2025, 3, 1))
        .number("F-2025-0001")
        .due(DueTerm::DaysAfterIssue(14))
        .issuer(
            IssuerBuilder::new("Jansen Webdesign")
                .address(Address::new("Keizersgracht 12", "1015 CS", "Amsterdam"))
                .iban("NL02ABNA0123456789")
                .build(),
        )
        .recipient(Recipient::new(
            "Bakkerij de Boer",
            Address::new("Dorpsstraat 8", "1411 AB", "Naarden"),
        ))
        .line("Advieswerk maart", dec!(8), dec!(85), dec!(21))
        .build()
        .unwrap()
}

fn layout_of(document: &Document) -> DocumentLayout {
    let totals = calculate_totals(document);
    layout_document(document, &totals)
}

fn page_texts(layout: &DocumentLayout, page: usize) -> Vec<String> {
    layout.pages[page]
        .elements
        .iter()
        .filter_map(|e| match e {
            LayoutElement::Text { content, .. } => Some(content.clone()),
            _ => None,
        })
        .collect()
}

// --- Layout and preview agree ---

#[test]
fn preview_shows_exactly_what_the_layout_contains() {
    let invoice = sample_invoice();
    let layout = layout_of(&invoice);
    let preview = render_text(&layout);

    for content in page_texts(&layout, 0) {
        assert!(
            preview.contains(&content),
            "layout text {content:?} missing from preview"
        );
    }
}

#[test]
fn fresh_draft_preview_matches_the_reference() {
    let draft = Document::with_issue_date(DocumentKind::Invoice, date(2025, 3, 1));
    let preview = render_text(&layout_of(&draft));

    let pad = |n: usize| " ".repeat(n);
    let rule = "-".repeat(72);
    let expected = [
        format!("Uw bedrijf{}FACTUUR", pad(40)),
        rule.clone(),
        format!("Aan:{}Nummer:{}concept", pad(38), pad(5)),
        format!("Klantnaam{}Datum:{}01-03-2025", pad(33), pad(6)),
        format!(
            "Omschrijving{}Aantal{}Prijs{}BTW{}Bedrag",
            pad(28),
            pad(2),
            pad(4),
            pad(2)
        ),
        rule.clone(),
        format!("{}1{}€ 0,00{}21%{}€ 0,00", pad(40), pad(7), pad(3), pad(2)),
        rule.clone(),
        format!("{}Subtotaal{}€ 0,00", pad(48), pad(5)),
        rule.clone(),
        format!("{}Totaal{}€ 0,00", pad(48), pad(8)),
    ]
    .join("\n");

    assert_eq!(preview, format!("{expected}\n"));
}

#[test]
fn preview_rows_keep_label_and_amount_together() {
    let preview = render_text(&layout_of(&sample_invoice()));

    let subtotal_row = preview
        .lines()
        .find(|line| line.contains("Subtotaal"))
        .unwrap();
    assert!(subtotal_row.contains("€ 680,00"));

    let tax_row = preview.lines().find(|line| line.contains("BTW 21%")).unwrap();
    assert!(tax_row.contains("€ 142,80"));

    let total_row = preview.lines().find(|line| line.contains("Totaal")).unwrap();
    assert!(total_row.contains("€ 822,80"));
}

#[test]
fn amounts_share_one_column_across_footer_rows() {
    let preview = render_text(&layout_of(&sample_invoice()));
    let euro_column = |needle: &str| {
        let row = preview.lines().find(|line| line.contains(needle)).unwrap();
        row.char_indices()
            .find(|(_, c)| *c == '€')
            .map(|(i, _)| row[..i].chars().count())
            .unwrap()
    };
    assert_eq!(euro_column("Subtotaal"), euro_column("BTW 21%"));
}

#[test]
fn payment_instruction_appears_on_invoices_with_iban_and_due_date() {
    let invoice = sample_invoice();
    let texts = page_texts(&layout_of(&invoice), 0);
    let instruction = texts
        .iter()
        .find(|t| t.starts_with("Gelieve"))
        .expect("payment instruction missing");
    assert_snapshot!(
        instruction,
        @"Gelieve het totaalbedrag vóór 15-03-2025 over te maken op NL02ABNA0123456789."
    );
}

#[test]
fn quotes_never_carry_a_payment_instruction() {
    let quote = DocumentBuilder::new(DocumentKind::Quote, date(2025, 3, 1))
        .number("OFF-2025-001")
        .due(DueTerm::DaysAfterIssue(30))
        .issuer(IssuerBuilder::new("Jansen Webdesign").iban("NL02ABNA0123456789").build())
        .line("Herontwerp", dec!(1), dec!(500), dec!(21))
        .build_unchecked();
    let texts = page_texts(&layout_of(&quote), 0);
    assert!(!texts.iter().any(|t| t.starts_with("Gelieve")));
    assert!(texts.contains(&"Geldig tot:".to_string()));
}

#[test]
fn notes_flow_into_the_footer_line_by_line() {
    let mut invoice = sample_invoice();
    invoice.meta.notes = "Betaling in overleg.\nTweede regel.".into();
    let texts = page_texts(&layout_of(&invoice), 0);
    assert!(texts.contains(&"Betaling in overleg.".to_string()));
    assert!(texts.contains(&"Tweede regel.".to_string()));
}

#[test]
fn documents_without_lines_still_render_a_complete_footer() {
    let document = Document::with_issue_date(DocumentKind::Invoice, date(2025, 3, 1));
    let id = document.lines[0].id.clone();
    let document = document.remove_line_item(&id);
    assert!(document.lines.is_empty());

    let layout = layout_of(&document);
    assert_eq!(layout.pages.len(), 1);
    let texts = page_texts(&layout, 0);
    assert!(texts.contains(&"Subtotaal".to_string()));
    assert!(texts.contains(&"Totaal".to_string()));

    let preview = render_text(&layout);
    let total_row = preview.lines().find(|line| line.contains("Totaal")).unwrap();
    assert!(total_row.contains("€ 0,00"));
}

// --- Pagination ---

#[test]
fn totals_footer_is_never_split_across_pages() {
    // Counts chosen to land the footer right at a page boundary.
    for line_count in [24, 25, 26, 27, 67, 68] {
        let mut builder =
            DocumentBuilder::new(DocumentKind::Invoice, date(2025, 3, 1)).number("F-2025-0005");
        for i in 0..line_count {
            builder = builder.line(format!("Regel {i}"), dec!(1), dec!(10), dec!(21));
        }
        let document = builder.build_unchecked();
        let layout = layout_of(&document);

        let footer_page = layout
            .pages
            .iter()
            .position(|page| {
                page.elements.iter().any(|e| {
                    matches!(e, LayoutElement::Text { content, .. } if content == "Subtotaal")
                })
            })
            .expect("footer missing");
        let total_page = layout
            .pages
            .iter()
            .position(|page| {
                page.elements
                    .iter()
                    .any(|e| matches!(e, LayoutElement::Text { content, .. } if content == "Totaal"))
            })
            .expect("grand total missing");
        assert_eq!(footer_page, total_page, "footer split at {line_count} lines");
    }
}

#[test]
fn page_separators_number_from_two() {
    let mut builder =
        DocumentBuilder::new(DocumentKind::Invoice, date(2025, 3, 1)).number("F-2025-0006");
    for i in 0..80 {
        builder = builder.line(format!("Regel {i}"), dec!(1), dec!(10), dec!(21));
    }
    let document = builder.build_unchecked();
    let preview = render_text(&layout_of(&document));
    assert!(!preview.contains("=== Pagina 1 ==="));
    assert!(preview.contains("=== Pagina 2 ==="));
}

// --- Logo slot ---

#[test]
fn logo_reserves_a_slot_on_the_first_page_only() {
    let mut invoice = sample_invoice();
    invoice.meta.issuer.logo = Some(vec![0xFF, 0xD8, 0xFF]);
    let layout = layout_of(&invoice);
    let slots = layout.pages[0]
        .elements
        .iter()
        .filter(|e| matches!(e, LayoutElement::LogoSlot { .. }))
        .count();
    assert_eq!(slots, 1);
    assert_eq!(layout.logo.as_deref(), Some(&[0xFF, 0xD8, 0xFF][..]));
}

// --- Export filenames ---

#[test]
fn export_filenames_combine_slug_number_and_timestamp() {
    let invoice = sample_invoice();
    let ts = date(2025, 3, 1).and_hms_opt(14, 30, 5).unwrap();
    assert_snapshot!(
        export_filename(&invoice, ts),
        @"factuur-F-2025-0001-20250301-143005.pdf"
    );
}

#[test]
fn export_filenames_survive_hostile_numbers() {
    let mut invoice = sample_invoice();
    invoice.meta.number = "  F/2025 ..0001!  ".into();
    let ts = date(2025, 3, 1).and_hms_opt(9, 0, 0).unwrap();
    assert_snapshot!(
        export_filename(&invoice, ts),
        @"factuur-F-2025-0001-20250301-090000.pdf"
    );
}

// --- PDF target ---

#[cfg(feature = "pdf")]
mod pdf {
    use super::*;
    use factuur::render::pdf::render_pdf;

    #[test]
    fn renders_a_pdf_document() {
        let invoice = sample_invoice();
        let layout = layout_of(&invoice);
        let bytes = render_pdf(&layout, invoice.meta.kind.title()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn renders_every_page_of_a_long_document() {
        let mut builder =
            DocumentBuilder::new(DocumentKind::Invoice, date(2025, 3, 1)).number("F-2025-0007");
        for i in 0..80 {
            builder = builder.line(format!("Regel {i}"), dec!(1), dec!(10), dec!(21));
        }
        let document = builder.build_unchecked();
        let layout = layout_of(&document);
        assert!(layout.pages.len() > 1);
        let bytes = render_pdf(&layout, "FACTUUR").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn malformed_logo_bytes_are_skipped_not_fatal() {
        let mut invoice = sample_invoice();
        invoice.meta.issuer.logo = Some(vec![0x00, 0x01, 0x02]);
        let layout = layout_of(&invoice);
        assert!(render_pdf(&layout, "FACTUUR").is_ok());
    }
}
