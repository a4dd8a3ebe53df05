use chrono::NaiveDate;
use factuur::core::*;
use factuur::render::layout::{export_filename, layout_document};
use factuur::render::pdf::render_pdf;
use rust_decimal_macros::dec;

fn main() {
    let invoice = DocumentBuilder::new(
        DocumentKind::Invoice,
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
    )
    .number("F-2025-0001")
    .due(DueTerm::Date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()))
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
    .expect("invoice should be valid");

    let totals = calculate_totals(&invoice);
    let layout = layout_document(&invoice, &totals);
    let bytes = render_pdf(&layout, invoice.meta.kind.title()).expect("render should succeed");

    let filename = export_filename(
        &invoice,
        invoice.meta.issue_date.and_hms_opt(12, 0, 0).unwrap(),
    );
    std::fs::write(&filename, &bytes).expect("write should succeed");
    println!("Wrote {} ({} bytes)", filename, bytes.len());
}
