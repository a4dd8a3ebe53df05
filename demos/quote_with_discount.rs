use chrono::NaiveDate;
use factuur::core::money::format_eur;
use factuur::core::*;
use factuur::editor::Editor;

use rust_decimal_macros::dec;

fn main() {
    // Build a quote interactively, the way an editing surface would.
    let mut editor = Editor::new(DocumentKind::Quote);
    editor.set_number("OFF-2025-001");
    editor.set_due_term(Some(DueTerm::DaysAfterIssue(30)));
    editor.set_issuer(IssuerBuilder::new("Jansen Webdesign").build());
    editor.set_recipient(Recipient::new("Gemeente Hilversum", Address::default()));

    let first = editor.document().lines[0].id.clone();
    editor
        .update_line_item(&first, LineItemEdit::Description("Herontwerp website".into()))
        .unwrap();
    editor
        .update_line_item(&first, LineItemEdit::Quantity(dec!(40)))
        .unwrap();
    editor
        .update_line_item(&first, LineItemEdit::UnitPrice(dec!(98)))
        .unwrap();

    editor.add_line_item();
    let second = editor.document().lines[1].id.clone();
    editor
        .update_line_item(&second, LineItemEdit::Description("Fotografie".into()))
        .unwrap();
    editor
        .update_line_item(&second, LineItemEdit::UnitPrice(dec!(450)))
        .unwrap();

    // A 10% project discount, spread proportionally over every line.
    editor.set_discount_percentage(dec!(10));

    let totals = editor.totals();
    println!("Offerte {}", editor.document().meta.number);
    println!("Subtotaal:          {}", format_eur(totals.subtotal));
    println!("Korting (10%):      {}", format_eur(totals.discount_amount));
    println!("Na korting:         {}", format_eur(totals.subtotal_after_discount));
    println!("BTW:                {}", format_eur(totals.tax_total));
    println!("Totaal:             {}", format_eur(totals.grand_total));
    println!();
    println!("{}", editor.preview());
}
