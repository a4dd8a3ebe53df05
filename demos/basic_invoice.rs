use chrono::NaiveDate;
use factuur::core::money::format_eur;
use factuur::core::*;
use rust_decimal_macros::dec;

fn main() {
    // Create a standard Dutch invoice
    let invoice = DocumentBuilder::new(
        DocumentKind::Invoice,
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
    )
    .number("F-2025-0001")
    .due(DueTerm::DaysAfterIssue(14))
    .issuer(
        IssuerBuilder::new("Jansen Webdesign")
            .address(Address::new("Keizersgracht 12", "1015 CS", "Amsterdam"))
            .kvk_number("12345678")
            .iban("NL02ABNA0123456789")
            .build(),
    )
    .recipient(Recipient::new(
        "Bakkerij de Boer",
        Address::new("Dorpsstraat 8", "1411 AB", "Naarden"),
    ))
    .line("Webdesign", dec!(24), dec!(95), dec!(21))
    .line("Hosting (maandelijks)", dec!(1), dec!(12.50), dec!(21))
    .build()
    .expect("invoice should be valid");

    let totals = calculate_totals(&invoice);
    println!("Factuur: {}", invoice.meta.number);
    println!("Datum:   {}", invoice.meta.issue_date);
    println!("Van:     {}", invoice.meta.issuer.name);
    println!("Aan:     {}", invoice.meta.recipient.name);
    println!("---");
    for line in &invoice.lines {
        println!(
            "  {} x {} @ {} = {}",
            line.quantity,
            line.description,
            format_eur(line.unit_price),
            format_eur(line.line_total())
        );
    }
    println!("---");
    println!("Subtotaal: {}", format_eur(totals.subtotal));
    for bucket in &totals.tax_breakdown {
        println!(
            "BTW {}%:   {}",
            bucket.rate,
            format_eur(bucket.tax)
        );
    }
    println!("Totaal:    {}", format_eur(totals.grand_total));
}
