use factuur::core::*;
use factuur::editor::Editor;
use factuur::store::DraftStore;
use rust_decimal_macros::dec;

fn main() {
    let dir = std::env::temp_dir().join("factuur-draft-demo");
    let store = DraftStore::new(&dir);

    // Resume the previous session's draft, or start fresh.
    let mut editor = match store.load() {
        Some(document) => {
            println!("Resuming draft with {} lines", document.lines.len());
            Editor::with_document(document)
        }
        None => {
            println!("Starting a fresh draft");
            Editor::new(DocumentKind::Invoice)
        }
    };

    // From here on every edit is mirrored to disk.
    editor.attach(Box::new(DraftStore::new(&dir)));

    let id = editor.document().lines[0].id.clone();
    editor
        .update_line_item(&id, LineItemEdit::Description("Advieswerk".into()))
        .unwrap();
    editor
        .update_line_item(&id, LineItemEdit::UnitPrice(dec!(85)))
        .unwrap();
    editor
        .update_line_item(&id, LineItemEdit::Quantity(dec!(8)))
        .unwrap();

    let totals = editor.totals();
    println!("Draft total: {}", totals.grand_total);
    println!("Draft saved in {}", dir.display());
}
