//! Editing session: one current document, pure transitions, observers.
//!
//! The editor owns the draft and applies the pure operations from
//! [`crate::core`]. After every state transition it notifies attached
//! observers; persistence hangs off that seam so saving is an effect of
//! editing, never interleaved with calculation.

use crate::core::{
    calculate_totals, Document, DocumentKind, DocumentTotals, DueTerm, FactuurError, Issuer,
    LineItemEdit, Recipient,
};
use crate::render::layout::layout_document;
use crate::render::preview::render_text;

/// Observer notified after every editor state transition.
///
/// Implementations must not fail the edit: whatever they do with the
/// new state stays on their side of the seam.
pub trait DraftObserver {
    /// The draft changed; `document` is the complete new state.
    fn draft_changed(&self, document: &Document);

    /// The draft was discarded and the editor reset to defaults.
    fn draft_discarded(&self);
}

/// Result of a successful export: the bytes and the filename to give them.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Single-document editing session.
pub struct Editor {
    document: Document,
    observers: Vec<Box<dyn DraftObserver>>,
}

impl Editor {
    /// Fresh session with a default document of the given kind.
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            document: Document::new(kind),
            observers: Vec::new(),
        }
    }

    /// Resume a session from a previously saved draft.
    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            observers: Vec::new(),
        }
    }

    /// Attach an observer. It is not called for the current state.
    pub fn attach(&mut self, observer: Box<dyn DraftObserver>) {
        self.observers.push(observer);
    }

    /// Current draft state.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Recompute totals for the current draft. Idempotent; calling this
    /// twice in a row yields identical results.
    pub fn totals(&self) -> DocumentTotals {
        calculate_totals(&self.document)
    }

    pub fn add_line_item(&mut self) {
        self.apply(|document| document.add_line_item());
    }

    pub fn update_line_item(&mut self, id: &str, edit: LineItemEdit) -> Result<(), FactuurError> {
        let next = self.document.clone().update_line_item(id, edit)?;
        self.replace(next);
        Ok(())
    }

    pub fn remove_line_item(&mut self, id: &str) {
        let id = id.to_string();
        self.apply(move |document| document.remove_line_item(&id));
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        let number = number.into();
        self.apply(move |document| document.set_number(number));
    }

    pub fn set_discount_percentage(&mut self, percentage: rust_decimal::Decimal) {
        self.apply(move |document| document.set_discount_percentage(percentage));
    }

    pub fn set_due_term(&mut self, due: Option<DueTerm>) {
        self.apply(move |document| document.set_due_term(due));
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        let notes = notes.into();
        self.apply(move |document| document.set_notes(notes));
    }

    pub fn set_issuer(&mut self, issuer: Issuer) {
        self.apply(move |document| document.set_issuer(issuer));
    }

    pub fn set_recipient(&mut self, recipient: Recipient) {
        self.apply(move |document| document.set_recipient(recipient));
    }

    /// Discard the draft: reset to a fresh document of the same kind and
    /// tell observers the old draft is gone.
    pub fn reset(&mut self) {
        self.document = Document::new(self.document.meta.kind);
        for observer in &self.observers {
            observer.draft_discarded();
        }
    }

    /// Plain-text preview of the current draft.
    pub fn preview(&self) -> String {
        let totals = self.totals();
        render_text(&layout_document(&self.document, &totals))
    }

    /// Export the current draft as a PDF.
    ///
    /// The editor state is untouched whether the export succeeds or
    /// fails; a failed export can simply be retried.
    #[cfg(feature = "pdf")]
    pub fn export_pdf(&self) -> Result<ExportArtifact, FactuurError> {
        let totals = self.totals();
        let layout = layout_document(&self.document, &totals);
        let bytes = crate::render::pdf::render_pdf(&layout, self.document.meta.kind.title())?;
        let filename = crate::render::layout::export_filename(
            &self.document,
            chrono::Local::now().naive_local(),
        );
        Ok(ExportArtifact { filename, bytes })
    }

    fn apply(&mut self, transition: impl FnOnce(Document) -> Document) {
        let next = transition(self.document.clone());
        self.replace(next);
    }

    fn replace(&mut self, next: Document) {
        self.document = next;
        for observer in &self.observers {
            observer.draft_changed(&self.document);
        }
    }
}
