//! Document rendering: positioned layout plus presentation targets.
//!
//! [`layout::layout_document`] produces a paginated, millimeter-positioned
//! description of a document. Both presentation targets consume that same
//! layout, so the preview and the PDF can never disagree on totals.

pub mod layout;
pub mod preview;

#[cfg(feature = "pdf")]
pub mod pdf;
