//! # factuur
//!
//! Dutch invoice and quote engine: line items, document-level discounts,
//! per-rate BTW breakdown, deterministic A4 layout with PDF export, and
//! draft persistence.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating
//! point. Totals are derived state: the engine recomputes them on
//! demand at full precision and rounds only at the display boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use factuur::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = DocumentBuilder::new(DocumentKind::Invoice, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
//!     .number("F-2025-0001")
//!     .due(DueTerm::DaysAfterIssue(14))
//!     .issuer(IssuerBuilder::new("Jansen Webdesign")
//!         .iban("NL02ABNA0123456789").build())
//!     .recipient(Recipient::new("Bakkerij de Boer", Address::default()))
//!     .line("Advieswerk maart", dec!(8), dec!(85), dec!(21))
//!     .build()
//!     .unwrap();
//!
//! let totals = calculate_totals(&invoice);
//! assert_eq!(totals.subtotal, dec!(680));
//! assert_eq!(totals.grand_total, dec!(822.80));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document model, totals engine, validation, numbering, layout, text preview |
//! | `pdf` | PDF export via printpdf |
//! | `store` | JSON draft persistence |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod editor;

#[cfg(feature = "core")]
pub mod render;

#[cfg(feature = "store")]
pub mod store;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
