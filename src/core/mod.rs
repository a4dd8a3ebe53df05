//! Core document types, editing operations, totals, and validation.
//!
//! This module provides the foundational types for Dutch invoices and
//! quotes: the document model, the pure totals engine with per-rate BTW
//! bucketing, and the finalize-gate validation.

mod builder;
mod edit;
mod error;
pub mod money;
mod numbering;
pub mod rates;
mod totals;
mod types;
mod validation;

pub use builder::*;
pub use edit::*;
pub use error::*;
pub use numbering::*;
pub use rates::{is_permitted_rate, permitted_rates, REDUCED_RATE, STANDARD_RATE, ZERO_RATE};
pub use totals::*;
pub use types::*;
pub use validation::*;
