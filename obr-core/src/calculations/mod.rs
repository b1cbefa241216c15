//! Obligation request calculation modules.
//!
//! This module provides the line-item computation used when preparing an
//! obligation request: gross amount, discount, VAT extraction, and the
//! withholding deductions that produce the final obligable amount.

pub mod common;
pub mod line_item;

pub use line_item::ObligationCalculator;
