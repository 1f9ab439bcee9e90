//! Batch converter module.
//!
//! This module contains the ABA to Wise conversion logic including:
//! - `BatchConverter` - Decodes ABA records and exports Wise rows
//! - `Transaction` - A decoded ABA detail record
//! - `WiseRow` - One row of the Wise batch payment CSV
//! - `Error` types - Decoding and export errors

mod batch_converter;
mod error;
mod record;
mod wise_row;

pub(crate) use rust_decimal::Decimal;

pub use batch_converter::{BatchConverter, TrailingRecord};
pub use error::Error;
pub use record::Transaction;
