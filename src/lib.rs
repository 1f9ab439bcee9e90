//! Convert ABA direct-entry batch files into Wise batch payment CSV files.
//!
//! The [`BatchConverter`] decodes the detail records of a fixed-width ABA file and
//! exports them as rows of a Wise bulk payment upload.

mod converter;

pub use converter::{BatchConverter, Error, TrailingRecord, Transaction};
