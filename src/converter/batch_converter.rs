use std::io::{BufRead, BufReader, Read, Write};

use super::error::Error;
use super::record::{RawRecord, RecordType, Transaction, RECORD_LENGTH};
use super::wise_row::{WiseRow, HEADERS};

/// What to do with the last decoded transaction when exporting.
///
/// ABA batches usually end with an offsetting debit that draws the batch total from
/// the remitter's own account. That record is not a payment and is dropped by default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TrailingRecord {
    #[default]
    Drop,
    Keep,
}

/// Converts ABA direct-entry files into Wise batch payment CSV.
///
/// Decodes detail records in file order and exports them as Wise rows.
#[derive(Debug, Default)]
pub struct BatchConverter {
    /// Decoded detail records in file order
    transactions: Vec<Transaction>,
    /// Description of the first descriptive record seen
    description: Option<String>,
    trailing_record: TrailingRecord,
    strict: bool,
}

impl BatchConverter {
    /// Create a new `BatchConverter` that drops the trailing record and tolerates short lines
    pub fn new() -> Self {
        log::trace!("BatchConverter initialized");
        Self::default()
    }

    /// Set the trailing record policy used by `export_batch`
    #[must_use]
    pub fn with_trailing_record(mut self, trailing_record: TrailingRecord) -> Self {
        self.trailing_record = trailing_record;
        self
    }

    /// Reject non-blank lines shorter than a standard 120 byte ABA record
    #[must_use]
    pub fn with_strict_line_length(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Primary API: Decode ABA records from any source (File, `Cursor`, etc.)
    ///
    /// Only detail records produce transactions. Descriptive, file total and unknown
    /// records are skipped. Stops at the first detail record whose amount is not an integer.
    pub fn decode_records<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        log::info!("Starting ABA decoding");

        let reader = BufReader::new(reader);
        let mut skipped = 0u64;
        let decoded_before = self.transactions.len();

        for (index, line) in reader.split(b'\n').enumerate() {
            let mut bytes = line?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let record = RawRecord::new(index + 1, &bytes);

            if record.is_blank() {
                log::trace!("[line {}] Skipped: blank", record.line);
                continue;
            }

            if self.strict && record.len() < RECORD_LENGTH {
                return Err(Error::InvalidLineLength {
                    line: record.line,
                    length: record.len(),
                    expected: RECORD_LENGTH,
                });
            }

            match record.record_type() {
                Some(RecordType::Detail) => {
                    let transaction = Transaction::try_from(record)?;
                    log::trace!("[line {}] Decoded: {transaction}", record.line);
                    self.transactions.push(transaction);
                }
                Some(RecordType::Descriptive) => {
                    if self.description.is_none() {
                        self.description = record.description();
                        log::debug!(
                            "[line {}] Batch description: {:?}",
                            record.line,
                            self.description
                        );
                    }
                    skipped += 1;
                }
                Some(other) => {
                    log::trace!("[line {}] Skipped: {other} record", record.line);
                    skipped += 1;
                }
                None => {}
            }
        }

        log::info!(
            "Decoding complete: {} transactions, {} other records skipped",
            self.transactions.len() - decoded_before,
            skipped
        );
        Ok(())
    }

    /// Secondary API: Write the Wise batch to any sink (Stdout, File, etc.)
    ///
    /// The header row is always written, even when no rows follow.
    /// Note that the CSV writer is buffered automatically, so you should not wrap wtr in a buffered writer like `io::BufWriter`.
    pub fn export_batch<W: Write>(&self, writer: W) -> Result<(), Error> {
        log::info!("Exporting {} rows", self.row_count());

        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(HEADERS)?;
        for transaction in self.exported() {
            csv_writer.serialize(WiseRow::from(transaction))?;
        }
        csv_writer.flush()?;

        log::trace!("Export complete");
        Ok(())
    }

    /// Returns the decoded transactions in file order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the number of decoded transactions
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Returns the number of rows `export_batch` will write, excluding the header
    pub fn row_count(&self) -> usize {
        self.exported().len()
    }

    /// Returns the description of the first descriptive record, if any
    pub fn batch_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn exported(&self) -> &[Transaction] {
        match self.trailing_record {
            TrailingRecord::Keep => &self.transactions,
            TrailingRecord::Drop => {
                let end = self.transactions.len().saturating_sub(1);
                &self.transactions[..end]
            }
        }
    }
}
