use std::ops::Range;

use super::Decimal;
use crate::converter::error::Error;

/// Length of a standard ABA record, enforced only in strict mode.
pub const RECORD_LENGTH: usize = 120;

// Detail record field positions (0-indexed byte offsets, half-open).
const BSB: Range<usize> = 1..8;
const ACCOUNT_NUMBER: Range<usize> = 8..17;
const AMOUNT_CENTS: Range<usize> = 20..30;
const ACCOUNT_NAME: Range<usize> = 30..62;
const LODGEMENT_REFERENCE: Range<usize> = 62..80;

// Descriptive record field position.
const DESCRIPTION: Range<usize> = 62..80;

/// Record type discriminant found at offset 0 of every ABA line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// `'0'`: descriptive (header) record
    Descriptive,
    /// `'1'`: detail (transaction) record
    Detail,
    /// `'7'`: file total (footer) record
    FileTotal,
    Unknown(u8),
}

impl From<u8> for RecordType {
    fn from(discriminant: u8) -> Self {
        match discriminant {
            b'0' => RecordType::Descriptive,
            b'1' => RecordType::Detail,
            b'7' => RecordType::FileTotal,
            other => RecordType::Unknown(other),
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordType::Descriptive => write!(f, "descriptive"),
            RecordType::Detail => write!(f, "detail"),
            RecordType::FileTotal => write!(f, "file total"),
            RecordType::Unknown(b) => write!(f, "unknown ({:?})", char::from(*b)),
        }
    }
}

/// Raw ABA line as read from the input, newline already stripped.
/// This is the undecoded form that needs conversion to a `Transaction`.
/// Bytes are kept as read so that field offsets stay positional for any encoding.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawRecord<'a> {
    /// 1-based line number within the input
    pub line: usize,
    pub bytes: &'a [u8],
}

impl<'a> RawRecord<'a> {
    pub(crate) fn new<B: AsRef<[u8]> + ?Sized>(line: usize, bytes: &'a B) -> Self {
        Self {
            line,
            bytes: bytes.as_ref(),
        }
    }

    /// Returns `None` for an empty line.
    pub(crate) fn record_type(&self) -> Option<RecordType> {
        self.bytes.first().copied().map(RecordType::from)
    }

    /// Length in bytes
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_whitespace)
    }

    /// Description of a descriptive record, e.g. `Payroll31Jan020126`.
    pub(crate) fn description(&self) -> Option<String> {
        let description = self.field(DESCRIPTION);
        (!description.is_empty()).then_some(description)
    }

    /// Slice a field by byte offsets, then decode it lossily and trim it.
    /// Offsets past the end of the line yield a truncated or empty field.
    fn field(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.bytes.len());
        let start = range.start.min(end);
        String::from_utf8_lossy(&self.bytes[start..end]).trim().to_owned()
    }
}

/// A decoded ABA detail record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    name: String,
    payment_reference: String,
    amount: Decimal,
    bsb_code: String,
    account_number: String,
}

impl Transaction {
    /// Returns the account holder name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lodgement reference
    pub fn payment_reference(&self) -> &str {
        &self.payment_reference
    }

    /// Returns the amount in dollars (scale 2)
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn bsb_code(&self) -> &str {
        &self.bsb_code
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }
}

impl TryFrom<RawRecord<'_>> for Transaction {
    type Error = Error;

    /// Decode a detail record. The caller checks the record type.
    fn try_from(record: RawRecord<'_>) -> Result<Self, Self::Error> {
        let cents = record.field(AMOUNT_CENTS);
        let amount = cents
            .parse::<i64>()
            .map(|cents| Decimal::new(cents, 2))
            .map_err(|_| Error::MalformedRecord {
                line: record.line,
                value: cents.clone(),
            })?;

        Ok(Transaction {
            name: record.field(ACCOUNT_NAME),
            payment_reference: record.field(LODGEMENT_REFERENCE),
            amount,
            bsb_code: record.field(BSB),
            account_number: record.field(ACCOUNT_NUMBER),
        })
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[detail] bsb={} account={} amount={} name={:?} reference={:?}",
            self.bsb_code, self.account_number, self.amount, self.name, self.payment_reference
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn detail_line(cents: &str, name: &str) -> String {
        format!(
            "1123-456 12345678 53{cents:>10}{name:<32}{:<18}062-000123456789Example Company 00000000",
            "INV001"
        )
    }

    fn decode(text: &str) -> Result<Transaction, Error> {
        Transaction::try_from(RawRecord::new(1, text))
    }

    #[test]
    fn test_decodes_detail_fields() {
        let line = detail_line("0000123456", "JOHN SMITH");
        assert_eq!(line.len(), RECORD_LENGTH);

        let tx = decode(&line).unwrap();
        assert_eq!(tx.bsb_code(), "123-456");
        assert_eq!(tx.account_number(), "12345678");
        assert_eq!(tx.amount(), dec!(1234.56));
        assert_eq!(tx.name(), "JOHN SMITH");
        assert_eq!(tx.payment_reference(), "INV001");
    }

    #[test]
    fn test_zero_amount() {
        let tx = decode(&detail_line("0000000000", "ZERO")).unwrap();
        assert_eq!(tx.amount(), dec!(0.00));
        assert_eq!(format!("{:.2}", tx.amount()), "0.00");
    }

    #[test]
    fn test_negative_amount() {
        let tx = decode(&detail_line("-000000500", "REFUND")).unwrap();
        assert_eq!(tx.amount(), dec!(-5.00));
    }

    #[test]
    fn test_trims_padded_name() {
        let tx = decode(&detail_line("0000000100", "   PADDED NAME   ")).unwrap();
        assert_eq!(tx.name(), "PADDED NAME");
    }

    #[test]
    fn test_short_line_yields_empty_fields() {
        let tx = decode("1123-456 12345678 530000010000").unwrap();
        assert_eq!(tx.amount(), dec!(100));
        assert_eq!(tx.name(), "");
        assert_eq!(tx.payment_reference(), "");
    }

    #[test]
    fn test_truncated_name_field() {
        let tx = decode("1123-456 12345678 530000010000JOHN SM").unwrap();
        assert_eq!(tx.name(), "JOHN SM");
    }

    #[test]
    fn test_missing_amount_is_malformed() {
        let err = decode("1123-456 12345678").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 1, ref value } if value.is_empty()));
    }

    #[test]
    fn test_non_numeric_amount_is_malformed() {
        let err = decode(&detail_line("00000ABC00", "JOHN SMITH")).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { ref value, .. } if value == "00000ABC00"));
    }

    #[test]
    fn test_non_ascii_text_does_not_panic() {
        let tx = decode("1123-456 12345678 530000010000Zoë Müller").unwrap();
        assert_eq!(tx.name(), "Zoë Müller");
    }

    #[test]
    fn test_record_type_discriminant() {
        assert_eq!(
            RawRecord::new(1, "0 header").record_type(),
            Some(RecordType::Descriptive)
        );
        assert_eq!(RawRecord::new(1, "1").record_type(), Some(RecordType::Detail));
        assert_eq!(
            RawRecord::new(1, "7999-999").record_type(),
            Some(RecordType::FileTotal)
        );
        assert_eq!(
            RawRecord::new(1, "X").record_type(),
            Some(RecordType::Unknown(b'X'))
        );
        assert_eq!(RawRecord::new(1, "").record_type(), None);
    }

    #[test]
    fn test_latin1_byte_keeps_following_fields_in_place() {
        let mut line = b"1123-456 12345678 530000010000".to_vec();
        line.extend_from_slice(b"Ren\xE9 Dupont-Lefebvre Associes LT");
        line.extend_from_slice(format!("{:<18}", "INV001").as_bytes());
        assert_eq!(line.len(), 80);

        let tx = Transaction::try_from(RawRecord::new(1, &line)).unwrap();
        assert_eq!(tx.name(), "Ren\u{FFFD} Dupont-Lefebvre Associes LT");
        assert_eq!(tx.payment_reference(), "INV001");
        assert_eq!(tx.amount(), dec!(100));
    }

    #[test]
    fn test_invalid_byte_in_bsb_does_not_shift_amount() {
        let mut line = b"1123\xFF456 12345678 530000025050".to_vec();
        line.extend_from_slice(b"JANE DOE");

        let tx = Transaction::try_from(RawRecord::new(1, &line)).unwrap();
        assert_eq!(tx.bsb_code(), "123\u{FFFD}456");
        assert_eq!(tx.account_number(), "12345678");
        assert_eq!(tx.amount(), dec!(250.50));
        assert_eq!(tx.name(), "JANE DOE");
    }

    #[test]
    fn test_header_description() {
        let header = format!(
            "{:<62}{:<58}",
            "0                 01NAB       Example Company Pty Ltd   000000", "Payroll31Jan020126"
        );
        assert_eq!(
            RawRecord::new(1, &header).description().as_deref(),
            Some("Payroll31Jan020126")
        );
        assert_eq!(RawRecord::new(1, "0 short").description(), None);
    }
}
