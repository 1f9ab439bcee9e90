/// Top-level error type for the batch converter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The amount field of a detail record is not an integer number of cents.
    #[error("Malformed record on line {line}: invalid amount {value:?}")]
    MalformedRecord { line: usize, value: String },

    /// Only raised in strict mode.
    #[error("Invalid line length on line {line}: {length}, expected {expected}")]
    InvalidLineLength {
        line: usize,
        length: usize,
        expected: usize,
    },
}
