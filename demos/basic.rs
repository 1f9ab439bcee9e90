//! Basic example of using the `BatchConverter`.
//!
//! Run with: `cargo run --example basic`

use aba_to_wise::BatchConverter;
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Sample ABA batch: header, two payments, the offsetting debit and the file total
    let batch = [
        "0                 01NAB       Example Company Pty Ltd   000000Payroll31Jan020126",
        "1123-456 11111111 530000028600John Smith                      Bank A",
        "1234-567 22222222 530000134000Jane Doe                        Bank B",
        "1012-345678901234 130000162600Example Company Pty Ltd         SALARIES AND WAGES",
        "7999-999            000000000000001626000000162600                        000003",
    ]
    .join("\n");

    // Create converter and decode the batch
    let mut converter = BatchConverter::new();
    converter
        .decode_records(Cursor::new(batch))
        .expect("Failed to decode ABA batch");

    // Export the Wise batch to stdout
    println!("\n=== Wise Batch ===");
    converter
        .export_batch(std::io::stdout())
        .expect("Failed to export Wise batch");
}
