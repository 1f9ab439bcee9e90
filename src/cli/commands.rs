pub(crate) use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aba-to-wise",
    author,
    version,
    about = "Convert an ABA direct-entry file into a Wise batch payment CSV",
    long_about = None,
    after_help = "OUTPUT:\n    The CSV is written to wise_batch_<name>.csv in the current directory,\n    overwriting any existing file. Without FILE, the .aba files in the\n    current directory are listed for selection.\n\n    aba-to-wise payroll.aba"
)]
pub struct Args {
    /// Path to the input ABA file
    #[arg(
        index = 1,
        value_name = "FILE",
        help = "Input ABA file (must have the .aba extension)"
    )]
    pub input_file: Option<PathBuf>,

    /// Override the derived output path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also export the last detail record (normally the offsetting debit)
    #[arg(long)]
    pub include_last: bool,

    /// Reject records shorter than 120 characters
    #[arg(long)]
    pub strict: bool,
}
