use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Preferred file when the user accepts the default.
pub const DEFAULT_FILE: &str = "current.aba";
const ABA_SUFFIX: &str = ".aba";
const OUTPUT_PREFIX: &str = "wise_batch_";

/// Errors while resolving the input file. No output is written for any of these.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("'{}' is not an ABA file", .0.display())]
    NotAbaFile(PathBuf),
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("No .aba files found in '{}'", .0.display())]
    NoAbaFiles(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of reading the user's selection. Every variant carries the chosen index.
#[derive(Debug, PartialEq, Eq)]
pub enum Choice {
    Selected(usize),
    /// Blank answer
    Default(usize),
    /// A number outside `1..=files.len()`
    OutOfRange(usize),
    /// Not a number at all
    NotANumber(usize),
}

impl Choice {
    pub fn index(&self) -> usize {
        match self {
            Choice::Selected(i)
            | Choice::Default(i)
            | Choice::OutOfRange(i)
            | Choice::NotANumber(i) => *i,
        }
    }
}

/// Check that an input given on the command line is an existing `.aba` file.
pub fn validate_input(path: &Path) -> Result<(), InputError> {
    if !has_aba_suffix(path) {
        return Err(InputError::NotAbaFile(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Any file name ending in `.aba`, including a bare `.aba`.
fn has_aba_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(ABA_SUFFIX))
}

/// List the `.aba` files in `dir`, sorted by name.
pub fn list_aba_files(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_aba_suffix(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!("Found {} ABA files in {}", files.len(), dir.display());
    Ok(files)
}

/// `current.aba` if listed, otherwise the first file.
fn default_index(files: &[PathBuf]) -> usize {
    files
        .iter()
        .position(|f| is_default_file(f))
        .unwrap_or(0)
}

fn is_default_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == DEFAULT_FILE)
}

/// Interpret a 1-based selection. Invalid answers fall back to the default.
pub fn choose(files: &[PathBuf], answer: &str) -> Choice {
    let answer = answer.trim();
    let default = default_index(files);
    if answer.is_empty() {
        return Choice::Default(default);
    }
    match answer.parse::<i64>().map(usize::try_from) {
        Ok(Ok(n)) if (1..=files.len()).contains(&n) => Choice::Selected(n - 1),
        Ok(_) => Choice::OutOfRange(default),
        Err(_) => Choice::NotANumber(default),
    }
}

/// List the `.aba` files in `dir` on `out` and read the user's choice from `input`.
pub fn prompt_for_file<R: BufRead, W: Write>(
    dir: &Path,
    mut input: R,
    mut out: W,
) -> Result<PathBuf, InputError> {
    let files = list_aba_files(dir)?;
    if files.is_empty() {
        return Err(InputError::NoAbaFiles(dir.to_path_buf()));
    }

    writeln!(out, "\nAvailable ABA files:")?;
    for (i, file) in files.iter().enumerate() {
        let marker = if is_default_file(file) { " (default)" } else { "" };
        writeln!(out, "  {}. {}{marker}", i + 1, display_name(file))?;
    }
    let default = &files[default_index(&files)];
    writeln!(
        out,
        "\nEnter the number of the file to process, or press Enter for default ({}):",
        display_name(default)
    )?;
    write!(out, "> ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let choice = choose(&files, &answer);
    let selected = &files[choice.index()];
    match choice {
        Choice::OutOfRange(_) => {
            writeln!(out, "Invalid choice. Using default: {}", display_name(selected))?;
        }
        Choice::NotANumber(_) => {
            writeln!(out, "Invalid input. Using default: {}", display_name(selected))?;
        }
        Choice::Selected(_) | Choice::Default(_) => {}
    }
    log::debug!("Selected {choice:?} -> {}", selected.display());
    Ok(selected.clone())
}

/// `wise_batch_<stem>.csv` in the working directory.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    PathBuf::from(format!("{OUTPUT_PREFIX}{stem}.csv"))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
