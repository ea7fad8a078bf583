// ============================================================
// Layer 4 — Spreadsheet Loader
// ============================================================
// Loads the experiment selection sheet using the calamine crate.
//
// How .xlsx files work:
//   An .xlsx file is actually a ZIP archive containing XML files.
//   calamine parses this ZIP and gives us a typed Rust API over
//   the cell grid: a Range<Data>, where Data is an enum over the
//   cell types Excel knows about (String, Float, Int, Bool, ...).
//
// Excel stores most numbers as floats — a `subject_gender` of 1
// usually comes back as Data::Float(1.0) — so the gender column
// is parsed tolerantly: ints, whole floats, and numeric strings
// all count, anything else leaves the row without a gender code.
//
// The first worksheet is the table; its first row is the header.
// The whole sheet is read into memory — the experiment has a few
// hundred rows, streaming would be pointless complexity.
//
// Reference: calamine crate documentation
//            Rust Book §8 (Collections)
//            Rust Book §9 (Error Handling)

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

use crate::domain::trial::{Trial, TrialTable};
use crate::domain::traits::TrialSource;

/// Column holding the model-generated sentence
const OUTPUT_COLUMN: &str = "cleaned_output";

/// Column holding the binary gender code of the antecedent subject
const GENDER_COLUMN: &str = "subject_gender";

/// Loads the trial table from an .xlsx workbook.
/// Implements the TrialSource trait from Layer 3.
pub struct XlsxLoader {
    /// Path to the workbook
    path: String,
}

impl XlsxLoader {
    /// Create a new XlsxLoader pointed at a workbook file
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl TrialSource for XlsxLoader {
    fn load_all(&self) -> Result<TrialTable> {
        let path = Path::new(&self.path);

        let mut workbook: Xlsx<_> = open_workbook(path)
            .with_context(|| format!("Cannot open workbook '{}'", self.path))?;

        // The trial table lives on the first worksheet
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| anyhow!("Workbook '{}' has no worksheets", self.path))?
            .with_context(|| format!("Cannot read first worksheet of '{}'", self.path))?;

        let mut rows = range.rows();

        // Row 0 is the header row — it names the columns we need
        let headers: Vec<String> = rows
            .next()
            .ok_or_else(|| anyhow!("Worksheet in '{}' is empty", self.path))?
            .iter()
            .map(cell_text)
            .collect();

        let output_col = column_index(&headers, OUTPUT_COLUMN)
            .with_context(|| format!("In workbook '{}'", self.path))?;
        let gender_col = column_index(&headers, GENDER_COLUMN)
            .with_context(|| format!("In workbook '{}'", self.path))?;

        let mut trials = Vec::new();

        for row in rows {
            let cells: Vec<String> = row.iter().map(cell_text).collect();

            let cleaned_output = cells.get(output_col).cloned().unwrap_or_default();
            let subject_gender = row.get(gender_col).and_then(cell_gender);

            trials.push(Trial::new(cells, cleaned_output, subject_gender));
        }

        tracing::info!("Loaded {} trials from '{}'", trials.len(), self.path);
        Ok(TrialTable::new(headers, trials))
    }
}

/// Find a column by header name.
/// Errors list the available headers so a renamed column in the
/// spreadsheet is diagnosable from the message alone.
fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| {
            anyhow!(
                "Missing required column '{}' (found: {})",
                name,
                headers.join(", "),
            )
        })
}

/// Render a cell to the text that goes into the output CSV.
/// calamine's Display does the right thing per cell type
/// (Empty renders as the empty string).
fn cell_text(cell: &Data) -> String {
    cell.to_string()
}

/// Parse a cell as the binary gender code.
/// Returns None for anything that isn't a whole number —
/// the row then stays unclassified instead of failing the run.
fn cell_gender(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        // Excel stores 0 and 1 as floats — accept whole values only
        Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
