// ============================================================
// Layer 4 — CSV Sink
// ============================================================
// Writes the augmented table to disk using the csv crate.
//
// Output layout, one row per trial:
//
//   ,prompt,cleaned_output,subject_gender,...,generated_subject,subject_reference
//   0,...,The doctor examined the nurse because he was tired.,1,...,he,1
//   1,...,The doctor examined the nurse because she was tired.,1,...,she,0
//
// Conventions:
//   - The first column is an auto-generated row index with an
//     EMPTY header name, matching the table format the analysis
//     scripts downstream already read.
//   - All original columns pass through verbatim, then the two
//     derived columns are appended.
//   - Unclassified rows get EMPTY derived fields, never a 0.
//
// The parent directory is created if missing, so a fresh clone
// can run the tool before `data/` exists.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::trial::LabeledTrial;
use crate::domain::traits::TrialSink;

/// Header name of the extracted pronoun column
const SUBJECT_COLUMN: &str = "generated_subject";

/// Header name of the co-reference label column
const REFERENCE_COLUMN: &str = "subject_reference";

/// Writes labeled trials to a CSV file.
/// Implements the TrialSink trait from Layer 3.
pub struct CsvSink {
    /// Path of the CSV file to create (overwritten if present)
    path: String,
}

impl CsvSink {
    /// Create a new CsvSink targeting the given path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl TrialSink for CsvSink {
    fn write_all(&self, headers: &[String], rows: &[LabeledTrial]) -> Result<()> {
        let path = Path::new(&self.path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Cannot create output directory '{}'", parent.display())
                })?;
            }
        }

        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Cannot create output file '{}'", self.path))?;

        // Header row: index column (unnamed) + originals + derived
        let mut header_record = vec![String::new()];
        header_record.extend(headers.iter().cloned());
        header_record.push(SUBJECT_COLUMN.to_string());
        header_record.push(REFERENCE_COLUMN.to_string());
        writer
            .write_record(&header_record)
            .context("Cannot write CSV header")?;

        for (index, row) in rows.iter().enumerate() {
            let mut record = vec![index.to_string()];
            record.extend(row.trial.cells.iter().cloned());
            record.push(row.generated_subject.clone().unwrap_or_default());
            record.push(
                row.subject_reference
                    .map(|r| r.label().to_string())
                    .unwrap_or_default(),
            );
            writer
                .write_record(&record)
                .with_context(|| format!("Cannot write CSV row {}", index))?;
        }

        writer
            .flush()
            .with_context(|| format!("Cannot flush '{}'", self.path))?;

        tracing::info!("Wrote {} rows to '{}'", rows.len(), self.path);
        Ok(())
    }
}
