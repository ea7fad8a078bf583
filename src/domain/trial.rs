// ============================================================
// Layer 3 — Trial Domain Types
// ============================================================
// Represents the rows of the experiment spreadsheet in domain
// terms. A Trial is one model-generated completion plus the
// gender code of the antecedent subject; a LabeledTrial is the
// same row after the pronoun extraction and co-reference
// classification have been applied.
//
// The original cell values are carried along untouched so the
// output CSV can reproduce every input column — labeling only
// ever APPENDS columns, it never rewrites what came in.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

use crate::domain::reference::SubjectReference;

/// One experimental trial as loaded from the spreadsheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trial {
    /// Every original cell rendered as text, in sheet column order —
    /// kept so the writer can pass all input columns through
    pub cells: Vec<String>,

    /// The model-generated sentence (the `cleaned_output` column).
    /// Expected to contain the separator word followed by a clause
    /// whose first token is a pronoun.
    pub cleaned_output: String,

    /// Binary gender code of the antecedent subject
    /// (the `subject_gender` column). None when the cell is empty
    /// or not an integer — such rows stay unclassified.
    pub subject_gender: Option<i64>,
}

impl Trial {
    /// Create a new Trial.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    pub fn new(
        cells:          Vec<String>,
        cleaned_output: impl Into<String>,
        subject_gender: Option<i64>,
    ) -> Self {
        Self {
            cells,
            cleaned_output: cleaned_output.into(),
            subject_gender,
        }
    }
}

/// The whole loaded spreadsheet: header names plus one Trial per row.
#[derive(Debug, Clone)]
pub struct TrialTable {
    /// Column names from the header row, in sheet order
    pub headers: Vec<String>,

    /// One Trial per data row, in sheet order
    pub trials: Vec<Trial>,
}

impl TrialTable {
    pub fn new(headers: Vec<String>, trials: Vec<Trial>) -> Self {
        Self { headers, trials }
    }

    pub fn row_count(&self) -> usize {
        self.trials.len()
    }
}

/// A Trial after the labeling transform.
///
/// Both derived fields are Options — None means "unclassified",
/// which serializes to an EMPTY CSV field. It is deliberately a
/// different value from SubjectReference::Object (label 0) so the
/// two can never be confused downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledTrial {
    /// The original row, carried through unchanged
    pub trial: Trial,

    /// First token of the clause after the separator —
    /// expected to be "he" or "she", but recorded verbatim
    pub generated_subject: Option<String>,

    /// Whether the pronoun co-refers with the subject or object
    /// of the reference sentence; None when the pronoun or the
    /// gender code was unrecognized
    pub subject_reference: Option<SubjectReference>,
}

impl LabeledTrial {
    /// Returns true when the row received a co-reference label
    pub fn is_classified(&self) -> bool {
        self.subject_reference.is_some()
    }
}
