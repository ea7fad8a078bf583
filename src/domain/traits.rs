// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - XlsxLoader implements TrialSource
//   - A future CsvLoader could also implement TrialSource
//   - The application layer only sees TrialSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use crate::domain::trial::{LabeledTrial, TrialTable};

// ─── TrialSource ──────────────────────────────────────────────────────────────
/// Any component that can load the trial table from somewhere.
///
/// Implementations:
///   - XlsxLoader → reads the experiment selection spreadsheet
///   - (tests)    → in-memory tables, no fixture files needed
pub trait TrialSource {
    /// Load the full table of trials.
    /// Returns the headers and all rows, or an error.
    fn load_all(&self) -> Result<TrialTable>;
}

// ─── TrialSink ────────────────────────────────────────────────────────────────
/// Any component that can persist the labeled table.
///
/// Implementations:
///   - CsvSink → writes the augmented CSV the analysis step reads
pub trait TrialSink {
    /// Write all labeled rows under the given original headers.
    fn write_all(&self, headers: &[String], rows: &[LabeledTrial]) -> Result<()>;
}
