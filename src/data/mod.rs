// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw .xlsx file
// all the way to the augmented CSV on disk.
//
// The pipeline flows in this order:
//
//   Experiment selection.xlsx
//       │
//       ▼
//   XlsxLoader        → reads the sheet, resolves columns
//       │
//       ▼
//   ClauseExtractor   → isolates the clause after "because",
//       │               takes its first token as the pronoun
//       ▼
//   classify()        → maps (pronoun, gender) to a label (Layer 3)
//       │
//       ▼
//   CsvSink           → writes index + originals + derived columns
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the experiment spreadsheet using calamine
pub mod loader;

/// Isolates the generated clause and its leading pronoun
pub mod extractor;

/// Writes the augmented table as CSV
pub mod writer;
