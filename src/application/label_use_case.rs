// ============================================================
// Layer 2 — LabelUseCase
// ============================================================
// Orchestrates the full labeling pipeline in order:
//
//   Step 1: Load the spreadsheet       (Layer 4 - data)
//   Step 2: Label each trial           (Layer 4 + Layer 3)
//   Step 3: Write the augmented CSV    (Layer 4 - data)
//
// The per-row transform is a pure function (label_trial): it
// takes one Trial and produces one LabeledTrial, touching no
// shared state. The whole-table result is just the collected
// per-row results, so the pipeline is idempotent — running it
// twice on the same input produces byte-identical output.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{extractor::ClauseExtractor, loader::XlsxLoader, writer::CsvSink};
use crate::domain::reference::classify;
use crate::domain::traits::{TrialSink, TrialSource};
use crate::domain::trial::{LabeledTrial, Trial};

// ─── Labeling Configuration ──────────────────────────────────────────────────
// All settings for a labeling run.
// Serialisable so a run's exact configuration can be recorded
// alongside its output if a caller wants provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    pub input_path:  String,
    pub output_path: String,
    pub separator:   String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            input_path:  "human_ratings/setup/Experiment selection.xlsx".to_string(),
            output_path: "data/experiment2_subject_reference.csv".to_string(),
            separator:   "because".to_string(),
        }
    }
}

/// What a run accomplished — reported by Layer 1 when done.
/// The unclassified count surfaces rows the classifier could not
/// label (unknown pronoun or gender code), which the output CSV
/// records as empty fields.
#[derive(Debug, Clone)]
pub struct LabelSummary {
    pub total:        usize,
    pub labeled:      usize,
    pub unclassified: usize,
    pub output_path:  String,
}

// ─── LabelUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full labeling pipeline.
pub struct LabelUseCase {
    config: LabelConfig,
}

impl LabelUseCase {
    /// Create a new LabelUseCase with the given configuration
    pub fn new(config: LabelConfig) -> Self {
        Self { config }
    }

    /// Execute the full pipeline end to end
    pub fn execute(&self) -> Result<LabelSummary> {
        let cfg = &self.config;

        let loader = XlsxLoader::new(&cfg.input_path);
        let sink   = CsvSink::new(&cfg.output_path);
        self.run_pipeline(&loader, &sink)
    }

    /// The pipeline against the Layer 3 abstractions — tests plug
    /// in an in-memory source here instead of a fixture workbook.
    fn run_pipeline(
        &self,
        source: &dyn TrialSource,
        sink:   &dyn TrialSink,
    ) -> Result<LabelSummary> {
        let cfg = &self.config;

        // ── Step 1: Load the trial table ─────────────────────────────────────
        let table = source.load_all()?;
        tracing::info!("Labeling {} trials", table.row_count());

        // ── Step 2: Label every trial ─────────────────────────────────────────
        // One pure transform per row, collected into a new sequence
        let extractor = ClauseExtractor::new(&cfg.separator);
        let labeled: Vec<LabeledTrial> = table
            .trials
            .iter()
            .map(|trial| label_trial(trial, &extractor))
            .collect();

        let classified = labeled.iter().filter(|t| t.is_classified()).count();
        let unclassified = labeled.len() - classified;
        if unclassified > 0 {
            tracing::warn!(
                "{} of {} trials could not be classified",
                unclassified,
                labeled.len(),
            );
        }

        // ── Step 3: Write the augmented CSV ───────────────────────────────────
        sink.write_all(&table.headers, &labeled)?;

        Ok(LabelSummary {
            total:        labeled.len(),
            labeled:      classified,
            unclassified,
            output_path:  cfg.output_path.clone(),
        })
    }
}

// ─── Per-row Transform ───────────────────────────────────────────────────────
// The heart of the tool, as a pure function over one row:
//   1. pull the pronoun out of the clause after the separator
//   2. look it up against the subject's gender code
// A row that fails either step keeps None in the derived fields
// (an empty cell in the CSV) and the run carries on — one odd
// completion never aborts the batch.
pub fn label_trial(trial: &Trial, extractor: &ClauseExtractor) -> LabeledTrial {
    let generated_subject = extractor.generated_subject(&trial.cleaned_output);

    let subject_reference = match (&generated_subject, trial.subject_gender) {
        (Some(pronoun), Some(gender)) => classify(pronoun, gender),
        _ => None,
    };

    if subject_reference.is_none() {
        tracing::debug!(
            "Unclassified trial (pronoun={:?}, gender={:?}): '{}'",
            generated_subject,
            trial.subject_gender,
            trial.cleaned_output,
        );
    }

    LabeledTrial {
        trial: trial.clone(),
        generated_subject,
        subject_reference,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference::SubjectReference;
    use crate::domain::trial::TrialTable;

    fn trial(sentence: &str, gender: Option<i64>) -> Trial {
        let gender_cell = gender.map(|g| g.to_string()).unwrap_or_default();
        Trial::new(vec![sentence.to_string(), gender_cell], sentence, gender)
    }

    #[test]
    fn test_he_with_masculine_subject_refers_to_subject() {
        let e = ClauseExtractor::new("because");
        let t = trial("The doctor examined the nurse because he was tired.", Some(1));
        let labeled = label_trial(&t, &e);
        assert_eq!(labeled.generated_subject.as_deref(), Some("he"));
        assert_eq!(labeled.subject_reference, Some(SubjectReference::Subject));
    }

    #[test]
    fn test_she_with_masculine_subject_refers_to_object() {
        let e = ClauseExtractor::new("because");
        let t = trial("The doctor examined the nurse because she was tired.", Some(1));
        let labeled = label_trial(&t, &e);
        assert_eq!(labeled.generated_subject.as_deref(), Some("she"));
        assert_eq!(labeled.subject_reference, Some(SubjectReference::Object));
    }

    #[test]
    fn test_missing_gender_code_stays_unclassified() {
        let e = ClauseExtractor::new("because");
        let t = trial("The doctor examined the nurse because he was tired.", None);
        let labeled = label_trial(&t, &e);
        // The pronoun is still extracted — only the label is absent
        assert_eq!(labeled.generated_subject.as_deref(), Some("he"));
        assert_eq!(labeled.subject_reference, None);
    }

    #[test]
    fn test_unknown_pronoun_stays_unclassified() {
        let e = ClauseExtractor::new("because");
        let t = trial("They argued because they were tired.", Some(1));
        let labeled = label_trial(&t, &e);
        assert_eq!(labeled.generated_subject.as_deref(), Some("they"));
        assert_eq!(labeled.subject_reference, None);
    }

    // In-memory source for pipeline tests — no fixture workbook needed
    struct FixedSource {
        table: TrialTable,
    }

    impl TrialSource for FixedSource {
        fn load_all(&self) -> Result<TrialTable> {
            Ok(self.table.clone())
        }
    }

    #[test]
    fn test_pipeline_end_to_end_counts_and_output() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let headers = vec!["cleaned_output".to_string(), "subject_gender".to_string()];
        let table = TrialTable::new(
            headers,
            vec![
                trial("The doctor examined the nurse because he was tired.", Some(1)),
                trial("The doctor examined the nurse because she was tired.", Some(1)),
                trial("No separator in this one.", Some(1)),
            ],
        );

        let config = LabelConfig {
            input_path:  "unused.xlsx".to_string(),
            output_path: path.to_str().unwrap().to_string(),
            separator:   "because".to_string(),
        };
        let use_case = LabelUseCase::new(config);

        let source  = FixedSource { table };
        let sink    = CsvSink::new(path.to_str().unwrap());
        let summary = use_case.run_pipeline(&source, &sink).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.labeled, 2);
        assert_eq!(summary.unclassified, 1);

        // Re-running on the same input writes identical bytes
        let first = std::fs::read(&path).unwrap();
        use_case.run_pipeline(&source, &sink).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[0][3], "he");
        assert_eq!(&records[0][4], "1");
        assert_eq!(&records[1][3], "she");
        assert_eq!(&records[1][4], "0");
        // The separator-free row degrades to an unclassified row
        assert_eq!(&records[2][3], "No");
        assert_eq!(&records[2][4], "");
    }
}
