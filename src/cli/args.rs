// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Defines all configurable flags for the labeling run.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;
use crate::application::label_use_case::LabelConfig;

/// All arguments for the labeling run.
/// Each field becomes a --flag on the command line.
/// The defaults are the experiment's fixed relative paths,
/// so a bare invocation processes the canonical dataset.
#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Spreadsheet with the selected trials.
    /// Must contain `cleaned_output` and `subject_gender` columns.
    #[arg(long, default_value = "human_ratings/setup/Experiment selection.xlsx")]
    pub input: String,

    /// Where to write the augmented CSV
    #[arg(long, default_value = "data/experiment2_subject_reference.csv")]
    pub output: String,

    /// Word that introduces the generated clause — the pronoun is
    /// taken from the text after its LAST occurrence in each sentence
    #[arg(long, default_value = "because")]
    pub separator: String,
}

/// Convert CLI LabelArgs into the application-layer LabelConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<LabelArgs> for LabelConfig {
    fn from(a: LabelArgs) -> Self {
        LabelConfig {
            input_path:  a.input,
            output_path: a.output,
            separator:   a.separator,
        }
    }
}
