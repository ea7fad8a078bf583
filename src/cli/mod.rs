// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// The tool does exactly one thing — label an experiment
// spreadsheet — so there are no subcommands, just flags whose
// defaults match the experiment's fixed file layout.
// Running with no arguments reproduces the canonical run.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the args submodule
pub mod args;

use anyhow::Result;
use args::LabelArgs;
use clap::Parser;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "subject-reference",
    version = "0.1.0",
    about = "Extract the pronoun of each generated clause and label whether it \
             refers to the subject or object of the reference sentence."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: LabelArgs,
}

impl Cli {
    /// Convert CLI args into a LabelConfig and hand off to Layer 2.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        use crate::application::label_use_case::LabelUseCase;

        tracing::info!("Labeling trials from: {}", self.args.input);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = LabelUseCase::new(self.args.into());
        let summary  = use_case.execute()?;

        println!(
            "Done. {} rows processed: {} labeled, {} left unclassified. Written to {}",
            summary.total,
            summary.labeled,
            summary.unclassified,
            summary.output_path,
        );
        Ok(())
    }
}
