use anyhow::{Context, Result};
use oracle::TextOracle;

use crate::prompt;

/// Single-call summary generators: the entity-sparse baseline and the
/// one-shot dense variant.
pub struct Summarizer<O> {
    oracle: O,
}

impl<O: TextOracle> Summarizer<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Generic summary with no push for entity coverage. This is the low
    /// baseline the refinement loop starts from; its character length seeds
    /// the loop's budget.
    pub async fn base_summary(&self, text: &str) -> Result<String> {
        let prompt = prompt::build_base_prompt(text);
        self.oracle
            .complete(&prompt)
            .await
            .context("Failed to generate base summary")
    }

    /// Entity-dense summary in a single pass, with no prior extraction and
    /// no iteration. A comparison baseline, not a building block of the
    /// refinement loop.
    pub async fn dense_summary(&self, text: &str) -> Result<String> {
        let prompt = prompt::build_dense_prompt(text);
        self.oracle
            .complete(&prompt)
            .await
            .context("Failed to generate one-shot dense summary")
    }
}
