pub mod parser;
pub mod prompt;

pub use parser::{ListingParseError, parse_entity_listing};

use anyhow::{Context, Result};
use oracle::TextOracle;
use tracing::warn;

/// Extracts and ranks salient entities from a text via the oracle.
pub struct EntityExtractor<O> {
    oracle: O,
}

impl<O: TextOracle> EntityExtractor<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Returns the oracle's importance ranking, most salient first. The
    /// listing is trusted as reported once cleaned of formatting artifacts:
    /// no dedup, no re-sort.
    ///
    /// A reply that does not parse as a listing is kept whole as a single
    /// entity instead of failing the run.
    pub async fn extract_entities(&self, text: &str) -> Result<Vec<String>> {
        let prompt = prompt::build_extraction_prompt(text);

        let reply = self
            .oracle
            .complete(&prompt)
            .await
            .context("Failed to extract entities")?;

        match parser::parse_entity_listing(&reply) {
            Ok(entities) => Ok(entities),
            Err(err) => {
                warn!(
                    error = %err,
                    reply_length = reply.len(),
                    "Entity listing did not parse, keeping reply as a single entity"
                );
                Ok(vec![reply])
            }
        }
    }
}
