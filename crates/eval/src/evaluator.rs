use std::collections::HashMap;

use anyhow::Result;
use extract::EntityExtractor;
use oracle::TextOracle;
use tracing::info;

use crate::record::{EvaluationRecord, LabeledSummary};

/// Scores candidate summaries by literal entity recall against their source
/// text.
pub struct Evaluator<O> {
    extractor: EntityExtractor<O>,
}

impl<O: TextOracle> Evaluator<O> {
    pub fn new(extractor: EntityExtractor<O>) -> Self {
        Self { extractor }
    }

    /// Entities are re-extracted from the source text for every summary,
    /// even when several summaries share one text.
    pub async fn evaluate_summaries(
        &self,
        summaries: &[LabeledSummary],
    ) -> Result<HashMap<String, EvaluationRecord>> {
        let mut results = HashMap::new();

        for entry in summaries {
            let entities = self.extractor.extract_entities(&entry.text).await?;
            let record = score_summary(&entities, &entry.summary);

            info!(
                label = %entry.label,
                entities_in_text = record.entities_in_text,
                matching = record.matching_entities_in_summary,
                "Scored summary"
            );

            results.insert(entry.label.clone(), record);
        }

        Ok(results)
    }
}

/// Fraction of the extracted entities that literally appear in the summary.
/// Matching is an exact case-sensitive substring check, so "Paris" also
/// matches inside "Parisian".
pub fn score_summary(entities: &[String], summary: &str) -> EvaluationRecord {
    let entities_in_text = entities.len();
    let matching = entities
        .iter()
        .filter(|entity| summary.contains(entity.as_str()))
        .count();

    let score = if entities_in_text == 0 {
        None
    } else {
        Some(matching as f64 / entities_in_text as f64)
    };

    EvaluationRecord {
        entities_in_text,
        matching_entities_in_summary: matching,
        score,
    }
}
