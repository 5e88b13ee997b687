use serde::{Deserialize, Serialize};

/// A candidate summary paired with the source text it was produced from,
/// under a display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledSummary {
    pub label: String,
    pub text: String,
    pub summary: String,
}

impl LabeledSummary {
    pub fn new(
        label: impl Into<String>,
        text: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            summary: summary.into(),
        }
    }
}

/// Entity-recall result for one (text, summary) pair. `score` is `None`
/// when extraction found no entities at all, since the ratio is undefined
/// there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub entities_in_text: usize,
    pub matching_entities_in_summary: usize,
    pub score: Option<f64>,
}
