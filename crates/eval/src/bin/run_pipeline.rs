use anyhow::{Context, Result};
use eval::{Evaluator, LabeledSummary, ngram_overlap_score};
use extract::EntityExtractor;
use oracle::{ChatClient, OracleConfig};
use summarize::{DensityRefiner, RefinementLoop, Summarizer};

/// Built-in sample used when no input file is given.
const SAMPLE_TEXT: &str = "The Halvey Street footbridge reopened on 14 March 2024 after a \
nine-month, 2.3 million euro refurbishment led by the Rotterdam engineering firm Verlinden \
& Daal. Council director Petra Okafor, 48, told reporters that pedestrian traffic across \
the River Maren had fallen 60 percent since the closure, hurting traders in the Saturday \
market on Corn Quay. The bridge, built in 1911 and listed as a protected structure under \
the Heritage Act, now carries new oak decking, LED lighting, and a widened cycle lane. \
Local historian Tomas Brandt, author of Crossings of the Maren, called the restoration \
'the most careful work on the span since the repairs that followed the floods of 1954.' \
A second phase, budgeted at 800,000 euros, will restore the cast-iron balustrades by \
December 2025.";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Entity-Density Summarization Pipeline ===\n");

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input text from {path}"))?,
        None => SAMPLE_TEXT.to_string(),
    };

    let client = ChatClient::new(OracleConfig::from_env());
    let summarizer = Summarizer::new(client.clone());
    let extractor = EntityExtractor::new(client.clone());
    let refiner = DensityRefiner::new(client.clone());

    // Step 1: entity-sparse baseline
    let initial_summary = summarizer.base_summary(&text).await?;
    println!("Initial summary: {} chars", initial_summary.chars().count());

    // Step 2: ranked entity list for the source text
    let entities = extractor.extract_entities(&text).await?;
    println!("Extracted {} entities", entities.len());

    // Step 3: three refinement rounds, each budgeted by the previous output
    let rounds = RefinementLoop::default()
        .run(&refiner, &initial_summary, &entities)
        .await?;

    // Step 4: one-shot dense summary for comparison
    let one_step_summary = summarizer.dense_summary(&text).await?;

    let final_summary = rounds.last().cloned().unwrap_or_else(|| initial_summary.clone());

    println!("\nFinal Summary:\n{final_summary}");
    println!("\nOne-Step Summary:\n{one_step_summary}");

    // Step 5: score every candidate against the source text
    let mut summaries = vec![LabeledSummary::new("initial", &text, &initial_summary)];
    for (label, round) in ["first", "second", "final"].iter().zip(&rounds) {
        summaries.push(LabeledSummary::new(*label, &text, round.clone()));
    }
    summaries.push(LabeledSummary::new("one step", &text, &one_step_summary));

    let evaluator = Evaluator::new(EntityExtractor::new(client));
    let results = evaluator.evaluate_summaries(&summaries).await?;

    println!("\nEntity recall:");
    println!("{}", serde_json::to_string_pretty(&results)?);

    println!("\nBigram overlap with source:");
    for entry in &summaries {
        if let Some(overlap) = ngram_overlap_score(&entry.text, &entry.summary, 2) {
            println!("  {}: {:.3}", entry.label, overlap);
        }
    }

    Ok(())
}
