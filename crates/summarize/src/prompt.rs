use extract::prompt::ENTITY_TAXONOMY;
use oracle::Prompt;

pub fn build_base_prompt(text: &str) -> Prompt {
    Prompt::new(
        "You are a helpful assistant that generates entity-sparse summaries after being \
         given a text.",
        format!("Summarize the following text: {text}"),
    )
}

pub fn build_dense_prompt(text: &str) -> Prompt {
    Prompt::new(
        "You are a helpful assistant that can extract entities from any given text. You are \
         also an expert on using abstraction, fusion, and compression techniques to write \
         entity-dense summaries from the same provided text.",
        format!(
            "Write an entity-dense summary from the given text. Ensure to include as many \
             entities from the original text in your summary. To be more specific, \
             {ENTITY_TAXONOMY} Text to summarize: {text}"
        ),
    )
}

pub fn build_refine_prompt(summary: &str, entities: &[String], target_length: usize) -> Prompt {
    Prompt::new(
        "You are a helpful assistant that is an expert on using abstraction, fusion, and \
         compression techniques to increase entity densities of summaries given to you.",
        format!(
            "Utilizing abstraction, fusion, and compression techniques, rewrite the given \
             summary to incorporate any entities found in the provided list that are missing \
             from the summary. Make sure that the summary you write is at most \
             {target_length} characters long, which is the length of the original summary. \
             Also make sure that any entities that are already present do not disappear in \
             your new summary. Entity list: {entities}. Summary: {summary}.",
            entities = format_entity_list(entities),
        ),
    )
}

/// Renders the ranking the same way the extractor expects to receive it,
/// bracketed and single-quoted.
fn format_entity_list(entities: &[String]) -> String {
    let quoted: Vec<String> = entities.iter().map(|e| format!("'{e}'")).collect();
    format!("[{}]", quoted.join(", "))
}
