use oracle::Prompt;

/// The taxonomy is enumerated in full so the model casts a wide net instead
/// of stopping at people and places.
pub const ENTITY_TAXONOMY: &str = "entities can be individual names, companies, agencies, \
institutions, cities, countries, rivers, mountains, specific dates, months, years, specific \
times of the day, percent values, financial amounts, including currencies, measurements, \
ordinal and cardinal values, specific notable events, products, titles of books, songs, \
movies, designations for specific laws or legal document names, buildings, airports, \
highways, bridges, names of languages, nationalities, religions, Americans, Buddhists, \
Democrats, etc.";

pub fn build_extraction_prompt(text: &str) -> Prompt {
    Prompt::new(
        "You are a helpful assistant that extracts and ranks entities from the given text. \
         Give your response as a single bracket-delimited list of quoted strings, where \
         entities in the list are ordered by their rankings.",
        format!(
            "Extract and rank entities from the given text. To be more specific, {ENTITY_TAXONOMY} \
             Given Text: {text}"
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle::Role;

    #[test]
    fn test_prompt_carries_text_and_taxonomy() {
        let prompt = build_extraction_prompt("Alice met Bob.");

        assert_eq!(prompt.messages[0].role, Role::System);
        let user = &prompt.messages[1].content;
        assert!(user.contains("Alice met Bob."));
        assert!(user.contains("rivers, mountains"));
    }
}
