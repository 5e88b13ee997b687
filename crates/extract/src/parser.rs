use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingParseError {
    #[error("reply is not a bracket-delimited listing")]
    NotBracketed,
}

/// Parses the oracle's ranked entity listing.
///
/// The reply is expected to look like `['Alice', 'Bob', 'Paris']`: one
/// leading `[` and one trailing `]` are stripped, every single-quote
/// character is deleted, and the remainder is split on the literal `", "`
/// separator. Order and duplicates are preserved exactly as reported.
/// Anything else inside the brackets splits however it splits.
pub fn parse_entity_listing(raw: &str) -> Result<Vec<String>, ListingParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ListingParseError::NotBracketed)?;

    let cleaned = inner.replace('\'', "");
    if cleaned.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(cleaned.split(", ").map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_listing() {
        let entities = parse_entity_listing("['Seattle', 'Bud Dodson', '57', 'SoDo']").unwrap();
        assert_eq!(entities, vec!["Seattle", "Bud Dodson", "57", "SoDo"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let entities = parse_entity_listing("['Bob', 'Alice', 'Bob']").unwrap();
        assert_eq!(entities, vec!["Bob", "Alice", "Bob"]);
    }

    #[test]
    fn test_unbracketed_reply_is_an_error() {
        assert_eq!(
            parse_entity_listing("not a list"),
            Err(ListingParseError::NotBracketed)
        );
    }

    #[test]
    fn test_empty_reply_is_empty_listing() {
        assert_eq!(parse_entity_listing("").unwrap(), Vec::<String>::new());
        assert_eq!(parse_entity_listing("  \n").unwrap(), Vec::<String>::new());
        assert_eq!(parse_entity_listing("[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_interior_quotes_are_stripped() {
        // Quote removal is unconditional, so an apostrophe inside an
        // entity disappears with the delimiters.
        let entities = parse_entity_listing("['O'Hare', 'Chicago']").unwrap();
        assert_eq!(entities, vec!["OHare", "Chicago"]);
    }

    #[test]
    fn test_missing_separator_splits_incorrectly_not_fatally() {
        // Comma without a following space never matches the separator, so
        // the whole body stays one entry.
        let entities = parse_entity_listing("['Alice','Bob']").unwrap();
        assert_eq!(entities, vec!["Alice,Bob"]);
    }
}
