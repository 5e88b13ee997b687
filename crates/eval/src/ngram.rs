use std::collections::HashSet;

/// Word n-gram overlap between a summary and its source text: the number of
/// summary n-grams that also occur in the source, over the total number of
/// source n-grams. Unlike entity recall this catches some of the wording
/// around an entity, not just the entity's surface form. `None` when the
/// source has no n-grams of the requested size.
pub fn ngram_overlap_score(text: &str, summary: &str, n: usize) -> Option<f64> {
    let text_grams = word_ngrams(text, n);
    if text_grams.is_empty() {
        return None;
    }

    let text_set: HashSet<&str> = text_grams.iter().map(String::as_str).collect();
    let matching = word_ngrams(summary, n)
        .iter()
        .filter(|gram| text_set.contains(gram.as_str()))
        .count();

    Some(matching as f64 / text_grams.len() as f64)
}

fn word_ngrams(text: &str, n: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if n == 0 || words.len() < n {
        return Vec::new();
    }

    words.windows(n).map(|window| window.join(" ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bigram_overlap() {
        // Source bigrams: "a b", "b c", "c d". Summary contributes "a b".
        let score = ngram_overlap_score("a b c d", "a b x", 2).unwrap();
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_texts_score_one() {
        let text = "the quick brown fox";
        assert_eq!(ngram_overlap_score(text, text, 2), Some(1.0));
    }

    #[test]
    fn test_too_short_source_is_undefined() {
        assert_eq!(ngram_overlap_score("one", "one", 2), None);
        assert_eq!(ngram_overlap_score("", "anything", 1), None);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(ngram_overlap_score("a b c", "x y z", 2), Some(0.0));
    }
}
