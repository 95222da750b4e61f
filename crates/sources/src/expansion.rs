//! Synonym tables and query tokenization.
//!
//! User-facing colour names and style tags rarely match catalog text
//! verbatim ("Navy" products are tagged "blue", "Sporty" maps to
//! "activewear"). The tables here translate canonical terms into the
//! vocabulary actually found in retail feeds. Expansion is one-directional
//! per call (it never chains transitively) and always keeps the original
//! token as the first term.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

type SynonymTable = HashMap<&'static str, &'static [&'static str]>;

fn build_table(entries: &[(&'static str, &'static [&'static str])]) -> SynonymTable {
    entries.iter().copied().collect()
}

/// User-selected colour name → terms likely in the catalogue.
/// The canonical lowercase form leads each list.
static COLOUR_ALIASES: LazyLock<SynonymTable> = LazyLock::new(|| {
    build_table(&[
        ("navy", &["navy", "blue", "indigo"]),
        ("maroon", &["maroon", "red", "burgundy"]),
        ("beige", &["beige", "cream", "off-white"]),
        ("teal", &["teal", "green", "cyan"]),
        ("coral", &["coral", "orange", "red"]),
    ])
});

/// Style tag → usage/product_type terms.
static STYLE_MAP: LazyLock<SynonymTable> = LazyLock::new(|| {
    build_table(&[
        ("casual", &["casual", "everyday"]),
        ("formal", &["formal", "office", "business"]),
        ("sporty", &["sports", "gym", "athletic", "activewear", "running"]),
        ("ethnic", &["ethnic", "traditional", "kurta", "saree", "indian"]),
        ("streetwear", &["streetwear", "urban", "hip hop"]),
        ("minimalist", &["minimal", "plain", "basic"]),
        ("bohemian", &["bohemian", "boho", "floral"]),
        ("party", &["party", "night out", "club", "glam"]),
    ])
});

/// Free-text spelling variants for keyword retrieval.
static QUERY_SYNONYMS: LazyLock<SynonymTable> = LazyLock::new(|| {
    build_table(&[
        ("tshirt", &["tee", "t-shirt"]),
        ("tee", &["tshirt", "t-shirt"]),
        ("t-shirt", &["tshirt", "tee"]),
        ("sneakers", &["trainers", "shoes"]),
        ("trainers", &["sneakers", "shoes"]),
        ("jeans", &["denim"]),
        ("denim", &["jeans"]),
        ("hoodie", &["sweatshirt"]),
        ("sweatshirt", &["hoodie"]),
        ("saree", &["sari"]),
        ("sari", &["saree"]),
    ])
});

/// Function words and generic verbs that carry no retrieval signal.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "for", "with", "from", "this", "that", "are", "was",
        "can", "you", "some", "any", "show", "find", "want", "need", "get",
        "buy", "give", "looking", "please", "have",
    ]
    .into_iter()
    .collect()
});

/// Map a user-facing colour name to catalogue search terms.
/// Unknown colours fall back to their own lowercase form.
pub fn colour_terms(colour: &str) -> Vec<String> {
    match COLOUR_ALIASES.get(colour.to_lowercase().as_str()) {
        Some(aliases) => aliases.iter().map(|s| s.to_string()).collect(),
        None => vec![colour.to_lowercase()],
    }
}

/// Map a style tag to usage/product_type search terms.
/// Unknown styles fall back to their own lowercase form.
pub fn style_terms(style: &str) -> Vec<String> {
    match STYLE_MAP.get(style.to_lowercase().as_str()) {
        Some(terms) => terms.iter().map(|s| s.to_string()).collect(),
        None => vec![style.to_lowercase()],
    }
}

/// Split a free-text query into lowercase search tokens.
///
/// Punctuation is stripped but internal hyphens survive ("t-shirt" stays a
/// single token). Stop-words and tokens shorter than three characters are
/// dropped.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(|token| token.trim_matches('-'))
        .filter(|token| token.len() > 2 && !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Expand a single lowercase token through every synonym table.
/// The original token always leads the result.
pub fn expand_token(token: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut expanded = Vec::new();

    let mut push = |term: &str| {
        if seen.insert(term.to_string()) {
            expanded.push(term.to_string());
        }
    };

    push(token);
    for table in [&QUERY_SYNONYMS, &COLOUR_ALIASES, &STYLE_MAP] {
        if let Some(synonyms) = table.get(token) {
            for synonym in synonyms.iter() {
                push(synonym);
            }
        }
    }

    expanded
}

/// Expand a token list, deduplicating across tokens while preserving
/// first-seen order.
pub fn expand_terms(tokens: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut terms = Vec::new();
    for token in tokens {
        for term in expand_token(token) {
            if seen.insert(term.clone()) {
                terms.push(term);
            }
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_terms_known() {
        assert_eq!(colour_terms("Navy"), vec!["navy", "blue", "indigo"]);
        assert_eq!(colour_terms("teal"), vec!["teal", "green", "cyan"]);
    }

    #[test]
    fn test_colour_terms_unknown_falls_back_to_lowercase() {
        assert_eq!(colour_terms("Chartreuse"), vec!["chartreuse"]);
    }

    #[test]
    fn test_style_terms() {
        assert_eq!(
            style_terms("Sporty"),
            vec!["sports", "gym", "athletic", "activewear", "running"]
        );
        assert_eq!(style_terms("Grunge"), vec!["grunge"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation_keeps_hyphens() {
        assert_eq!(
            tokenize("Show me a navy, casual t-shirt!"),
            vec!["navy", "casual", "t-shirt"]
        );
    }

    #[test]
    fn test_tokenize_drops_stop_words_and_short_tokens() {
        assert_eq!(tokenize("I want an XL top"), vec!["top"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("show me some").is_empty());
    }

    #[test]
    fn test_expand_token_keeps_original_first() {
        let terms = expand_token("tshirt");
        assert_eq!(terms[0], "tshirt");
        assert!(terms.contains(&"tee".to_string()));
        assert!(terms.contains(&"t-shirt".to_string()));
    }

    #[test]
    fn test_expand_token_does_not_chain_transitively() {
        // "navy" expands to "blue", but "blue"'s own expansions (none here)
        // must not be pulled in via "navy".
        let terms = expand_token("navy");
        assert_eq!(terms, vec!["navy", "blue", "indigo"]);
    }

    #[test]
    fn test_expand_terms_dedups_across_tokens() {
        let tokens = vec!["maroon".to_string(), "coral".to_string()];
        let terms = expand_terms(&tokens);
        // "red" appears in both alias lists but only once in the output
        assert_eq!(terms.iter().filter(|t| *t == "red").count(), 1);
        assert_eq!(terms[0], "maroon");
    }
}
