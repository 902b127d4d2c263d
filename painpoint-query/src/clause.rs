//! Shared clause tokens: quoting, OR-groups, keyword and phrase clauses.

use crate::types::SearchEngine;
use regex::Regex;
use std::sync::LazyLock;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("valid quoted sub-phrase regex"));

/// Wrap `text` in double quotes.
pub fn quote(text: &str) -> String {
    format!("\"{text}\"")
}

/// `("a" OR "b" ...)`: every item quoted, OR-joined, parenthesised.
pub fn quoted_or_group<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items
        .iter()
        .map(|item| quote(item.as_ref()))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("({joined})")
}

/// Sub-phrases written as `"a" "b"` inside free keyword text.
pub fn quoted_phrases(text: &str) -> Vec<&str> {
    QUOTED
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// The ` AND ...` clause for the additional-keywords field.
///
/// Quoted sub-phrases become an OR-group; anything else is one quoted
/// phrase. With `intext` set, the group is prefixed with Google's `intext:`
/// operator. Blank input yields an empty string.
pub fn keywords_clause(keywords: &str, intext: bool) -> String {
    let keywords = keywords.trim();
    if keywords.is_empty() {
        return String::new();
    }
    let prefix = if intext { "intext:" } else { "" };
    let sub_phrases = quoted_phrases(keywords);
    if sub_phrases.is_empty() {
        format!(" AND {prefix}{}", quote(keywords))
    } else {
        format!(" AND {prefix}{}", quoted_or_group(&sub_phrases))
    }
}

/// The phrase clause for `engine`: `intext:("a" OR "b")` on Google,
/// `("a" OR "b")` elsewhere. Empty when no phrases are selected.
pub fn phrases_clause(phrases: &[&str], engine: SearchEngine) -> String {
    if phrases.is_empty() {
        return String::new();
    }
    if engine.supports_intext() {
        format!("intext:{}", quoted_or_group(phrases))
    } else {
        quoted_or_group(phrases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_group_quotes_each_item() {
        assert_eq!(quoted_or_group(&["I think", "I feel"]), "(\"I think\" OR \"I feel\")");
        assert_eq!(quoted_or_group(&["solo"]), "(\"solo\")");
    }

    #[test]
    fn extracts_quoted_sub_phrases() {
        assert_eq!(quoted_phrases("\"a\" \"b\""), vec!["a", "b"]);
        assert_eq!(quoted_phrases("x \"long phrase\" y"), vec!["long phrase"]);
        assert!(quoted_phrases("no quotes here").is_empty());
        assert!(quoted_phrases("\"\"").is_empty());
    }

    #[test]
    fn keywords_with_quotes_become_intext_group() {
        assert_eq!(keywords_clause("\"a\" \"b\"", true), " AND intext:(\"a\" OR \"b\")");
    }

    #[test]
    fn plain_keywords_become_single_intext_phrase() {
        assert_eq!(keywords_clause("plain text", true), " AND intext:\"plain text\"");
    }

    #[test]
    fn keywords_without_intext() {
        assert_eq!(keywords_clause("\"a\" \"b\"", false), " AND (\"a\" OR \"b\")");
        assert_eq!(keywords_clause(" plain text ", false), " AND \"plain text\"");
    }

    #[test]
    fn blank_keywords_are_omitted() {
        assert_eq!(keywords_clause("   ", true), "");
        assert_eq!(keywords_clause("", false), "");
    }

    #[test]
    fn phrase_clause_by_engine() {
        let phrases = ["pain point", "IMO"];
        assert_eq!(
            phrases_clause(&phrases, SearchEngine::Google),
            "intext:(\"pain point\" OR \"IMO\")"
        );
        assert_eq!(
            phrases_clause(&phrases, SearchEngine::Bing),
            "(\"pain point\" OR \"IMO\")"
        );
        assert_eq!(phrases_clause(&[], SearchEngine::Google), "");
    }
}
