//! URL encoding and engine URL construction.
//!
//! Google receives the query with whitespace replaced by literal `+` and
//! every other character left as typed; DuckDuckGo and Bing receive a
//! component-encoded query.

use crate::types::{SearchEngine, TimeFilter};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Suffix switching Google to video results sorted by date.
pub const GOOGLE_VIDEO_RECENCY: &str = "&tbm=vid&sbd=1";

/// Percent-encode `input` with `encodeURIComponent` semantics.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Whitespace as matched by a JavaScript regex `\s`.
///
/// Differs from [`char::is_whitespace`]: includes U+FEFF, excludes U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Replace every whitespace character with `+`, leaving the rest verbatim.
pub fn plus_join(query: &str) -> String {
    query
        .chars()
        .map(|c| if is_js_whitespace(c) { '+' } else { c })
        .collect()
}

/// Build the search URL for `query` on `engine`.
///
/// Google additionally gets `&tbs=qdr:<code>` when a time filter is set and
/// [`GOOGLE_VIDEO_RECENCY`] when `video_recency` is requested. Other engines
/// ignore both.
pub fn engine_url(
    engine: SearchEngine,
    query: &str,
    time_filter: TimeFilter,
    video_recency: bool,
) -> String {
    match engine {
        SearchEngine::Google => {
            let mut url = format!("{}{}", engine.search_base(), plus_join(query));
            if let Some(code) = time_filter.qdr_code() {
                url.push_str("&tbs=qdr:");
                url.push_str(code);
            }
            if video_recency {
                url.push_str(GOOGLE_VIDEO_RECENCY);
            }
            url
        }
        SearchEngine::DuckDuckGo | SearchEngine::Bing => {
            format!("{}{}", engine.search_base(), encode_uri_component(query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_encoding_matches_uri_component_rules() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("\"x\""), "%22x%22");
        assert_eq!(encode_uri_component("site:reddit.com"), "site%3Areddit.com");
        assert_eq!(encode_uri_component("(a OR b)"), "(a%20OR%20b)");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a/b?c=d&e#f+"), "a%2Fb%3Fc%3Dd%26e%23f%2B");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
    }

    #[test]
    fn plus_join_replaces_all_whitespace() {
        assert_eq!(plus_join("\"a b\" (c\td)"), "\"a+b\"+(c+d)");
        assert_eq!(plus_join("one"), "one");
    }

    #[test]
    fn plus_join_uses_javascript_whitespace_set() {
        assert_eq!(plus_join("a\u{FEFF}b"), "a+b");
        assert_eq!(plus_join("a\u{0085}b"), "a\u{0085}b");
        assert_eq!(plus_join("a\u{00A0}b\u{3000}c\u{000B}d"), "a+b+c+d");
    }

    #[test]
    fn google_url_keeps_quotes_and_uses_plus() {
        let url = engine_url(SearchEngine::Google, "\"crm\" (site:x.com)", TimeFilter::Any, false);
        assert_eq!(url, "https://www.google.com/search?q=\"crm\"+(site:x.com)");
    }

    #[test]
    fn google_time_filter_appends_tbs() {
        let url = engine_url(SearchEngine::Google, "q", TimeFilter::Week, false);
        assert_eq!(url, "https://www.google.com/search?q=q&tbs=qdr:w");
    }

    #[test]
    fn google_video_recency_follows_time_filter() {
        let url = engine_url(SearchEngine::Google, "q", TimeFilter::Day, true);
        assert_eq!(url, "https://www.google.com/search?q=q&tbs=qdr:d&tbm=vid&sbd=1");

        let url = engine_url(SearchEngine::Google, "q", TimeFilter::Any, true);
        assert_eq!(url, "https://www.google.com/search?q=q&tbm=vid&sbd=1");
    }

    #[test]
    fn other_engines_ignore_time_and_video() {
        let ddg = engine_url(SearchEngine::DuckDuckGo, "\"a b\"", TimeFilter::Year, true);
        assert_eq!(ddg, "https://duckduckgo.com/?q=%22a%20b%22");

        let bing = engine_url(SearchEngine::Bing, "\"a b\"", TimeFilter::Hour, true);
        assert_eq!(bing, "https://www.bing.com/search?q=%22a%20b%22");
        assert!(!bing.contains("tbs"));
    }
}
