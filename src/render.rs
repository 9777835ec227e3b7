//! Human-readable rendering of API responses.
//!
//! Every endpoint wrapper prints one banner per request before returning:
//! a rule, the title, the HTTP status, then the body rendered according to
//! its content type. Presentational only; nothing downstream branches on it.

use crate::transport::RawResponse;

const RULE_WIDTH: usize = 60;
const TEXT_LIMIT: usize = 1000;
const RAW_LIMIT: usize = 500;

/// Print the banner for one response.
///
/// JSON bodies are pretty-printed; YAML and plain text are shown up to 1000
/// characters; anything else is shown up to 500 characters. A body that
/// claims to be JSON but does not parse falls back to the raw rendering
/// rather than failing.
pub fn print_response(title: &str, response: &RawResponse) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("📌 {title}");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Status: {}", response.status);

    let content_type = response.content_type.as_str();
    if content_type.contains("application/json") {
        match pretty_json(&response.body) {
            Some(pretty) => println!("Response:\n{pretty}"),
            None => println!("Response: {}", truncate(&response.body, RAW_LIMIT)),
        }
    } else if content_type.contains("text/yaml") || content_type.contains("text/plain") {
        println!("Response:\n{}", truncate(&response.body, TEXT_LIMIT));
    } else {
        println!("Response: {}", truncate(&response.body, RAW_LIMIT));
    }
}

fn pretty_json(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

/// Truncate to at most `limit` characters without splitting a code point.
pub(crate) fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_input_is_untouched() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn truncate_cuts_at_char_boundary() {
        // Four chars, three of them multibyte.
        assert_eq!(truncate("aßßß", 2), "aß");
    }

    #[test]
    fn pretty_json_rejects_html() {
        assert!(pretty_json("<html>Internal Server Error</html>").is_none());
    }
}
