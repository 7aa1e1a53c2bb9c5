//! Portfolio Parser: pulls one JSON value out of free-form model output.
//!
//! Model replies often wrap the JSON in a ```json fence or surround it with
//! prose. Parsing is attempted in order: the whole text, every fence tagged
//! `json`, every untagged fence, then the first `{` from which a complete
//! object parses. Failure is `None`, never an error.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Deserializer, Value};

fn fenced_block_re() -> &'static Regex {
    static FENCED_BLOCK_RE: OnceLock<Regex> = OnceLock::new();
    FENCED_BLOCK_RE.get_or_init(|| {
        Regex::new(r"(?s)```[ \t]*([A-Za-z0-9_+-]*)[ \t]*\r?\n?(.*?)```")
            .expect("valid fence regex")
    })
}

/// Parses text expected to contain a JSON value.
///
/// Blank input and text with no parseable JSON both yield `None`. Any
/// syntactically valid JSON passes; shape is checked later by `normalize`.
pub fn parse_jsonish(text: &str) -> Option<Value> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Some(value);
    }

    parse_fenced(text, |tag| tag.eq_ignore_ascii_case("json"))
        .or_else(|| parse_fenced(text, str::is_empty))
        .or_else(|| parse_embedded_object(text))
}

/// First fence whose language tag satisfies `accept` and whose body parses.
fn parse_fenced(text: &str, accept: impl Fn(&str) -> bool) -> Option<Value> {
    fenced_block_re()
        .captures_iter(text)
        .filter(|caps| caps.get(1).is_some_and(|tag| accept(tag.as_str())))
        .filter_map(|caps| caps.get(2))
        .find_map(|body| serde_json::from_str::<Value>(body.as_str().trim()).ok())
}

/// Object starting at the leftmost `{` that begins a complete JSON object.
/// Text after the object is ignored.
fn parse_embedded_object(text: &str) -> Option<Value> {
    text.match_indices('{').find_map(|(start, _)| {
        Deserializer::from_str(&text[start..])
            .into_iter::<Value>()
            .next()
            .and_then(Result::ok)
    })
}

/// Accepts either raw text or an already-parsed value.
///
/// Strings are run through [`parse_jsonish`]; `null` stays `None`; every
/// other value passes through unchanged.
pub fn coerce_jsonish(input: &Value) -> Option<Value> {
    match input {
        Value::Null => None,
        Value::String(text) => parse_jsonish(text),
        other => Some(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_object() {
        assert_eq!(parse_jsonish(r#"{"summary":"hi"}"#), Some(json!({"summary": "hi"})));
    }

    #[test]
    fn test_parse_fenced_with_prose() {
        let text = "Here is your data:\n```json\n{\"summary\":\"hi\"}\n```";
        assert_eq!(parse_jsonish(text), Some(json!({"summary": "hi"})));
    }

    #[test]
    fn test_parse_fenced_without_tag() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(parse_jsonish(text), Some(json!({"a": 1})));
    }

    #[test]
    fn test_parse_uppercase_tag() {
        let text = "```JSON\n{\"a\": 1}\n```\nLet me know if you need changes.";
        assert_eq!(parse_jsonish(text), Some(json!({"a": 1})));
    }

    #[test]
    fn test_parse_object_after_prose() {
        let text = "Sure! {\"summary\": \"Backend engineer\", \"achievements\": []}";
        assert_eq!(
            parse_jsonish(text),
            Some(json!({"summary": "Backend engineer", "achievements": []}))
        );
    }

    #[test]
    fn test_parse_object_with_trailing_prose() {
        let text = "{\"a\": {\"b\": 2}}\n\nHope this helps.";
        assert_eq!(parse_jsonish(text), Some(json!({"a": {"b": 2}})));
    }

    #[test]
    fn test_parse_json_fence_after_other_language_fence() {
        let text = "Example:\n```rust\nfn main() {}\n```\nData:\n```json\n{\"summary\":\"hi\"}\n```";
        assert_eq!(parse_jsonish(text), Some(json!({"summary": "hi"})));
    }

    #[test]
    fn test_parse_json_fence_preferred_over_untagged() {
        let text = "```\n{\"draft\": true}\n```\nFinal:\n```json\n{\"draft\": false}\n```";
        assert_eq!(parse_jsonish(text), Some(json!({"draft": false})));
    }

    #[test]
    fn test_parse_untagged_fence_after_broken_json_fence() {
        let text = "```json\n{ not valid\n```\n```\n{\"a\": 1}\n```";
        assert_eq!(parse_jsonish(text), Some(json!({"a": 1})));
    }

    #[test]
    fn test_parse_object_after_prose_with_braces() {
        let text = "Use {name} style keys. {\"summary\":\"hi\"}";
        assert_eq!(parse_jsonish(text), Some(json!({"summary": "hi"})));
    }

    #[test]
    fn test_parse_object_after_code_fence_with_braces() {
        let text = "```js\nconst x = {a: 1};\n```\nResult: {\"a\": 2} done.";
        assert_eq!(parse_jsonish(text), Some(json!({"a": 2})));
    }

    #[test]
    fn test_parse_empty_and_blank() {
        assert_eq!(parse_jsonish(""), None);
        assert_eq!(parse_jsonish("   \n\t"), None);
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse_jsonish("{ invalid json }"), None);
        assert_eq!(parse_jsonish("no json here"), None);
    }

    #[test]
    fn test_parse_non_object_json_passes_through() {
        assert_eq!(parse_jsonish("[1, 2]"), Some(json!([1, 2])));
        assert_eq!(parse_jsonish("42"), Some(json!(42)));
    }

    #[test]
    fn test_coerce_passes_objects_through() {
        let value = json!({"summary": "hi"});
        assert_eq!(coerce_jsonish(&value), Some(value.clone()));
    }

    #[test]
    fn test_coerce_parses_strings_and_drops_null() {
        assert_eq!(coerce_jsonish(&json!("{\"a\":1}")), Some(json!({"a": 1})));
        assert_eq!(coerce_jsonish(&json!("")), None);
        assert_eq!(coerce_jsonish(&Value::Null), None);
    }
}
