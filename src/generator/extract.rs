// flowgen — Extraction and JSON validation of completion output

use regex::Regex;
use std::sync::OnceLock;

/// Non-greedy fenced-block matcher: triple backtick, optional `json` tag,
/// interior, triple backtick.
fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"```(?:json)?\s*([\s\S]+?)\s*```").unwrap())
}

/// Select the substring to attempt JSON parsing on.
///
/// If the text contains a fenced code block, the captured interior is the
/// candidate; otherwise the entire trimmed text is. This is a heuristic,
/// not a markdown parser; alternate strategies (e.g. scanning for the
/// first balanced brace group) can replace this function without touching
/// the rest of the pipeline.
pub fn extract_payload(content: &str) -> &str {
    match fence_regex().captures(content) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(content),
        None => content.trim(),
    }
}

/// Parse the candidate as JSON and re-serialize with stable 2-space
/// indentation. The input is never modified or repaired: a parse error is
/// returned as-is so the caller can show the candidate verbatim.
pub fn pretty_json(payload: &str) -> Result<String, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    serde_json::to_string_pretty(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_fenced_with_language_tag() {
        let content = "```json\n{\"nodes\":[],\"connections\":{}}\n```";
        assert_eq!(extract_payload(content), "{\"nodes\":[],\"connections\":{}}");
    }

    #[test]
    fn test_extract_fenced_without_language_tag() {
        let content = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_payload(content), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_fence_with_surrounding_prose() {
        let content = "Here is your workflow:\n```json\n{\"a\": 1}\n```\nEnjoy!";
        assert_eq!(extract_payload(content), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_bare_text() {
        let content = "  {\"a\": 1}  ";
        assert_eq!(extract_payload(content), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_plain_sentence() {
        let content = "Sorry, I cannot help with that.";
        assert_eq!(extract_payload(content), content);
    }

    #[test]
    fn test_fenced_and_bare_parse_to_same_value() {
        let bare = r#"{"nodes": [{"id": 1}], "connections": {}}"#;
        let fenced = format!("```json\n{bare}\n```");
        let fenced_no_tag = format!("```\n{bare}\n```");

        let direct: serde_json::Value = serde_json::from_str(bare).unwrap();
        for text in [bare.to_string(), fenced, fenced_no_tag] {
            let extracted: serde_json::Value =
                serde_json::from_str(extract_payload(&text)).unwrap();
            assert_eq!(extracted, direct);
        }
    }

    #[test]
    fn test_pretty_json_two_space_indent() {
        let pretty = pretty_json(r#"{"nodes":[],"connections":{}}"#).unwrap();
        assert!(pretty.contains("\n  \"nodes\""));
        let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(
            reparsed,
            serde_json::json!({"nodes": [], "connections": {}})
        );
    }

    #[test]
    fn test_pretty_json_rejects_trailing_comma() {
        assert!(pretty_json(r#"{"a": 1,}"#).is_err());
    }

    #[test]
    fn test_pretty_json_rejects_unquoted_key() {
        assert!(pretty_json(r#"{a: 1}"#).is_err());
    }
}
