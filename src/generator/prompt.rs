// flowgen — Prompt builder

use crate::provider::Message;

/// Fixed system instruction for every generation request.
pub const SYSTEM_PROMPT: &str =
    "You are an expert in generating complex n8n workflows in JSON.";

/// Build the two-message exchange for one generation request.
///
/// The description is quoted verbatim inside a delimited block; the
/// surrounding template enumerates the required content categories and
/// directs the model to return JSON only. Callers reject empty input
/// before this runs.
pub fn build(description: &str) -> Vec<Message> {
    let user = format!(
        r#"Generate a valid n8n JSON template for this agentic AI workflow:

"""
{description}
"""

Include:
- OpenAI agent nodes (with system/user prompts)
- JSON parsing logic
- HTTP/API or conditional logic as needed

Return ONLY valid n8n JSON, no explanation."#
    );

    vec![Message::system(SYSTEM_PROMPT), Message::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_embedded_verbatim() {
        let desc = "notify me on new email\nwith a \"quoted\" part and <html>";
        let messages = build(desc);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains(desc));
    }

    #[test]
    fn test_template_directs_json_only() {
        let messages = build("anything");
        let user = &messages[1].content;
        assert!(user.contains("Return ONLY valid n8n JSON"));
        assert!(user.contains("OpenAI agent nodes"));
        assert!(user.contains("JSON parsing logic"));
    }
}
