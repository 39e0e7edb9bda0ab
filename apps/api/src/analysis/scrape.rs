//! Reply normalization: locate and parse the JSON object inside the model's
//! free-text reply, degrading to a raw-text shape when nothing parses.

use serde_json::{json, Value};

/// Normalizes a model reply into the analysis response body.
///
/// Tries, in order: the whole fence-stripped reply as a JSON object, then the
/// first-`{`-to-last-`}` substring. A reply with no parseable object returns
/// `{"raw": <reply>}` — a recognized success shape, never an error.
///
/// The substring pass is not brace-nesting aware; prose containing stray
/// braces around the object falls through to the raw shape rather than
/// mis-extracting.
pub fn scrape_analysis(reply: &str) -> Value {
    let text = strip_json_fences(reply);

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if value.is_object() {
            return value;
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&text[start..=end]) {
                return value;
            }
        }
    }

    json!({ "raw": reply })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_json_object_passes_through_unchanged() {
        let reply = r#"{"score":50,"matchedSkills":["Java"],"missingSkills":["Python"],"suggestions":["Learn Python"]}"#;
        let value = scrape_analysis(reply);
        assert_eq!(value["score"], 50);
        assert_eq!(value["matchedSkills"], json!(["Java"]));
        assert_eq!(value["missingSkills"], json!(["Python"]));
        assert_eq!(value["suggestions"], json!(["Learn Python"]));
    }

    #[test]
    fn object_with_surrounding_prose_is_extracted() {
        let reply = "Here is your analysis:\n{\"score\": 72, \"matchedSkills\": []}\nGood luck!";
        let value = scrape_analysis(reply);
        assert_eq!(value, json!({"score": 72, "matchedSkills": []}));
    }

    #[test]
    fn fenced_json_is_extracted() {
        let reply = "```json\n{\"score\": 88}\n```";
        assert_eq!(scrape_analysis(reply), json!({"score": 88}));
    }

    #[test]
    fn reply_without_braces_falls_back_to_raw() {
        let reply = "I cannot produce a structured answer for this input.";
        assert_eq!(scrape_analysis(reply), json!({ "raw": reply }));
    }

    #[test]
    fn malformed_object_falls_back_to_raw() {
        let reply = "{score: not json at all";
        assert_eq!(scrape_analysis(reply), json!({ "raw": reply }));
    }

    #[test]
    fn stray_prose_braces_fall_back_instead_of_mis_extracting() {
        let reply = "Braces {like these} confuse naive matchers. {\"score\": 10}";
        // first-{-to-last-} spans the prose braces, which is not valid JSON
        assert_eq!(scrape_analysis(reply), json!({ "raw": reply }));
    }

    #[test]
    fn non_object_json_falls_back_to_raw() {
        let reply = "42";
        assert_eq!(scrape_analysis(reply), json!({ "raw": reply }));
    }

    #[test]
    fn extra_fields_are_passed_through_without_validation() {
        let reply = r#"{"score": "high", "confidence": 0.9}"#;
        let value = scrape_analysis(reply);
        assert_eq!(value["score"], "high");
        assert_eq!(value["confidence"], 0.9);
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }
}
