//! Response parser: recovers `GeneratedContent` from the model's raw text.
//!
//! Steps: strip code fences → parse as untyped JSON → schema walk → theme
//! check → typed deserialization. A theme mismatch is reported, never fixed.

use serde_json::Value;

use crate::generation::error::{GenerationError, IssueKind, SchemaIssue};
use crate::generation::schema::{check_generated_content, describe};
use crate::models::portfolio::GeneratedContent;
use crate::models::theme::ThemeId;

/// Parses raw model text into validated content whose theme equals `expected_theme`.
pub fn parse(raw: &str, expected_theme: ThemeId) -> Result<GeneratedContent, GenerationError> {
    let body = strip_json_fences(raw);

    let value: Value = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    let mut object = match value {
        Value::Object(object) => object,
        other => {
            return Err(GenerationError::MalformedResponse(format!(
                "expected a JSON object, found {}",
                describe(&other)
            )))
        }
    };

    let mut issues = check_generated_content(&mut object);

    if let Some(Value::String(theme)) = object.get("theme") {
        if theme != expected_theme.as_str() {
            issues.push(SchemaIssue {
                path: "theme".to_string(),
                kind: IssueKind::ThemeMismatch {
                    expected: expected_theme.as_str().to_string(),
                    found: theme.clone(),
                },
            });
        }
    }

    if !issues.is_empty() {
        return Err(GenerationError::SchemaViolation(issues));
    }

    serde_json::from_value(Value::Object(object)).map_err(|e| {
        GenerationError::SchemaViolation(vec![SchemaIssue {
            path: "$".to_string(),
            kind: IssueKind::Invalid(e.to_string()),
        }])
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output, along
/// with any prose the model put around the fenced block.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    // Bare JSON may legitimately contain fences inside string values.
    if text.starts_with('{') {
        return text.trim_end_matches("```").trim_end();
    }
    let Some(open) = text.find("```") else {
        return text;
    };

    // Skip the opening fence and its language tag line.
    let after_open = &text[open + 3..];
    let body_start = after_open.find('\n').map(|i| i + 1).unwrap_or_else(|| {
        after_open
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(after_open.len())
    });
    let body = &after_open[body_start..];

    match body.rfind("```") {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}
