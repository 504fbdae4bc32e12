//! Skill extraction — asks the model for a JSON array of skills found in a
//! document and normalizes the answer into a `SkillSet`.
//!
//! Never fails hard: any client or parse failure is logged and yields an
//! empty set. The pipeline decides whether an empty set is fatal.

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::analysis::document::Document;
use crate::analysis::normalize::collapse_whitespace;
use crate::analysis::prompts::SKILL_EXTRACTION_PROMPT_TEMPLATE;
use crate::analysis::skill_set::SkillSet;
use crate::llm_client::fences::{extract_json_payload, FenceError};
use crate::llm_client::GenerativeModel;

#[derive(Debug, Error)]
pub enum SkillParseError {
    #[error(transparent)]
    Fence(#[from] FenceError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of strings, got {0}")]
    Shape(&'static str),
}

pub fn build_extraction_prompt(document: &Document) -> String {
    SKILL_EXTRACTION_PROMPT_TEMPLATE
        .replace("{doc_label}", document.kind().label())
        .replace("{doc_text}", &collapse_whitespace(document.text()))
}

/// Extracts the skills mentioned in `document`. Returns an empty set on any
/// failure.
pub async fn extract_skills(document: &Document, llm: &dyn GenerativeModel) -> SkillSet {
    let label = document.kind().label();
    let prompt = build_extraction_prompt(document);

    let raw = match llm.send(&prompt, true).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Skill extraction call failed for {label}: {e}");
            return SkillSet::new();
        }
    };

    match parse_skill_list(&raw) {
        Ok(skills) => {
            info!("Extracted {} skills from {label}", skills.len());
            skills
        }
        Err(e) => {
            warn!("Could not parse skills for {label}: {e}. Raw response: {raw}");
            SkillSet::new()
        }
    }
}

/// Parses model output into a skill set. Accepts a bare JSON array or one
/// wrapped in a markdown code fence. Every element must be a string.
pub fn parse_skill_list(raw: &str) -> Result<SkillSet, SkillParseError> {
    let payload = extract_json_payload(raw)?;
    let value: Value = serde_json::from_str(payload)?;

    let items = match value {
        Value::Array(items) => items,
        other => return Err(SkillParseError::Shape(json_type_name(&other))),
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.as_str()),
            _ => Err(SkillParseError::Shape("an array with non-string elements")),
        })
        .collect::<Result<SkillSet, _>>()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::document::DocumentKind;
    use crate::llm_client::testing::ScriptedModel;
    use crate::llm_client::LlmError;

    fn resume(text: &str) -> Document {
        Document::new(DocumentKind::Resume, text)
    }

    #[test]
    fn test_clean_array_is_lowercased() {
        let skills = parse_skill_list(r#"["Python","SQL"]"#).unwrap();
        assert_eq!(skills.to_vec(), vec!["python", "sql"]);
    }

    #[test]
    fn test_fenced_array_parses_like_unfenced() {
        let fenced = parse_skill_list("```json\n[\"Python\", \"SQL\"]\n```").unwrap();
        let bare = parse_skill_list("[\"Python\", \"SQL\"]").unwrap();
        assert_eq!(fenced, bare);
    }

    #[test]
    fn test_fence_closed_on_payload_line_parses() {
        let skills = parse_skill_list("```json\n[\"Python\", \"SQL\"]```").unwrap();
        assert_eq!(skills.to_vec(), vec!["python", "sql"]);
    }

    #[test]
    fn test_payload_on_opening_fence_line_parses() {
        let skills = parse_skill_list("```json [\"Python\",\n \"SQL\"]\n```").unwrap();
        assert_eq!(skills.to_vec(), vec!["python", "sql"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let skills = parse_skill_list(r#"["AWS", "aws", "Aws "]"#).unwrap();
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            parse_skill_list("[\"Python\", "),
            Err(SkillParseError::Json(_))
        ));
    }

    #[test]
    fn test_object_is_shape_error() {
        assert!(matches!(
            parse_skill_list(r#"{"skills": ["Python"]}"#),
            Err(SkillParseError::Shape("object"))
        ));
    }

    #[test]
    fn test_mixed_array_is_shape_error() {
        assert!(matches!(
            parse_skill_list(r#"["Python", 3]"#),
            Err(SkillParseError::Shape(_))
        ));
    }

    #[test]
    fn test_unclosed_fence_is_fence_error() {
        assert!(matches!(
            parse_skill_list("```json\n[\"Python\"]"),
            Err(SkillParseError::Fence(_))
        ));
    }

    #[test]
    fn test_prompt_embeds_label_normalized_text_and_example() {
        let prompt = build_extraction_prompt(&resume("Python\n\n  and   SQL"));
        assert!(prompt.contains("From the following resume, extract"));
        assert!(prompt.contains("resume text:"));
        assert!(prompt.contains("Python and SQL"));
        assert!(prompt.contains(r#"["Python", "SQL", "Machine Learning", "Data Visualization", "TensorFlow"]"#));
    }

    #[tokio::test]
    async fn test_extract_requests_json_output() {
        let llm = ScriptedModel::new().with_reply(r#"["Rust", "Tokio"]"#);
        let skills = extract_skills(&resume("Rust dev"), &llm).await;

        assert_eq!(skills.to_vec(), vec!["rust", "tokio"]);
        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].expect_json);
    }

    #[tokio::test]
    async fn test_extract_returns_empty_on_malformed_json() {
        let llm = ScriptedModel::new().with_reply("Sure! The skills are Python and SQL.");
        assert!(extract_skills(&resume("x"), &llm).await.is_empty());
    }

    #[tokio::test]
    async fn test_extract_returns_empty_on_client_error() {
        let llm = ScriptedModel::new().with_error(LlmError::Api {
            status: 401,
            message: "API key not valid".to_string(),
        });
        assert!(extract_skills(&resume("x"), &llm).await.is_empty());
    }
}
