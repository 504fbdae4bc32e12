//! Resume improvement suggestions for the skills the resume is missing.

use tracing::{error, info};

use crate::analysis::document::Document;
use crate::analysis::normalize::collapse_whitespace;
use crate::analysis::prompts::{ALL_SKILLS_COVERED_MESSAGE, SUGGESTION_PROMPT_TEMPLATE};
use crate::llm_client::GenerativeModel;

pub fn build_suggestion_prompt(
    job_description: &Document,
    resume: &Document,
    missing_skills: &[String],
) -> String {
    SUGGESTION_PROMPT_TEMPLATE
        .replace("{jd_text}", &collapse_whitespace(job_description.text()))
        .replace("{resume_text}", &collapse_whitespace(resume.text()))
        .replace("{missing_skills}", &missing_skills.join(", "))
}

/// Returns free-text advice for closing the gap in `missing_skills`.
///
/// No model call is made when nothing is missing. A failed call is logged and
/// yields an empty string.
pub async fn suggest_improvements(
    job_description: &Document,
    resume: &Document,
    missing_skills: &[String],
    llm: &dyn GenerativeModel,
) -> String {
    if missing_skills.is_empty() {
        return ALL_SKILLS_COVERED_MESSAGE.to_string();
    }

    info!("Requesting suggestions for {} missing skills", missing_skills.len());
    let prompt = build_suggestion_prompt(job_description, resume, missing_skills);

    match llm.send(&prompt, false).await {
        Ok(text) => text,
        Err(e) => {
            error!("Suggestion call failed: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::document::DocumentKind;
    use crate::llm_client::testing::ScriptedModel;
    use crate::llm_client::LlmError;

    fn docs() -> (Document, Document) {
        (
            Document::new(DocumentKind::JobDescription, "Need   Rust\nand Kafka"),
            Document::new(DocumentKind::Resume, "I write\tRust"),
        )
    }

    #[tokio::test]
    async fn test_no_missing_skills_short_circuits() {
        let (jd, resume) = docs();
        let llm = ScriptedModel::new();

        let text = suggest_improvements(&jd, &resume, &[], &llm).await;
        assert_eq!(text, ALL_SKILLS_COVERED_MESSAGE);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_advice_returned_verbatim_as_plain_text_call() {
        let (jd, resume) = docs();
        let advice = "  Add a **Kafka** project.\n";
        let llm = ScriptedModel::new().with_reply(advice);

        let text = suggest_improvements(&jd, &resume, &["kafka".to_string()], &llm).await;
        assert_eq!(text, advice);

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert!(!calls[0].expect_json);
    }

    #[tokio::test]
    async fn test_client_error_yields_empty_text() {
        let (jd, resume) = docs();
        let llm = ScriptedModel::new().with_error(LlmError::EmptyResponse {
            prompt: "p".to_string(),
        });

        let text = suggest_improvements(&jd, &resume, &["kafka".to_string()], &llm).await;
        assert!(text.is_empty());
    }

    #[test]
    fn test_prompt_embeds_normalized_docs_and_joined_skills() {
        let (jd, resume) = docs();
        let prompt =
            build_suggestion_prompt(&jd, &resume, &["aws".to_string(), "kafka".to_string()]);
        assert!(prompt.contains("Need Rust and Kafka"));
        assert!(prompt.contains("I write Rust"));
        assert!(prompt.contains("in my resume: aws, kafka."));
    }
}
