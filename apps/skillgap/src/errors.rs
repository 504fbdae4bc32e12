use thiserror::Error;

use crate::analysis::document::{DocumentError, DocumentKind};
use crate::llm_client::LlmError;

/// Application-level error type. Every variant ends the run with a non-zero
/// exit status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(#[from] DocumentError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// An extraction step produced no skills, so nothing downstream can run.
    #[error("Could not extract skills from {0}. Please check API key or {0} format.")]
    NoSkillsExtracted(DocumentKind),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_skills_message_names_document() {
        let err = AppError::NoSkillsExtracted(DocumentKind::Resume);
        assert_eq!(
            err.to_string(),
            "Could not extract skills from Resume. Please check API key or Resume format."
        );
    }

    #[test]
    fn test_llm_error_converts() {
        let err: AppError = LlmError::EmptyResponse {
            prompt: "p".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
