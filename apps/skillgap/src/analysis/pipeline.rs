//! Analysis pipeline — orchestrates the full JD-vs-resume comparison.
//!
//! Flow: extract JD skills → extract resume skills → compare → suggest.
//!
//! Steps run strictly in sequence. An empty skill set from either extraction
//! halts the run before any later step is attempted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::analysis::document::Document;
use crate::analysis::extractor::extract_skills;
use crate::analysis::gap::{compare, GapResult};
use crate::analysis::skill_set::SkillSet;
use crate::analysis::suggestions::suggest_improvements;
use crate::errors::AppError;
use crate::llm_client::GenerativeModel;

/// Everything a single run produces, ready for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub job_skills: SkillSet,
    pub resume_skills: SkillSet,
    pub gap: GapResult,
    pub coverage_percent: u32,
    pub suggestions: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

/// Runs the full pipeline.
///
/// Steps:
/// 1. extract_skills(job_description) — halts with `NoSkillsExtracted` if empty
/// 2. extract_skills(resume) — halts with `NoSkillsExtracted` if empty
/// 3. compare() → GapResult
/// 4. suggest_improvements() for the missing skills
pub async fn run_analysis(
    job_description: &Document,
    resume: &Document,
    llm: &dyn GenerativeModel,
) -> Result<AnalysisReport, AppError> {
    // Step 1
    info!("Step 1: Extracting key skills from the Job Description...");
    let job_skills = require_skills(job_description, llm).await?;

    // Step 2
    info!("Step 2: Extracting skills from the Resume...");
    let resume_skills = require_skills(resume, llm).await?;

    // Step 3
    info!("Step 3: Performing Skill Gap Analysis...");
    let gap = compare(&job_skills, &resume_skills);
    let coverage_percent = gap.coverage_percent();
    info!(
        "Gap analysis: {} matched, {} missing ({}% coverage)",
        gap.matched.len(),
        gap.missing.len(),
        coverage_percent
    );

    // Step 4
    info!("Step 4: Generating Resume Improvement Suggestions...");
    let suggestions = suggest_improvements(job_description, resume, &gap.missing, llm).await;

    Ok(AnalysisReport {
        job_skills,
        resume_skills,
        gap,
        coverage_percent,
        suggestions,
        model: llm.model_name().to_string(),
        generated_at: Utc::now(),
    })
}

async fn require_skills(
    document: &Document,
    llm: &dyn GenerativeModel,
) -> Result<SkillSet, AppError> {
    let skills = extract_skills(document, llm).await;
    if skills.is_empty() {
        return Err(AppError::NoSkillsExtracted(document.kind()));
    }
    info!("{} skills ({}): {}", document.kind(), skills.len(), skills);
    Ok(skills)
}
