//! Console rendering of an `AnalysisReport`. Text layout is informational,
//! not a stable contract; `--json` is the machine-readable form.

use std::fmt;

use crate::analysis::pipeline::AnalysisReport;

const SUGGESTIONS_UNAVAILABLE: &str =
    "No suggestions could be generated. Check the logs for the underlying error.";

/// Human-readable view of a report.
pub struct TextReport<'a>(pub &'a AnalysisReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let gap = &report.gap;

        writeln!(f, "--- AI-Powered Job Description Analyzer & Resume Matcher ---")?;
        writeln!(f, "Model: {}\n", report.model)?;

        writeln!(
            f,
            "Job Description Skills ({}): {}",
            report.job_skills.len(),
            report.job_skills
        )?;
        writeln!(
            f,
            "Resume Skills ({}): {}",
            report.resume_skills.len(),
            report.resume_skills
        )?;

        writeln!(f, "\n--- Skill Match Results ---")?;
        if gap.matched.is_empty() {
            writeln!(f, "❌ No direct skill matches found.")?;
        } else {
            writeln!(
                f,
                "✅ Matched Skills ({}): {}",
                gap.matched.len(),
                gap.matched.join(", ")
            )?;
        }

        if gap.missing.is_empty() {
            writeln!(
                f,
                "🎉 Your resume seems to cover all key skills from the job description!"
            )?;
        } else {
            writeln!(
                f,
                "⚠️ Missing/Underrepresented Skills ({}): {}",
                gap.missing.len(),
                gap.missing.join(", ")
            )?;
        }
        writeln!(f, "Coverage: {}%", report.coverage_percent)?;

        writeln!(f, "\n--- Resume Improvement Suggestions ---")?;
        if report.suggestions.trim().is_empty() {
            writeln!(f, "{SUGGESTIONS_UNAVAILABLE}")?;
        } else {
            writeln!(f, "{}", report.suggestions.trim_end())?;
        }

        writeln!(f, "\n--- Analysis Complete ---")?;
        writeln!(
            f,
            "Remember that AI suggestions are a starting point; always review and refine them."
        )
    }
}

pub fn render_text(report: &AnalysisReport) -> String {
    TextReport(report).to_string()
}

pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
