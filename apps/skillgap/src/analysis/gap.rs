//! Gap analysis — pure set arithmetic between JD skills and resume skills.

use serde::{Deserialize, Serialize};

use crate::analysis::skill_set::SkillSet;

/// Result of comparing JD skills against resume skills.
///
/// `missing` and `matched` are disjoint and each sorted lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapResult {
    pub missing: Vec<String>, // in JD, not in resume
    pub matched: Vec<String>, // in both
}

impl GapResult {
    /// Share of JD skills found in the resume, 0 – 100. Zero when the JD
    /// produced no skills.
    pub fn coverage_percent(&self) -> u32 {
        let total = self.missing.len() + self.matched.len();
        if total == 0 {
            return 0;
        }
        ((self.matched.len() as f64 / total as f64) * 100.0).round() as u32
    }
}

/// `missing = job − resume`, `matched = job ∩ resume`.
pub fn compare(job_skills: &SkillSet, resume_skills: &SkillSet) -> GapResult {
    GapResult {
        missing: job_skills.difference(resume_skills),
        matched: job_skills.intersection(resume_skills),
    }
}
