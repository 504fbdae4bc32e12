// All LLM prompt templates for skill extraction and resume suggestions.

/// Skill extraction prompt. Replace `{doc_label}` and `{doc_text}` before sending.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = r#"From the following {doc_label}, extract a comprehensive list of key skills, technologies, and tools.
Focus on technical skills, programming languages, software, and methodologies.
Provide the output as a JSON array of strings.

Example Output Format:
["Python", "SQL", "Machine Learning", "Data Visualization", "TensorFlow"]

{doc_label} text:
---
{doc_text}
---"#;

/// Resume improvement prompt.
/// Replace: {jd_text}, {resume_text}, {missing_skills}
pub const SUGGESTION_PROMPT_TEMPLATE: &str = r#"I am applying for a job with the following job description:
---
{jd_text}
---

And here is my current resume:
---
{resume_text}
---

I have identified the following key skills from the job description that are either missing or not prominently featured in my resume: {missing_skills}.

Please provide specific, actionable advice on how I can improve my resume to better match this job description, focusing on incorporating or highlighting these missing skills. Suggest how to phrase experiences, what sections to add, or what keywords to emphasize. Aim for practical, concise advice."#;

/// Returned without an LLM call when the resume already covers every JD skill.
pub const ALL_SKILLS_COVERED_MESSAGE: &str = "Great news! Based on the extracted skills, your resume seems to cover all the key requirements. Focus on quantifying your achievements!";
