// Analysis Stage LLM prompt templates.
// All prompts for the analysis module are defined here.

pub const ANALYZE_SYSTEM: &str = "\
You are an AI resume analyzer. \
You compare a resume against a job description and respond in valid JSON only — \
no markdown fences, no explanations.";

pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Compare the following resume against the job description.
Strictly respond in valid JSON only with the following structure:

{
  "score": number (0-100),
  "matchedSkills": [ "skill1", "skill2", ... ],
  "missingSkills": [ "skill1", "skill2", ... ],
  "suggestions": [ "suggestion1", "suggestion2", ... ]
}

Resume:
{resume_text}

Job Description:
{job_description}
"#;

/// Builds the analysis prompt with both input texts embedded verbatim.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    ANALYZE_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}
