// Prompt templates for resume analysis and career recommendations.
// Closing JSON instructions come from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ARRAY_ONLY, JSON_OBJECT_ONLY};

/// Analysis prompt. Replace `{resume_text}` and `{json_instruction}` before sending.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this resume and extract key information:
{resume_text}

Return a JSON object with:
1. "skills": list of technical and soft skills
2. "experience": summary of work experience
3. "education": educational background
4. "strengths": 3-5 key strengths
5. "improvement_areas": 3-5 areas for improvement
6. "current_role": current or most recent job title
7. "experience_years": years of experience

{json_instruction}"#;

/// Recommendation prompt. Replace `{analysis_json}` and `{json_instruction}` before sending.
const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Based on this resume analysis: {analysis_json}

Generate career recommendations with:
1. "next_role": suggested next career move
2. "reason": why this role is a good fit
3. "skills_match": percentage match with current skills (0-100)
4. "skills_to_develop": list of skills needed for this role
5. "learning_resources": suggested resources to acquire these skills
6. "salary_range": expected salary range for this role
7. "job_growth": job market outlook for this role

Provide exactly 3 recommendations. {json_instruction}"#;

pub fn analysis_prompt(resume_text: &str) -> String {
    // Instruction first: the resume itself may contain the placeholder text.
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{json_instruction}", JSON_OBJECT_ONLY)
        .replace("{resume_text}", resume_text)
}

pub fn recommendation_prompt(analysis_json: &str) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{json_instruction}", JSON_ARRAY_ONLY)
        .replace("{analysis_json}", analysis_json)
}
