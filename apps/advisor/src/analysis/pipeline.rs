//! Resume analysis pipeline: orchestrates one run per uploaded document.
//!
//! Flow: extract text → analysis prompt → recover AnalysisResult → score + skill gap →
//!       recommendation prompt (fed the analysis) → recover Vec<Recommendation>.
//!
//! Only an unreadable document aborts a run. Generation and parsing failures degrade to empty
//! values so the caller always gets a fully-formed result to render.

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::models::{AnalysisResult, Recommendation};
use crate::analysis::prompts::{analysis_prompt, recommendation_prompt};
use crate::analysis::scoring::compute_resume_score;
use crate::analysis::skill_gap::{match_skills, SkillGap};
use crate::analysis::structured_output::{recover_or_default, Shape};
use crate::document::{extract_text, DocumentFormatError, ResumeText};
use crate::llm_client::TextGenerator;
use crate::market::MarketData;

/// Everything one run produces. Held by the caller; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub page_count: usize,
    pub analysis: AnalysisResult,
    pub score: u8,
    pub skill_gap: SkillGap,
    pub recommendations: Vec<Recommendation>,
}

/// Sends the analysis prompt and recovers the result. Never fails.
pub async fn analyze_resume(text: &ResumeText, generator: &dyn TextGenerator) -> AnalysisResult {
    let prompt = analysis_prompt(text.as_str());
    let response = generator.generate(&prompt).await;
    recover_or_default(response, Shape::Object)
}

/// Sends the recommendation prompt built from `analysis`. Never fails; an empty list stands in
/// for any failure.
pub async fn generate_recommendations(
    analysis: &AnalysisResult,
    generator: &dyn TextGenerator,
) -> Vec<Recommendation> {
    let analysis_json = match serde_json::to_string(analysis) {
        Ok(json) => json,
        Err(e) => {
            warn!("Could not serialize analysis for recommendation prompt: {e}");
            return Vec::new();
        }
    };
    let response = generator
        .generate(&recommendation_prompt(&analysis_json))
        .await;
    recover_or_default(response, Shape::Array)
}

/// Runs every stage after extraction. The two generation calls are strictly sequential.
pub async fn analyze_text(
    text: &ResumeText,
    generator: &dyn TextGenerator,
    market: &MarketData,
) -> PipelineOutput {
    let analysis = analyze_resume(text, generator).await;
    let score = compute_resume_score(&analysis);
    let skill_gap = match_skills(&analysis.skills, &market.high_demand_skills);
    info!(
        "Analysis: {} skills, score {}/100, {} high-demand matched, {} missing",
        analysis.skills.len(),
        score,
        skill_gap.matched.len(),
        skill_gap.missing.len()
    );

    let recommendations = generate_recommendations(&analysis, generator).await;
    info!("Generated {} recommendations", recommendations.len());

    PipelineOutput {
        page_count: text.page_count(),
        analysis,
        score,
        skill_gap,
        recommendations,
    }
}

/// Extracts the document off the async runtime, then runs the rest of the pipeline.
/// Fails before any generation call when the document cannot be read.
pub async fn run_pipeline(
    document: Bytes,
    generator: &dyn TextGenerator,
    market: &MarketData,
) -> Result<PipelineOutput, DocumentFormatError> {
    let text = tokio::task::spawn_blocking(move || extract_text(&document))
        .await
        .map_err(|_| DocumentFormatError::BackendPanic)??;
    info!(
        "Extracted {} page(s), {} chars",
        text.page_count(),
        text.as_str().len()
    );

    Ok(analyze_text(&text, generator, market).await)
}
