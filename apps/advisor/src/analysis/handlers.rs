//! Axum route handlers for the Resume Analysis API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::career_path::{project_career_path, CareerStage};
use crate::analysis::models::AnalysisResult;
use crate::analysis::pipeline::{run_pipeline, PipelineOutput};
use crate::analysis::scoring::compute_resume_score;
use crate::analysis::skill_gap::{match_skills, SkillGap};
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the PDF.
const UPLOAD_FIELD: &str = "file";
/// How many missing skills a client shows before collapsing the rest into a count.
const MISSING_PREVIEW_LEN: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MissingSkillsPreview {
    pub missing_preview: Vec<String>,
    pub missing_remainder: usize,
}

impl MissingSkillsPreview {
    fn from_gap(gap: &SkillGap) -> Self {
        Self {
            missing_preview: gap.missing.iter().take(MISSING_PREVIEW_LEN).cloned().collect(),
            missing_remainder: gap.missing.len().saturating_sub(MISSING_PREVIEW_LEN),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub run_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub output: PipelineOutput,
    #[serde(flatten)]
    pub preview: MissingSkillsPreview,
    pub career_path: Vec<CareerStage>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u8,
    pub skill_gap: SkillGap,
    #[serde(flatten)]
    pub preview: MissingSkillsPreview,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Multipart upload with the PDF in the `file` field. Runs the full pipeline.
/// Only an unreadable document fails the request; generation problems yield empty sections.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let document = read_upload(multipart).await?;

    let run_id = Uuid::new_v4();
    let span = info_span!("pipeline", %run_id);
    info!(parent: &span, "Analyzing uploaded document ({} bytes)", document.len());

    let output = run_pipeline(document, state.generator.as_ref(), &state.market)
        .instrument(span)
        .await?;

    let preview = MissingSkillsPreview::from_gap(&output.skill_gap);
    let career_path = project_career_path(&output.analysis, &output.recommendations);

    Ok(Json(AnalyzeResponse {
        run_id,
        analyzed_at: Utc::now(),
        output,
        preview,
        career_path,
    }))
}

/// POST /api/v1/resumes/score
///
/// Scores an already-available analysis and matches its skills against market demand.
/// No generation call. An undecodable body is a validation error.
pub async fn handle_score(
    State(state): State<AppState>,
    body: Result<Json<AnalysisResult>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(analysis) = body
        .map_err(|e| AppError::Validation(format!("Invalid analysis body: {}", e.body_text())))?;

    let skill_gap = match_skills(&analysis.skills, &state.market.high_demand_skills);
    Ok(Json(ScoreResponse {
        score: compute_resume_score(&analysis),
        preview: MissingSkillsPreview::from_gap(&skill_gap),
        skill_gap,
    }))
}

async fn read_upload(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        return Ok(data);
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{UPLOAD_FIELD}'"
    )))
}
