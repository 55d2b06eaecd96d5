//! Axum route handlers for the writing API.

use axum::{extract::State, Json};

use crate::errors::{AppError, AppJson};
use crate::state::AppState;
use crate::writing::documents::{generate_contract, generate_template};
use crate::writing::generator::generate_content;
use crate::writing::grammar::check_grammar;
use crate::writing::models::{
    ContentRequest, ContentResponse, ContractRequest, ContractResponse, GrammarRequest,
    GrammarResponse, ResumeOptimizeRequest, ResumeOptimizeResponse, RewriteRequest,
    RewriteResponse, SummarizeRequest, SummarizeResponse, TemplateRequest, TemplateResponse,
};
use crate::writing::resume::optimize_resume;
use crate::writing::rewriter::rewrite_text;
use crate::writing::summarizer::summarize_text;

/// POST /api/ai/generate-content
pub async fn handle_generate_content(
    State(state): State<AppState>,
    AppJson(request): AppJson<ContentRequest>,
) -> Result<Json<ContentResponse>, AppError> {
    Ok(Json(generate_content(&state.backend, &request).await?))
}

/// POST /api/ai/check-grammar
pub async fn handle_check_grammar(
    State(state): State<AppState>,
    AppJson(request): AppJson<GrammarRequest>,
) -> Result<Json<GrammarResponse>, AppError> {
    Ok(Json(check_grammar(&state.backend, &request).await?))
}

/// POST /api/ai/rewrite
pub async fn handle_rewrite(
    State(state): State<AppState>,
    AppJson(request): AppJson<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    Ok(Json(rewrite_text(&state.backend, &request).await?))
}

/// POST /api/ai/summarize
pub async fn handle_summarize(
    State(state): State<AppState>,
    AppJson(request): AppJson<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    Ok(Json(summarize_text(&state.backend, &request).await?))
}

/// POST /api/ai/optimize-resume
///
/// Keyword scoring is deterministic; the backend mode does not change the result.
pub async fn handle_optimize_resume(
    AppJson(request): AppJson<ResumeOptimizeRequest>,
) -> Result<Json<ResumeOptimizeResponse>, AppError> {
    Ok(Json(optimize_resume(&request)))
}

/// POST /api/ai/generate-contract
pub async fn handle_generate_contract(
    AppJson(request): AppJson<ContractRequest>,
) -> Result<Json<ContractResponse>, AppError> {
    Ok(Json(generate_contract(&request)))
}

/// POST /api/ai/generate-template
pub async fn handle_generate_template(
    AppJson(request): AppJson<TemplateRequest>,
) -> Result<Json<TemplateResponse>, AppError> {
    Ok(Json(generate_template(&request)))
}
