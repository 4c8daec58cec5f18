//! Axum route handlers for the Portfolio API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::pipeline::generate_portfolio;
use crate::models::portfolio::{non_blank, PortfolioInput, StoredPortfolio};
use crate::state::AppState;

const MIN_NAME_CHARS: usize = 2;
const MIN_CAREER_SUMMARY_CHARS: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePortfolioResponse {
    pub success: bool,
    pub slug: String,
    pub portfolio_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PortfolioListResponse {
    pub portfolios: Vec<StoredPortfolio>,
}

// ────────────────────────────────────────────────────────────────────────────
// Input validation
// ────────────────────────────────────────────────────────────────────────────

/// Field-presence and length checks that must pass before generation runs.
pub fn validate_input(input: &PortfolioInput) -> Result<(), AppError> {
    if input.name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(AppError::Validation(format!(
            "name must be at least {MIN_NAME_CHARS} characters"
        )));
    }

    if input.career_summary.trim().chars().count() < MIN_CAREER_SUMMARY_CHARS {
        return Err(AppError::Validation(format!(
            "careerSummary must be at least {MIN_CAREER_SUMMARY_CHARS} characters"
        )));
    }

    if !input.skills.iter().any(|s| !s.trim().is_empty()) {
        return Err(AppError::Validation(
            "skills must contain at least one entry".to_string(),
        ));
    }

    if let Some(email) = non_blank(&input.email) {
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(AppError::Validation(format!("'{email}' is not a valid email")));
        }
    }

    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/portfolios/generate
///
/// Validates the submission, runs the generation pipeline and stores the result.
/// Nothing is stored when generation fails.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(input): Json<PortfolioInput>,
) -> Result<Json<GeneratePortfolioResponse>, AppError> {
    validate_input(&input)?;

    info!(
        "Generating portfolio for '{}' (style: {:?})",
        input.name, input.portfolio_style
    );
    let document = generate_portfolio(state.llm.as_ref(), input).await?;

    let created = state.store.create(document).await?;
    info!(
        "Generated portfolio {} at slug '{}'",
        created.id, created.slug
    );

    Ok(Json(GeneratePortfolioResponse {
        success: true,
        slug: created.slug,
        portfolio_id: created.id,
    }))
}

/// GET /api/v1/portfolios
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<PortfolioListResponse>, AppError> {
    let portfolios = state.store.list().await?;
    Ok(Json(PortfolioListResponse { portfolios }))
}

/// GET /api/v1/portfolios/:slug
pub async fn handle_get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<StoredPortfolio>, AppError> {
    state
        .store
        .get_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Portfolio '{slug}' not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
