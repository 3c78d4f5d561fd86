use ahara_core::domain::ayurvedic_analysis::{
    entities::FoodAnalysis, ports::AyurvedicAnalysisService, value_objects::AnalysisContext,
};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ayurvedic_analysis::validators::{AnalyzeFoodQuery, parse_constitution},
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateQuery},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodResponse {
    pub data: FoodAnalysis,
}

#[utoipa::path(
    get,
    path = "/{food_id}/ai-analysis",
    tag = "ayurvedic-analysis",
    summary = "AI Ayurvedic analysis of a food",
    description = "Asks the model for a structured analysis. When the model is unavailable, slow or returns something unreadable, the analysis is computed from the catalog record and marked as a fallback.",
    params(
        ("food_id" = Uuid, Path, description = "Food id"),
        AnalyzeFoodQuery
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, body = AnalyzeFoodResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn analyze_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    ValidateQuery(query): ValidateQuery<AnalyzeFoodQuery>,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let constitution = parse_constitution(query.constitution.as_deref())?;

    let analysis = state
        .service
        .analyze_food(food_id, AnalysisContext::new(constitution, query.season))
        .await?;

    Ok(Response::OK(AnalyzeFoodResponse { data: analysis }))
}
