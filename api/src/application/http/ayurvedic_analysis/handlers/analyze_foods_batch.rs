use ahara_core::domain::ayurvedic_analysis::{
    entities::BatchAnalysisEntry,
    ports::AyurvedicAnalysisService,
    value_objects::{AnalysisContext, AnalyzeFoodsInput},
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ayurvedic_analysis::validators::{AnalyzeFoodsBatchRequest, parse_constitution},
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodsBatchResponse {
    /// One entry per requested id, in request order.
    pub data: Vec<BatchAnalysisEntry>,
}

#[utoipa::path(
    post,
    path = "/ai-analysis/batch",
    tag = "ayurvedic-analysis",
    summary = "Analyze several foods with one shared context",
    security(("bearer" = [])),
    request_body = AnalyzeFoodsBatchRequest,
    responses(
        (status = 200, body = AnalyzeFoodsBatchResponse),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn analyze_foods_batch(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AnalyzeFoodsBatchRequest>,
) -> Result<Response<AnalyzeFoodsBatchResponse>, ApiError> {
    let constitution = parse_constitution(payload.constitution.as_deref())?;

    let entries = state
        .service
        .analyze_foods(AnalyzeFoodsInput {
            food_ids: payload.food_ids,
            context: AnalysisContext::new(constitution, payload.season),
        })
        .await?;

    Ok(Response::OK(AnalyzeFoodsBatchResponse { data: entries }))
}
