use ahara_core::domain::ayurvedic_analysis::{
    entities::DietPlanAnalysis, ports::AyurvedicAnalysisService,
    value_objects::AnalyzeDietPlanInput,
};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ayurvedic_analysis::validators::{AnalyzeDietPlanRequest, parse_constitution},
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
pub struct AnalyzeDietPlanResponse {
    pub data: DietPlanAnalysis,
}

#[utoipa::path(
    post,
    path = "/{plan_id}/ai-analysis",
    tag = "ayurvedic-analysis",
    summary = "Analyze every food of a diet plan",
    description = "Only plans owned by the calling practitioner are visible.",
    params(
        ("plan_id" = Uuid, Path, description = "Diet plan id"),
    ),
    security(("bearer" = [])),
    request_body(
        content = AnalyzeDietPlanRequest,
        description = "Optional; without a body the client's constitution is used"
    ),
    responses(
        (status = 200, body = AnalyzeDietPlanResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn analyze_diet_plan(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    payload: Option<ValidateJson<AnalyzeDietPlanRequest>>,
) -> Result<Response<AnalyzeDietPlanResponse>, ApiError> {
    let payload = payload
        .map(|ValidateJson(payload)| payload)
        .unwrap_or_default();
    let constitution = parse_constitution(payload.constitution.as_deref())?;

    let analysis = state
        .service
        .analyze_diet_plan(
            identity,
            AnalyzeDietPlanInput {
                plan_id,
                constitution,
                season: payload.season,
            },
        )
        .await?;

    Ok(Response::OK(AnalyzeDietPlanResponse { data: analysis }))
}
