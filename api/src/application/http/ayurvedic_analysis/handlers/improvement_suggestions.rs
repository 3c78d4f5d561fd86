use ahara_core::domain::ayurvedic_analysis::{
    entities::ImprovementSuggestions, ports::AyurvedicAnalysisService,
    value_objects::ImprovementRequest,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ayurvedic_analysis::validators::{ImprovementSuggestionsRequest, parse_constitution},
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
pub struct ImprovementSuggestionsResponse {
    pub data: ImprovementSuggestions,
}

#[utoipa::path(
    post,
    path = "/improvement-suggestions",
    tag = "ayurvedic-analysis",
    summary = "Suggest changes for foods that do not suit a client",
    description = "With a client id, the client's constitution, goals and restrictions are used; an explicit constitution takes precedence.",
    security(("bearer" = [])),
    request_body = ImprovementSuggestionsRequest,
    responses(
        (status = 200, body = ImprovementSuggestionsResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn improvement_suggestions(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ImprovementSuggestionsRequest>,
) -> Result<Response<ImprovementSuggestionsResponse>, ApiError> {
    let constitution = parse_constitution(payload.constitution.as_deref())?;

    let suggestions = state
        .service
        .improvement_suggestions(
            identity,
            ImprovementRequest {
                problematic_foods: payload.problematic_foods,
                client_id: payload.client_id,
                constitution,
                season: payload.season,
            },
        )
        .await?;

    Ok(Response::OK(ImprovementSuggestionsResponse { data: suggestions }))
}
