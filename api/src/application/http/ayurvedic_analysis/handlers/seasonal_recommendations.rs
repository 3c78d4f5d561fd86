use ahara_core::domain::ayurvedic_analysis::{
    entities::SeasonalRecommendation, ports::AyurvedicAnalysisService,
    value_objects::SeasonalRecommendationInput,
};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ayurvedic_analysis::validators::{SeasonalRecommendationsQuery, parse_constitution},
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
pub struct SeasonalRecommendationsResponse {
    pub data: SeasonalRecommendation,
}

#[utoipa::path(
    get,
    path = "/{food_id}/seasonal-recommendations",
    tag = "ayurvedic-analysis",
    summary = "Seasonal suitability of a food",
    params(
        ("food_id" = Uuid, Path, description = "Food id"),
        SeasonalRecommendationsQuery
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, body = SeasonalRecommendationsResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn seasonal_recommendations(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    ValidateQuery(query): ValidateQuery<SeasonalRecommendationsQuery>,
) -> Result<Response<SeasonalRecommendationsResponse>, ApiError> {
    let constitution = parse_constitution(query.constitution.as_deref())?;

    let recommendation = state
        .service
        .seasonal_recommendations(SeasonalRecommendationInput {
            food_id,
            target_season: query.target_season,
            constitution,
        })
        .await?;

    Ok(Response::OK(SeasonalRecommendationsResponse {
        data: recommendation,
    }))
}
