use ahara_core::domain::food::{
    ports::FoodCatalogService,
    value_objects::{AyurvedicProfile, GetAyurvedicProfileInput},
};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ayurvedic_analysis::validators::parse_constitution,
        food::validators::AyurvedicProfileQuery,
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
pub struct GetAyurvedicProfileResponse {
    pub data: AyurvedicProfile,
}

#[utoipa::path(
    get,
    path = "/{food_id}/ayurvedic-analysis",
    tag = "food",
    summary = "Rule-based Ayurvedic profile of a food",
    description = "Built from the recorded properties only, without calling the model.",
    params(
        ("food_id" = Uuid, Path, description = "Food id"),
        AyurvedicProfileQuery
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, body = GetAyurvedicProfileResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_ayurvedic_profile(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    ValidateQuery(query): ValidateQuery<AyurvedicProfileQuery>,
) -> Result<Response<GetAyurvedicProfileResponse>, ApiError> {
    let constitution = parse_constitution(query.constitution.as_deref())?;

    let profile = state
        .service
        .ayurvedic_profile(GetAyurvedicProfileInput {
            food_id,
            constitution,
        })
        .await?;

    Ok(Response::OK(GetAyurvedicProfileResponse { data: profile }))
}
