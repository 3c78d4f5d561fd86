use ahara_core::domain::food::{entities::FoodRecord, ports::FoodCatalogService};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetFoodResponse {
    pub data: FoodRecord,
}

#[utoipa::path(
    get,
    path = "/{food_id}",
    tag = "food",
    summary = "Get a food record",
    params(
        ("food_id" = Uuid, Path, description = "Food id"),
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, body = GetFoodResponse),
        (status = 404, body = ApiErrorResponse)
    )
)]
pub async fn get_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
) -> Result<Response<GetFoodResponse>, ApiError> {
    let food = state.service.get_food(food_id).await?;

    Ok(Response::OK(GetFoodResponse { data: food }))
}
