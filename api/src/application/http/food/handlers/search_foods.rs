use ahara_core::domain::food::{
    entities::FoodRecord, ports::FoodCatalogService, value_objects::SearchFoodsFilter,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        food::validators::SearchFoodsQuery,
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
pub struct SearchFoodsResponse {
    pub data: Vec<FoodRecord>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "food",
    summary = "Search the food catalog",
    params(SearchFoodsQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, body = SearchFoodsResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse)
    )
)]
pub async fn search_foods(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    ValidateQuery(query): ValidateQuery<SearchFoodsQuery>,
) -> Result<Response<SearchFoodsResponse>, ApiError> {
    let foods = state
        .service
        .search_foods(SearchFoodsFilter {
            query: query.query,
            category: query.category,
            source: query.source,
            limit: query.limit,
        })
        .await?;

    Ok(Response::OK(SearchFoodsResponse { data: foods }))
}
