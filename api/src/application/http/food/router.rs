use super::handlers::{
    get_ayurvedic_profile::{__path_get_ayurvedic_profile, get_ayurvedic_profile},
    get_food::{__path_get_food, get_food},
    search_foods::{__path_search_foods, search_foods},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_foods, get_food, get_ayurvedic_profile))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/foods/search", state.args.server.root_path),
            get(search_foods),
        )
        .route(
            &format!("{}/foods/{{food_id}}", state.args.server.root_path),
            get(get_food),
        )
        .route(
            &format!(
                "{}/foods/{{food_id}}/ayurvedic-analysis",
                state.args.server.root_path
            ),
            get(get_ayurvedic_profile),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
