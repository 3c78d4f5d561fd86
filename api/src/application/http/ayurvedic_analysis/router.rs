use super::handlers::{
    analyze_diet_plan::{__path_analyze_diet_plan, analyze_diet_plan},
    analyze_food::{__path_analyze_food, analyze_food},
    analyze_foods_batch::{__path_analyze_foods_batch, analyze_foods_batch},
    improvement_suggestions::{__path_improvement_suggestions, improvement_suggestions},
    seasonal_recommendations::{__path_seasonal_recommendations, seasonal_recommendations},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_food,
    analyze_foods_batch,
    improvement_suggestions,
    seasonal_recommendations
))]
pub struct AyurvedicAnalysisApiDoc;

#[derive(OpenApi)]
#[openapi(paths(analyze_diet_plan))]
pub struct DietPlanAnalysisApiDoc;

pub fn ayurvedic_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/foods/{{food_id}}/ai-analysis",
                state.args.server.root_path
            ),
            get(analyze_food),
        )
        .route(
            &format!("{}/foods/ai-analysis/batch", state.args.server.root_path),
            post(analyze_foods_batch),
        )
        .route(
            &format!(
                "{}/foods/improvement-suggestions",
                state.args.server.root_path
            ),
            post(improvement_suggestions),
        )
        .route(
            &format!(
                "{}/foods/{{food_id}}/seasonal-recommendations",
                state.args.server.root_path
            ),
            get(seasonal_recommendations),
        )
        .route(
            &format!(
                "{}/diet-plans/{{plan_id}}/ai-analysis",
                state.args.server.root_path
            ),
            post(analyze_diet_plan),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
