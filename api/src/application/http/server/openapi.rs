use crate::application::http::{
    ayurvedic_analysis::router::{AyurvedicAnalysisApiDoc, DietPlanAnalysisApiDoc},
    food::router::FoodApiDoc,
    health::HealthApiDoc,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ahara API"
    ),
    modifiers(&BearerSecurity),
    nest(
        (path = "/foods", api = FoodApiDoc),
        (path = "/foods", api = AyurvedicAnalysisApiDoc),
        (path = "/diet-plans", api = DietPlanAnalysisApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
