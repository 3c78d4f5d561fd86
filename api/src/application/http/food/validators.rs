use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodsQuery {
    /// Matched against food name, code and ingredient names.
    #[validate(length(min = 1, max = 200, message = "query must be 1 to 200 characters"))]
    pub query: String,
    pub category: Option<String>,
    /// Data source code: ASC, BFP or OSR.
    pub source: Option<String>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AyurvedicProfileQuery {
    /// `vata`, `pitta`, `kapha` or a pair such as `vata-pitta`.
    pub constitution: Option<String>,
}
