use ahara_core::domain::ayurvedic_analysis::value_objects::{
    Constitution, ProblematicFood, Season,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Blank means "no constitution"; anything else must parse.
pub fn parse_constitution(raw: Option<&str>) -> Result<Option<Constitution>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(ApiError::from),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalyzeFoodQuery {
    /// `vata`, `pitta`, `kapha` or a pair such as `vata-pitta`.
    pub constitution: Option<String>,
    pub season: Option<Season>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeFoodsBatchRequest {
    #[validate(length(min = 1, message = "food_ids must not be empty"))]
    pub food_ids: Vec<Uuid>,
    #[serde(default)]
    pub constitution: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeDietPlanRequest {
    /// Overrides the constitution recorded for the plan's client.
    #[serde(default)]
    pub constitution: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ImprovementSuggestionsRequest {
    #[validate(length(min = 1, message = "problematic_foods must not be empty"))]
    pub problematic_foods: Vec<ProblematicFood>,
    #[serde(default)]
    pub client_id: Option<Uuid>,
    #[serde(default)]
    pub constitution: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeasonalRecommendationsQuery {
    pub target_season: Season,
    pub constitution: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahara_core::domain::food::entities::Dosha;

    #[test]
    fn test_parse_constitution() {
        assert_eq!(parse_constitution(None).unwrap(), None);
        assert_eq!(parse_constitution(Some("  ")).unwrap(), None);
        assert_eq!(
            parse_constitution(Some("kapha")).unwrap(),
            Some(Constitution::single(Dosha::Kapha))
        );
        assert!(matches!(
            parse_constitution(Some("air")),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_batch_request_requires_ids() {
        let request: AnalyzeFoodsBatchRequest =
            serde_json::from_str(r#"{"food_ids": []}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_season_is_rejected() {
        let result = serde_json::from_str::<AnalyzeDietPlanRequest>(r#"{"season": "summer"}"#);
        assert!(result.is_err());
    }
}
