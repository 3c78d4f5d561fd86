use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    ayurvedic_analysis::value_objects::Constitution,
    food::entities::{AyurvedicProperties, Ingredient, NutritionFacts},
};

pub const DEFAULT_SEARCH_LIMIT: u32 = 20;
pub const MAX_SEARCH_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct SearchFoodsFilter {
    pub query: String,
    pub category: Option<String>,
    pub source: Option<String>,
    pub limit: Option<u32>,
}

impl SearchFoodsFilter {
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT)
    }

    /// Source codes (ASC, BFP, OSR) are stored upper-case.
    pub fn normalized_source(&self) -> Option<String> {
        self.source
            .as_ref()
            .map(|s| s.trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty())
    }
}

/// A catalog row as supplied by a data import. Ayurvedic properties are
/// derived from the name and nutrition when the import does not carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFoodRecord {
    pub food_code: String,
    pub food_name: String,
    #[serde(default)]
    pub food_name_local: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub source: Option<String>,
    pub nutrition_per_100g: NutritionFacts,
    #[serde(default)]
    pub nutrition_per_serving: Option<NutritionFacts>,
    #[serde(default)]
    pub serving_size: Option<String>,
    #[serde(default)]
    pub sodium_mg: Option<f64>,
    #[serde(default)]
    pub ayurvedic_properties: Option<AyurvedicProperties>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

fn default_category() -> String {
    "recipe".to_string()
}

#[derive(Debug, Clone)]
pub struct GetAyurvedicProfileInput {
    pub food_id: Uuid,
    pub constitution: Option<Constitution>,
}

/// Rule-based view of a food's recorded Ayurvedic properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AyurvedicProfile {
    pub food_id: Uuid,
    pub food_name: String,
    pub ayurvedic_properties: AyurvedicProperties,
    pub constitution: Option<Constitution>,
    pub recommendations: Vec<String>,
    pub nutrition_highlights: Vec<String>,
}
