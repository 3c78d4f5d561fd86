use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodRecord {
    pub id: Uuid,
    pub food_code: String,
    pub food_name: String,
    pub food_name_local: Option<String>,
    pub category: String,
    pub source: String,
    pub nutrition_per_100g: NutritionFacts,
    pub nutrition_per_serving: Option<NutritionFacts>,
    pub serving_size: Option<String>,
    pub ayurvedic_properties: AyurvedicProperties,
    pub ingredients: Vec<Ingredient>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutritionFacts {
    pub energy_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
    pub fiber_g: f64,
    pub calcium_mg: f64,
    pub iron_mg: f64,
    pub vitamin_c_mg: f64,
}

impl NutritionFacts {
    fn values(&self) -> [(&'static str, f64); 8] {
        [
            ("energy_kcal", self.energy_kcal),
            ("protein_g", self.protein_g),
            ("fat_g", self.fat_g),
            ("carb_g", self.carb_g),
            ("fiber_g", self.fiber_g),
            ("calcium_mg", self.calcium_mg),
            ("iron_mg", self.iron_mg),
            ("vitamin_c_mg", self.vitamin_c_mg),
        ]
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in self.values() {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidInput(format!(
                    "nutrition value {name} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AyurvedicProperties {
    pub primary_rasa: Vec<Rasa>,
    pub virya: Virya,
    pub dosha_effects: DoshaEffects,
    #[serde(default)]
    pub therapeutic_properties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub food_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Rasa {
    Sweet,
    Sour,
    Salty,
    Pungent,
    Bitter,
    Astringent,
}

impl Rasa {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rasa::Sweet => "sweet",
            Rasa::Sour => "sour",
            Rasa::Salty => "salty",
            Rasa::Pungent => "pungent",
            Rasa::Bitter => "bitter",
            Rasa::Astringent => "astringent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Virya {
    Heating,
    Cooling,
    Neutral,
}

impl Virya {
    pub fn as_str(&self) -> &'static str {
        match self {
            Virya::Heating => "heating",
            Virya::Cooling => "cooling",
            Virya::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dosha {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vata" => Ok(Dosha::Vata),
            "pitta" => Ok(Dosha::Pitta),
            "kapha" => Ok(Dosha::Kapha),
            other => Err(CoreError::InvalidInput(format!("unknown dosha '{other}'"))),
        }
    }
}

/// Effect a food has on one dosha, as recorded in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DoshaEffect {
    Increases,
    Decreases,
    #[default]
    Neutral,
}

impl DoshaEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoshaEffect::Increases => "increases",
            DoshaEffect::Decreases => "decreases",
            DoshaEffect::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct DoshaEffects {
    pub vata: DoshaEffect,
    pub pitta: DoshaEffect,
    pub kapha: DoshaEffect,
}

impl DoshaEffects {
    pub fn get(&self, dosha: Dosha) -> DoshaEffect {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn set(&mut self, dosha: Dosha, effect: DoshaEffect) {
        match dosha {
            Dosha::Vata => self.vata = effect,
            Dosha::Pitta => self.pitta = effect,
            Dosha::Kapha => self.kapha = effect,
        }
    }
}

impl FoodRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        food_code: String,
        food_name: String,
        food_name_local: Option<String>,
        category: String,
        source: String,
        nutrition_per_100g: NutritionFacts,
        nutrition_per_serving: Option<NutritionFacts>,
        serving_size: Option<String>,
        ayurvedic_properties: AyurvedicProperties,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            food_code,
            food_name,
            food_name_local,
            category,
            source,
            nutrition_per_100g,
            nutrition_per_serving,
            serving_size,
            ayurvedic_properties,
            ingredients,
            created_at: now,
        }
    }

    /// Checks the fields the analysis pipeline depends on.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.food_name.trim().is_empty() {
            return Err(CoreError::InvalidInput("food name is required".to_string()));
        }
        if self.ayurvedic_properties.primary_rasa.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "food '{}' has no primary rasa",
                self.food_name
            )));
        }
        self.nutrition_per_100g.validate()?;
        if let Some(serving) = &self.nutrition_per_serving {
            serving.validate()?;
        }
        Ok(())
    }
}
