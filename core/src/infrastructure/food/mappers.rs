use tracing::error;

use crate::{
    domain::{common::entities::app_errors::CoreError, food::entities::FoodRecord},
    entity::foods,
};

fn decode<T: serde::de::DeserializeOwned>(
    value: &serde_json::Value,
    column: &str,
) -> Result<T, CoreError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        error!("Failed to decode foods.{}: {}", column, e);
        CoreError::InternalServerError
    })
}

fn encode<T: serde::Serialize>(value: &T, column: &str) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to encode foods.{}: {}", column, e);
        CoreError::InternalServerError
    })
}

impl TryFrom<&foods::Model> for FoodRecord {
    type Error = CoreError;

    fn try_from(model: &foods::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            food_code: model.food_code.clone(),
            food_name: model.food_name.clone(),
            food_name_local: model.food_name_local.clone(),
            category: model.category.clone(),
            source: model.source.clone(),
            nutrition_per_100g: decode(&model.nutrition_per_100g, "nutrition_per_100g")?,
            nutrition_per_serving: model
                .nutrition_per_serving
                .as_ref()
                .map(|v| decode(v, "nutrition_per_serving"))
                .transpose()?,
            serving_size: model.serving_size.clone(),
            ayurvedic_properties: decode(&model.ayurvedic_properties, "ayurvedic_properties")?,
            ingredients: decode(&model.ingredients, "ingredients")?,
            created_at: model.created_at.and_utc(),
        })
    }
}

impl TryFrom<foods::Model> for FoodRecord {
    type Error = CoreError;

    fn try_from(model: foods::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

impl TryFrom<&FoodRecord> for foods::ActiveModel {
    type Error = CoreError;

    fn try_from(food: &FoodRecord) -> Result<Self, Self::Error> {
        use sea_orm::ActiveValue::Set;

        Ok(Self {
            id: Set(food.id),
            food_code: Set(food.food_code.clone()),
            food_name: Set(food.food_name.clone()),
            food_name_local: Set(food.food_name_local.clone()),
            category: Set(food.category.clone()),
            source: Set(food.source.clone()),
            nutrition_per_100g: Set(encode(&food.nutrition_per_100g, "nutrition_per_100g")?),
            nutrition_per_serving: Set(food
                .nutrition_per_serving
                .as_ref()
                .map(|n| encode(n, "nutrition_per_serving"))
                .transpose()?),
            serving_size: Set(food.serving_size.clone()),
            ayurvedic_properties: Set(encode(&food.ayurvedic_properties, "ayurvedic_properties")?),
            ingredients: Set(encode(&food.ingredients, "ingredients")?),
            created_at: Set(food.created_at.naive_utc()),
        })
    }
}
