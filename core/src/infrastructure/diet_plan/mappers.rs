use tracing::error;

use crate::{
    domain::{common::entities::app_errors::CoreError, diet_plan::entities::DietPlan},
    entity::diet_plans,
};

impl TryFrom<&diet_plans::Model> for DietPlan {
    type Error = CoreError;

    fn try_from(model: &diet_plans::Model) -> Result<Self, Self::Error> {
        let meals = serde_json::from_value(model.meals.clone()).map_err(|e| {
            error!("Failed to decode meals of diet plan {}: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            id: model.id,
            client_id: model.client_id,
            practitioner_id: model.practitioner_id,
            plan_name: model.plan_name.clone(),
            duration_days: u32::try_from(model.duration_days).unwrap_or(0),
            meals,
            created_at: model.created_at.and_utc(),
        })
    }
}

impl TryFrom<diet_plans::Model> for DietPlan {
    type Error = CoreError;

    fn try_from(model: diet_plans::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}
