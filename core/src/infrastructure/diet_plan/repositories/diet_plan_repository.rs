use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{entities::DietPlan, ports::DietPlanRepository},
};
use crate::entity::diet_plans::{Column as DietPlanColumn, Entity as DietPlanEntity};

#[derive(Debug, Clone)]
pub struct PostgresDietPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresDietPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DietPlanRepository for PostgresDietPlanRepository {
    async fn get_by_id(
        &self,
        plan_id: Uuid,
        practitioner_id: Uuid,
    ) -> Result<Option<DietPlan>, CoreError> {
        DietPlanEntity::find()
            .filter(DietPlanColumn::Id.eq(plan_id))
            .filter(DietPlanColumn::PractitionerId.eq(practitioner_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get diet plan by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(DietPlan::try_from)
            .transpose()
    }
}
