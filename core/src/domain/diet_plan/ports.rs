use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, diet_plan::entities::DietPlan};

#[cfg_attr(test, mockall::automock)]
pub trait DietPlanRepository: Send + Sync {
    fn get_by_id(
        &self,
        plan_id: Uuid,
        practitioner_id: Uuid,
    ) -> impl Future<Output = Result<Option<DietPlan>, CoreError>> + Send;
}
