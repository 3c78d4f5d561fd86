use std::time::Duration;

use crate::domain::{
    ayurvedic_analysis::ports::LLMClient, client::ports::ClientRepository,
    diet_plan::ports::DietPlanRepository, food::ports::FoodRepository,
    health::ports::HealthCheckRepository,
};

/// Application service. Every use case is implemented on this struct, one
/// trait per domain, with the adapters injected as type parameters.
#[derive(Clone)]
pub struct Service<F, C, D, LLM, HC>
where
    F: FoodRepository,
    C: ClientRepository,
    D: DietPlanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub(crate) food_repository: F,
    pub(crate) client_repository: C,
    pub(crate) diet_plan_repository: D,
    pub(crate) llm_client: LLM,
    pub(crate) health_check_repository: HC,
    pub(crate) llm_timeout: Duration,
}

impl<F, C, D, LLM, HC> Service<F, C, D, LLM, HC>
where
    F: FoodRepository,
    C: ClientRepository,
    D: DietPlanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub fn new(
        food_repository: F,
        client_repository: C,
        diet_plan_repository: D,
        llm_client: LLM,
        health_check_repository: HC,
        llm_timeout: Duration,
    ) -> Self {
        Self {
            food_repository,
            client_repository,
            diet_plan_repository,
            llm_client,
            health_check_repository,
            llm_timeout,
        }
    }
}
