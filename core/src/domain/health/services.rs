use crate::domain::{
    ayurvedic_analysis::ports::LLMClient,
    client::ports::ClientRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    food::ports::FoodRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
};

impl<F, C, D, LLM, HC> HealthCheckService for Service<F, C, D, LLM, HC>
where
    F: FoodRepository,
    C: ClientRepository,
    D: DietPlanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{
        ayurvedic_analysis::ports::MockLLMClient, client::ports::MockClientRepository,
        diet_plan::ports::MockDietPlanRepository, food::ports::MockFoodRepository,
        health::ports::MockHealthCheckRepository,
    };

    #[tokio::test]
    async fn test_readiness_delegates_to_repository() {
        let mut health = MockHealthCheckRepository::new();
        health.expect_readiness().returning(|| {
            Box::pin(async {
                Ok(DatabaseHealthStatus {
                    status: "ok".to_string(),
                    latency_ms: 3,
                })
            })
        });

        let service = Service::new(
            MockFoodRepository::new(),
            MockClientRepository::new(),
            MockDietPlanRepository::new(),
            MockLLMClient::new(),
            health,
            Duration::from_secs(1),
        );

        let status = service.readiness().await.unwrap();
        assert_eq!(status.latency_ms, 3);
    }
}
