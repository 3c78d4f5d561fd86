use crate::{
    domain::common::{AharaConfig, services::Service},
    infrastructure::{
        client::repositories::client_repository::PostgresClientRepository,
        db::postgres::Postgres,
        diet_plan::repositories::diet_plan_repository::PostgresDietPlanRepository,
        food::repositories::food_repository::PostgresFoodRepository,
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        llm::gemini_client::GeminiLLMClient,
    },
};

pub type AharaService = Service<
    PostgresFoodRepository,
    PostgresClientRepository,
    PostgresDietPlanRepository,
    GeminiLLMClient,
    PostgresHealthCheckRepository,
>;

/// Connects to the database, runs migrations and wires every adapter into
/// the application service.
pub async fn create_service(config: AharaConfig) -> Result<AharaService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    let llm_client = GeminiLLMClient::new(&config.llm)?;

    Ok(Service::new(
        PostgresFoodRepository::new(db.clone()),
        PostgresClientRepository::new(db.clone()),
        PostgresDietPlanRepository::new(db.clone()),
        llm_client,
        PostgresHealthCheckRepository::new(db),
        config.llm.timeout,
    ))
}
