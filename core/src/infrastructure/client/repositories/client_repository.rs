use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    client::{entities::ClientProfile, ports::ClientRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::clients::{Column as ClientColumn, Entity as ClientEntity};

#[derive(Debug, Clone)]
pub struct PostgresClientRepository {
    pub db: DatabaseConnection,
}

impl PostgresClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ClientRepository for PostgresClientRepository {
    async fn get_by_id(
        &self,
        client_id: Uuid,
        practitioner_id: Uuid,
    ) -> Result<Option<ClientProfile>, CoreError> {
        ClientEntity::find()
            .filter(ClientColumn::Id.eq(client_id))
            .filter(ClientColumn::PractitionerId.eq(practitioner_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get client by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(ClientProfile::try_from)
            .transpose()
    }
}
