use std::future::Future;
use uuid::Uuid;

use crate::domain::{client::entities::ClientProfile, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait ClientRepository: Send + Sync {
    /// Returns `None` when the client does not exist or belongs to another
    /// practitioner.
    fn get_by_id(
        &self,
        client_id: Uuid,
        practitioner_id: Uuid,
    ) -> impl Future<Output = Result<Option<ClientProfile>, CoreError>> + Send;
}
