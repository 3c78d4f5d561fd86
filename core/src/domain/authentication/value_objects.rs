use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Verified caller of a request. Built by the HTTP layer from the bearer
/// token and handed to every service call that reads practitioner-owned data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub practitioner_id: Uuid,
    pub username: Option<String>,
}

impl Identity {
    pub fn new(practitioner_id: Uuid, username: Option<String>) -> Self {
        Self {
            practitioner_id,
            username,
        }
    }

    pub fn id(&self) -> Uuid {
        self.practitioner_id
    }
}
