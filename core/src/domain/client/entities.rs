use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{ayurvedic_analysis::value_objects::Constitution, food::entities::Dosha};

/// A practitioner's client. Read-only here; client management lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientProfile {
    pub id: Uuid,
    pub practitioner_id: Uuid,
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub primary_dosha: Dosha,
    pub secondary_dosha: Option<Dosha>,
    pub health_goals: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ClientProfile {
    /// A secondary dosha equal to the primary one is ignored.
    pub fn constitution(&self) -> Constitution {
        match self.secondary_dosha {
            Some(secondary) if secondary != self.primary_dosha => Constitution {
                primary: self.primary_dosha,
                secondary: Some(secondary),
            },
            _ => Constitution::single(self.primary_dosha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(primary: Dosha, secondary: Option<Dosha>) -> ClientProfile {
        ClientProfile {
            id: Uuid::new_v4(),
            practitioner_id: Uuid::new_v4(),
            name: "Asha".to_string(),
            age: Some(34),
            gender: None,
            primary_dosha: primary,
            secondary_dosha: secondary,
            health_goals: vec![],
            dietary_restrictions: vec![],
            medical_conditions: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_constitution_from_doshas() {
        assert_eq!(
            client(Dosha::Vata, Some(Dosha::Pitta)).constitution().to_string(),
            "vata-pitta"
        );
        assert_eq!(
            client(Dosha::Kapha, Some(Dosha::Kapha)).constitution(),
            Constitution::single(Dosha::Kapha)
        );
        assert_eq!(
            client(Dosha::Pitta, None).constitution(),
            Constitution::single(Dosha::Pitta)
        );
    }
}
