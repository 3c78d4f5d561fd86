use tracing::error;

use crate::{
    domain::{
        client::entities::ClientProfile, common::entities::app_errors::CoreError,
        food::entities::Dosha,
    },
    entity::clients,
};

fn string_list(value: &serde_json::Value) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

fn parse_dosha(value: &str) -> Result<Dosha, CoreError> {
    value.parse().map_err(|e| {
        error!("Invalid dosha stored for client: {}", e);
        CoreError::InternalServerError
    })
}

impl TryFrom<&clients::Model> for ClientProfile {
    type Error = CoreError;

    fn try_from(model: &clients::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            practitioner_id: model.practitioner_id,
            name: model.name.clone(),
            age: model.age.and_then(|age| u32::try_from(age).ok()),
            gender: model.gender.clone(),
            primary_dosha: parse_dosha(&model.primary_dosha)?,
            secondary_dosha: model
                .secondary_dosha
                .as_deref()
                .map(parse_dosha)
                .transpose()?,
            health_goals: string_list(&model.health_goals),
            dietary_restrictions: string_list(&model.dietary_restrictions),
            medical_conditions: string_list(&model.medical_conditions),
            created_at: model.created_at.and_utc(),
        })
    }
}

impl TryFrom<clients::Model> for ClientProfile {
    type Error = CoreError;

    fn try_from(model: clients::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_row_mapping() {
        let model = clients::Model {
            id: uuid::Uuid::new_v4(),
            practitioner_id: uuid::Uuid::new_v4(),
            name: "Meera".to_string(),
            age: Some(-1),
            gender: None,
            primary_dosha: "Pitta".to_string(),
            secondary_dosha: Some("kapha".to_string()),
            health_goals: json!(["better sleep"]),
            dietary_restrictions: json!(null),
            medical_conditions: json!([]),
            created_at: chrono::Utc::now().naive_utc(),
        };

        let client = ClientProfile::try_from(&model).unwrap();
        assert_eq!(client.primary_dosha, Dosha::Pitta);
        assert_eq!(client.secondary_dosha, Some(Dosha::Kapha));
        assert_eq!(client.age, None);
        assert_eq!(client.health_goals, vec!["better sleep"]);
        assert!(client.dietary_restrictions.is_empty());

        let broken = clients::Model {
            primary_dosha: "air".to_string(),
            ..model
        };
        assert!(ClientProfile::try_from(broken).is_err());
    }
}
