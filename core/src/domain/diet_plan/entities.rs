use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealItem {
    pub food_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub serving_size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct DayMeals {
    pub day: u32,
    #[serde(default)]
    pub breakfast: Option<MealItem>,
    #[serde(default)]
    pub lunch: Option<MealItem>,
    #[serde(default)]
    pub dinner: Option<MealItem>,
    #[serde(default)]
    pub snacks: Vec<MealItem>,
}

impl DayMeals {
    pub fn items(&self) -> impl Iterator<Item = &MealItem> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snacks.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietPlan {
    pub id: Uuid,
    pub client_id: Uuid,
    pub practitioner_id: Uuid,
    pub plan_name: String,
    pub duration_days: u32,
    pub meals: Vec<DayMeals>,
    pub created_at: DateTime<Utc>,
}

impl DietPlan {
    /// Food ids in order of first appearance: day by day, then breakfast,
    /// lunch, dinner and snacks.
    pub fn food_ids(&self) -> Vec<Uuid> {
        let mut seen = HashSet::new();
        self.meals
            .iter()
            .flat_map(DayMeals::items)
            .map(|item| item.food_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(food_id: Uuid) -> MealItem {
        MealItem {
            food_id,
            name: "item".to_string(),
            serving_size: None,
        }
    }

    #[test]
    fn test_food_ids_keep_first_appearance() {
        let (dal, rice, tea, khichdi) = (
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        let plan = DietPlan {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            practitioner_id: Uuid::new_v4(),
            plan_name: "Pitta week".to_string(),
            duration_days: 2,
            meals: vec![
                DayMeals {
                    day: 1,
                    breakfast: Some(item(tea)),
                    lunch: Some(item(dal)),
                    dinner: Some(item(rice)),
                    snacks: vec![item(tea)],
                },
                DayMeals {
                    day: 2,
                    breakfast: None,
                    lunch: Some(item(khichdi)),
                    dinner: Some(item(dal)),
                    snacks: vec![],
                },
            ],
            created_at: Utc::now(),
        };

        assert_eq!(plan.food_ids(), vec![tea, dal, rice, khichdi]);
    }
}
