use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    ayurvedic_analysis::ports::LLMClient,
    client::ports::ClientRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    food::{
        entities::{DoshaEffect, FoodRecord, Virya},
        ports::{FoodCatalogService, FoodRepository},
        properties::derive_properties,
        value_objects::{
            AyurvedicProfile, GetAyurvedicProfileInput, NewFoodRecord, SearchFoodsFilter,
        },
    },
    health::ports::HealthCheckRepository,
};

const DEFAULT_SOURCE: &str = "OSR";

fn profile_recommendations(food: &FoodRecord, input: &GetAyurvedicProfileInput) -> Vec<String> {
    let properties = &food.ayurvedic_properties;
    let mut recommendations = Vec::new();

    if let Some(constitution) = &input.constitution {
        for dosha in constitution.doshas() {
            recommendations.push(match properties.dosha_effects.get(dosha) {
                DoshaEffect::Increases => {
                    format!("Consume in moderation if {dosha} constitution is dominant")
                }
                DoshaEffect::Decreases => format!("Beneficial for balancing {dosha} dosha"),
                DoshaEffect::Neutral => format!("Neutral effect on {dosha} dosha"),
            });
        }
    }

    match properties.virya {
        Virya::Heating => recommendations
            .push("Best consumed in cooler weather or by those with cold constitution".to_string()),
        Virya::Cooling => recommendations
            .push("Ideal for hot weather or those with warm constitution".to_string()),
        Virya::Neutral => {}
    }

    recommendations
}

fn nutrition_highlights(food: &FoodRecord) -> Vec<String> {
    let nutrition = &food.nutrition_per_100g;
    vec![
        format!("Energy: {} kcal per 100g", nutrition.energy_kcal),
        format!("Protein: {}g per 100g", nutrition.protein_g),
        format!("Iron: {}mg per 100g", nutrition.iron_mg),
    ]
}

fn into_food_record(new: NewFoodRecord) -> Result<FoodRecord, CoreError> {
    let properties = match new.ayurvedic_properties {
        Some(properties) => properties,
        None => derive_properties(
            &new.food_name,
            &new.nutrition_per_100g,
            new.sodium_mg.unwrap_or(0.0),
        ),
    };

    let source = new
        .source
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    let food = FoodRecord::new(
        new.food_code,
        new.food_name,
        new.food_name_local,
        new.category,
        source,
        new.nutrition_per_100g,
        new.nutrition_per_serving,
        new.serving_size,
        properties,
        new.ingredients,
    );
    food.validate()?;

    Ok(food)
}

impl<F, C, D, LLM, HC> FoodCatalogService for Service<F, C, D, LLM, HC>
where
    F: FoodRepository,
    C: ClientRepository,
    D: DietPlanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn get_food(&self, food_id: Uuid) -> Result<FoodRecord, CoreError> {
        self.food_repository
            .get_by_id(food_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn search_foods(&self, filter: SearchFoodsFilter) -> Result<Vec<FoodRecord>, CoreError> {
        if filter.query.trim().is_empty() {
            return Err(CoreError::InvalidInput("query must not be empty".to_string()));
        }

        let filter = SearchFoodsFilter {
            query: filter.query.trim().to_string(),
            category: filter.category.clone().filter(|c| !c.trim().is_empty()),
            source: filter.normalized_source(),
            limit: Some(filter.effective_limit()),
        };

        self.food_repository.search(filter).await
    }

    async fn ayurvedic_profile(
        &self,
        input: GetAyurvedicProfileInput,
    ) -> Result<AyurvedicProfile, CoreError> {
        let food = self.get_food(input.food_id).await?;

        Ok(AyurvedicProfile {
            food_id: food.id,
            recommendations: profile_recommendations(&food, &input),
            nutrition_highlights: nutrition_highlights(&food),
            food_name: food.food_name,
            ayurvedic_properties: food.ayurvedic_properties,
            constitution: input.constitution,
        })
    }

    #[instrument(skip(self, foods), fields(count = foods.len()))]
    async fn seed_catalog(&self, foods: Vec<NewFoodRecord>) -> Result<usize, CoreError> {
        let existing = self.food_repository.count().await?;
        if existing > 0 {
            tracing::info!(existing, "Food catalog already populated, skipping seed");
            return Ok(0);
        }

        let mut records = Vec::with_capacity(foods.len());
        for new in foods {
            let code = new.food_code.clone();
            match into_food_record(new) {
                Ok(food) => records.push(food),
                Err(e) => tracing::warn!(food_code = %code, "Skipping seed row: {}", e),
            }
        }

        if records.is_empty() {
            return Ok(0);
        }

        let inserted = self.food_repository.create_batch(records).await?;
        tracing::info!(inserted, "Food catalog seeded");

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{
        ayurvedic_analysis::{
            ports::MockLLMClient, prompt::tests::masoor_dal, value_objects::Constitution,
        },
        client::ports::MockClientRepository,
        diet_plan::ports::MockDietPlanRepository,
        food::{
            entities::{Dosha, NutritionFacts, Rasa},
            ports::MockFoodRepository,
        },
        health::ports::MockHealthCheckRepository,
    };

    fn service(
        foods: MockFoodRepository,
    ) -> Service<
        MockFoodRepository,
        MockClientRepository,
        MockDietPlanRepository,
        MockLLMClient,
        MockHealthCheckRepository,
    > {
        Service::new(
            foods,
            MockClientRepository::new(),
            MockDietPlanRepository::new(),
            MockLLMClient::new(),
            MockHealthCheckRepository::new(),
            Duration::from_secs(1),
        )
    }

    fn new_food(code: &str, name: &str) -> NewFoodRecord {
        NewFoodRecord {
            food_code: code.to_string(),
            food_name: name.to_string(),
            food_name_local: None,
            category: "recipe".to_string(),
            source: Some("asc".to_string()),
            nutrition_per_100g: NutritionFacts {
                energy_kcal: 120.0,
                carb_g: 22.0,
                protein_g: 4.0,
                ..Default::default()
            },
            nutrition_per_serving: None,
            serving_size: None,
            sodium_mg: None,
            ayurvedic_properties: None,
            ingredients: vec![],
        }
    }

    #[tokio::test]
    async fn test_profile_for_constitution() {
        let dal = masoor_dal();
        let stored = dal.clone();
        let mut foods = MockFoodRepository::new();
        foods.expect_get_by_id().returning(move |_| {
            let food = stored.clone();
            Box::pin(async move { Ok(Some(food)) })
        });

        let profile = service(foods)
            .ayurvedic_profile(GetAyurvedicProfileInput {
                food_id: dal.id,
                constitution: Some(Constitution::dual(Dosha::Vata, Dosha::Pitta).unwrap()),
            })
            .await
            .unwrap();

        assert_eq!(
            profile.recommendations,
            vec![
                "Consume in moderation if vata constitution is dominant",
                "Beneficial for balancing pitta dosha",
                "Ideal for hot weather or those with warm constitution",
            ]
        );
        assert_eq!(profile.nutrition_highlights[1], "Protein: 9g per 100g");
    }

    #[tokio::test]
    async fn test_search_normalises_filter() {
        let mut foods = MockFoodRepository::new();
        foods
            .expect_search()
            .withf(|filter| {
                filter.query == "dal"
                    && filter.source.as_deref() == Some("ASC")
                    && filter.limit == Some(100)
                    && filter.category.is_none()
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![]) }));

        let service = service(foods);
        let found = service
            .search_foods(SearchFoodsFilter {
                query: "  dal ".to_string(),
                category: Some(" ".to_string()),
                source: Some("asc".to_string()),
                limit: Some(500),
            })
            .await
            .unwrap();
        assert!(found.is_empty());

        let err = service
            .search_foods(SearchFoodsFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_seed_derives_properties_and_skips_invalid_rows() {
        let mut foods = MockFoodRepository::new();
        foods
            .expect_count()
            .returning(|| Box::pin(async { Ok(0) }));
        foods
            .expect_create_batch()
            .withf(|records| {
                records.len() == 1
                    && records[0].source == "ASC"
                    && records[0].ayurvedic_properties.primary_rasa.contains(&Rasa::Sour)
            })
            .returning(|records| {
                let count = records.len();
                Box::pin(async move { Ok(count) })
            });

        let mut invalid = new_food("X1", " ");
        invalid.nutrition_per_100g.fat_g = -1.0;

        let inserted = service(foods)
            .seed_catalog(vec![new_food("A1", "Lemon rice"), invalid])
            .await
            .unwrap();
        assert_eq!(inserted, 1);
    }

    #[tokio::test]
    async fn test_seed_is_noop_when_populated() {
        let mut foods = MockFoodRepository::new();
        foods.expect_count().returning(|| Box::pin(async { Ok(12) }));
        foods.expect_create_batch().never();

        let inserted = service(foods)
            .seed_catalog(vec![new_food("A1", "Lemon rice")])
            .await
            .unwrap();
        assert_eq!(inserted, 0);
    }
}
