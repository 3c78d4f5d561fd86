use std::collections::HashMap;

use futures::future::join_all;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    ayurvedic_analysis::{
        entities::{
            AnalysisOutcome, BatchAnalysisEntry, DietPlanAnalysis, FallbackReason, FoodAnalysis,
            ImprovementSuggestions, OverallRecommendation, ResultSource, SeasonalRecommendation,
        },
        fallback::{build_fallback_analysis, fallback_improvements},
        interpreter::{interpret_analysis, parse_improvement_suggestions},
        ports::{AyurvedicAnalysisService, LLMClient},
        prompt::{SYSTEM_INSTRUCTION, build_food_analysis_prompt, build_improvement_prompt},
        schema::{get_analysis_schema, get_improvement_schema},
        value_objects::{
            AnalysisContext, AnalyzeDietPlanInput, AnalyzeFoodsInput, ImprovementContext,
            ImprovementRequest, MAX_BATCH_SIZE, SeasonalRecommendationInput,
        },
    },
    client::ports::ClientRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    food::{entities::FoodRecord, ports::FoodRepository},
    health::ports::HealthCheckRepository,
};

impl From<&AnalysisOutcome> for ResultSource {
    fn from(outcome: &AnalysisOutcome) -> Self {
        match outcome {
            AnalysisOutcome::Parsed { .. } => ResultSource::Parsed,
            AnalysisOutcome::Fallback { .. } => ResultSource::Fallback,
        }
    }
}

impl<F, C, D, LLM, HC> Service<F, C, D, LLM, HC>
where
    F: FoodRepository,
    C: ClientRepository,
    D: DietPlanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn load_food(&self, food_id: Uuid) -> Result<FoodRecord, CoreError> {
        self.food_repository
            .get_by_id(food_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    /// Single attempt, bounded by the configured timeout. Every failure is
    /// reported as the fallback reason it maps to.
    async fn call_model(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, FallbackReason> {
        let call = self.llm_client.generate_with_text(
            SYSTEM_INSTRUCTION.to_string(),
            prompt,
            response_schema,
        );

        match tokio::time::timeout(self.llm_timeout, call).await {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(e)) => {
                tracing::warn!("model call failed: {}", e);
                Err(FallbackReason::UpstreamUnavailable)
            }
            Err(_) => {
                tracing::warn!(timeout = ?self.llm_timeout, "model call timed out");
                Err(FallbackReason::TimedOut)
            }
        }
    }

    async fn run_analysis(
        &self,
        food: &FoodRecord,
        context: &AnalysisContext,
    ) -> Result<AnalysisOutcome, CoreError> {
        let prompt = build_food_analysis_prompt(food, context)?;

        let outcome = match self.call_model(prompt, get_analysis_schema()).await {
            Ok(reply) => interpret_analysis(&reply, food, context),
            Err(reason) => {
                tracing::warn!(food_id = %food.id, reason = ?reason, "using fallback analysis");
                AnalysisOutcome::Fallback {
                    reason,
                    analysis: build_fallback_analysis(food, context),
                }
            }
        };

        Ok(outcome)
    }

    async fn analyze_entry(
        &self,
        food_id: Uuid,
        food: Option<&FoodRecord>,
        context: AnalysisContext,
    ) -> Result<BatchAnalysisEntry, CoreError> {
        let Some(food) = food else {
            return Ok(BatchAnalysisEntry::NotFound { food_id });
        };

        match self.run_analysis(food, &context).await {
            Ok(result) => Ok(BatchAnalysisEntry::Analyzed(FoodAnalysis {
                food_id,
                food_name: food.food_name.clone(),
                context,
                result,
            })),
            Err(CoreError::InvalidInput(reason)) => {
                Ok(BatchAnalysisEntry::Rejected { food_id, reason })
            }
            Err(e) => Err(e),
        }
    }

    /// Results keep the order of `food_ids`; missing or invalid foods get
    /// their own entry instead of failing the batch.
    async fn analyze_batch(
        &self,
        food_ids: &[Uuid],
        context: AnalysisContext,
    ) -> Result<Vec<BatchAnalysisEntry>, CoreError> {
        let foods: HashMap<Uuid, FoodRecord> = self
            .food_repository
            .get_by_ids(food_ids.to_vec())
            .await?
            .into_iter()
            .map(|food| (food.id, food))
            .collect();

        let entries = join_all(
            food_ids
                .iter()
                .map(|food_id| self.analyze_entry(*food_id, foods.get(food_id), context)),
        )
        .await;

        entries.into_iter().collect()
    }
}

impl<F, C, D, LLM, HC> AyurvedicAnalysisService for Service<F, C, D, LLM, HC>
where
    F: FoodRepository,
    C: ClientRepository,
    D: DietPlanRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn analyze_food(
        &self,
        food_id: Uuid,
        context: AnalysisContext,
    ) -> Result<FoodAnalysis, CoreError> {
        let food = self.load_food(food_id).await?;
        let result = self.run_analysis(&food, &context).await?;

        tracing::info!(
            food_id = %food.id,
            fallback = result.is_fallback(),
            score = result.analysis().overall_score,
            "Food analysed"
        );

        Ok(FoodAnalysis {
            food_id: food.id,
            food_name: food.food_name,
            context,
            result,
        })
    }

    #[instrument(skip(self), fields(count = input.food_ids.len()))]
    async fn analyze_foods(
        &self,
        input: AnalyzeFoodsInput,
    ) -> Result<Vec<BatchAnalysisEntry>, CoreError> {
        if input.food_ids.is_empty() {
            return Err(CoreError::InvalidInput(
                "food_ids must not be empty".to_string(),
            ));
        }
        if input.food_ids.len() > MAX_BATCH_SIZE {
            return Err(CoreError::InvalidInput(format!(
                "at most {MAX_BATCH_SIZE} foods can be analysed at once"
            )));
        }

        self.analyze_batch(&input.food_ids, input.context).await
    }

    #[instrument(skip(self), fields(practitioner_id = %identity.id()))]
    async fn analyze_diet_plan(
        &self,
        identity: Identity,
        input: AnalyzeDietPlanInput,
    ) -> Result<DietPlanAnalysis, CoreError> {
        let plan = self
            .diet_plan_repository
            .get_by_id(input.plan_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        let client = self
            .client_repository
            .get_by_id(plan.client_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        let constitution = input.constitution.unwrap_or_else(|| client.constitution());

        let context = AnalysisContext::new(Some(constitution), input.season);
        let foods = self.analyze_batch(&plan.food_ids(), context).await?;

        Ok(DietPlanAnalysis {
            plan_id: plan.id,
            plan_name: plan.plan_name,
            client_id: plan.client_id,
            context,
            foods,
        })
    }

    #[instrument(skip(self), fields(practitioner_id = %identity.id()))]
    async fn improvement_suggestions(
        &self,
        identity: Identity,
        input: ImprovementRequest,
    ) -> Result<ImprovementSuggestions, CoreError> {
        if input.problematic_foods.is_empty() {
            return Err(CoreError::InvalidInput(
                "problematic_foods must not be empty".to_string(),
            ));
        }

        let mut context = ImprovementContext {
            constitution: input.constitution,
            season: input.season,
            ..Default::default()
        };

        if let Some(client_id) = input.client_id {
            let client = self
                .client_repository
                .get_by_id(client_id, identity.id())
                .await?
                .ok_or(CoreError::NotFound)?;

            context.constitution = context.constitution.or(Some(client.constitution()));
            context.health_goals = client.health_goals;
            context.dietary_restrictions = client.dietary_restrictions;
        }

        let ids = input.problematic_foods.iter().map(|p| p.food_id).collect();
        let records: HashMap<Uuid, FoodRecord> = self
            .food_repository
            .get_by_ids(ids)
            .await?
            .into_iter()
            .map(|food| (food.id, food))
            .collect();

        let mut foods = Vec::with_capacity(input.problematic_foods.len());
        for problem in input.problematic_foods {
            let food = match records.get(&problem.food_id) {
                Some(food) => food.clone(),
                None => return Err(CoreError::NotFound),
            };
            foods.push((food, problem));
        }

        let prompt = build_improvement_prompt(&foods, &context)?;

        let reply = self.call_model(prompt, get_improvement_schema()).await;
        let parsed = reply.and_then(|text| {
            parse_improvement_suggestions(&text).map_err(|e| {
                tracing::warn!("falling back on improvement reply: {}", e);
                FallbackReason::UnparseableResponse
            })
        });

        let result = match parsed {
            Ok(suggestions) => ImprovementSuggestions {
                context,
                source: ResultSource::Parsed,
                fallback_reason: None,
                suggestions,
            },
            Err(reason) => {
                let suggestions = foods
                    .iter()
                    .flat_map(|(food, problem)| {
                        fallback_improvements(
                            food,
                            problem.issue.as_deref(),
                            context.constitution.as_ref(),
                        )
                    })
                    .collect();

                ImprovementSuggestions {
                    context,
                    source: ResultSource::Fallback,
                    fallback_reason: Some(reason),
                    suggestions,
                }
            }
        };

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn seasonal_recommendations(
        &self,
        input: SeasonalRecommendationInput,
    ) -> Result<SeasonalRecommendation, CoreError> {
        let food = self.load_food(input.food_id).await?;
        let context = AnalysisContext::new(input.constitution, Some(input.target_season));

        let outcome = self.run_analysis(&food, &context).await?;
        let source = ResultSource::from(&outcome);
        let analysis = outcome.into_analysis();

        Ok(SeasonalRecommendation {
            food_id: food.id,
            food_name: food.food_name,
            target_season: input.target_season,
            constitution: input.constitution,
            overall_recommendation: OverallRecommendation::from_score(analysis.overall_score),
            seasonal_guidance: analysis.seasonal_guidance,
            constitution_advice: analysis.personalized_recommendations,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;

    use super::*;
    use crate::domain::{
        ayurvedic_analysis::{
            entities::{AnalysisResult, DoshaBalance},
            ports::MockLLMClient,
            prompt::tests::masoor_dal,
            value_objects::{Constitution, ProblematicFood, Season},
        },
        client::{entities::ClientProfile, ports::MockClientRepository},
        diet_plan::{
            entities::{DayMeals, DietPlan, MealItem},
            ports::MockDietPlanRepository,
        },
        food::{entities::Dosha, ports::MockFoodRepository},
        health::ports::MockHealthCheckRepository,
    };

    type TestService = Service<
        MockFoodRepository,
        MockClientRepository,
        MockDietPlanRepository,
        MockLLMClient,
        MockHealthCheckRepository,
    >;

    const MODEL_REPLY: &str = r#"Here you go:
```json
{
  "overall_score": 80,
  "dosha_analysis": {
    "vata_effect": "aggravating",
    "pitta_effect": "balancing",
    "kapha_effect": "neutral",
    "explanation": "Light and drying"
  },
  "seasonal_guidance": { "best_seasons": ["autumn"], "seasonal_modifications": "Add ghee in winter" }
}
```"#;

    fn food_repository(foods: Vec<FoodRecord>) -> MockFoodRepository {
        let mut repository = MockFoodRepository::new();
        let by_id = foods.clone();
        repository.expect_get_by_id().returning(move |id| {
            let found = by_id.iter().find(|f| f.id == id).cloned();
            Box::pin(async move { Ok(found) })
        });
        repository.expect_get_by_ids().returning(move |ids| {
            let found: Vec<FoodRecord> = foods
                .iter()
                .filter(|f| ids.contains(&f.id))
                .cloned()
                .collect();
            Box::pin(async move { Ok(found) })
        });
        repository
    }

    fn llm_replying(reply: &'static str) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(move |_, _, _| Box::pin(async move { Ok(reply.to_string()) }));
        llm
    }

    fn llm_failing() -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _| {
            Box::pin(async {
                Err(CoreError::UpstreamUnavailable(
                    "503 Service Unavailable".to_string(),
                ))
            })
        });
        llm
    }

    fn service(foods: Vec<FoodRecord>, llm: MockLLMClient) -> TestService {
        service_with(foods, llm, MockClientRepository::new(), MockDietPlanRepository::new())
    }

    fn service_with(
        foods: Vec<FoodRecord>,
        llm: MockLLMClient,
        clients: MockClientRepository,
        plans: MockDietPlanRepository,
    ) -> TestService {
        Service::new(
            food_repository(foods),
            clients,
            plans,
            llm,
            MockHealthCheckRepository::new(),
            Duration::from_millis(50),
        )
    }

    fn vata_client(practitioner_id: Uuid) -> ClientProfile {
        ClientProfile {
            id: Uuid::new_v4(),
            practitioner_id,
            name: "Ravi".to_string(),
            age: Some(41),
            gender: Some("male".to_string()),
            primary_dosha: Dosha::Vata,
            secondary_dosha: None,
            health_goals: vec!["weight gain".to_string()],
            dietary_restrictions: vec!["no onion".to_string()],
            medical_conditions: vec![],
            created_at: Utc::now(),
        }
    }

    fn assert_complete(analysis: &AnalysisResult) {
        assert!(analysis.overall_score <= 100);
        let json = serde_json::to_value(analysis).unwrap();
        for list in [
            &json["nutritional_assessment"]["strengths"],
            &json["nutritional_assessment"]["concerns"],
            &json["seasonal_guidance"]["best_seasons"],
            &json["food_interactions"]["beneficial_combinations"],
            &json["food_interactions"]["avoid_combinations"],
            &json["improvement_suggestions"],
        ] {
            assert!(list.is_array());
        }
    }

    #[tokio::test]
    async fn test_analyze_food_parses_model_reply() {
        let dal = masoor_dal();
        let service = service(vec![dal.clone()], llm_replying(MODEL_REPLY));

        let analysis = service
            .analyze_food(dal.id, AnalysisContext::default())
            .await
            .unwrap();

        assert_eq!(analysis.food_name, "Masoor Dal");
        assert!(!analysis.result.is_fallback());
        let result = analysis.result.analysis();
        assert_eq!(result.overall_score, 80);
        assert_eq!(result.dosha_analysis.pitta_effect, DoshaBalance::Balancing);
        assert_eq!(result.seasonal_guidance.best_seasons, vec!["autumn"]);
        assert!(result.food_interactions.avoid_combinations.is_empty());
        assert_complete(result);
    }

    #[tokio::test]
    async fn test_prose_reply_uses_fallback() {
        let dal = masoor_dal();
        let service = service(
            vec![dal.clone()],
            llm_replying("Masoor dal is nourishing and easy to digest."),
        );

        let analysis = service
            .analyze_food(dal.id, AnalysisContext::default())
            .await
            .unwrap();

        assert_eq!(
            analysis.result.fallback_reason(),
            Some(FallbackReason::UnparseableResponse)
        );
        let result = analysis.result.analysis();
        assert_eq!(result.dosha_analysis.pitta_effect, DoshaBalance::Balancing);
        assert_eq!(result.dosha_analysis.vata_effect, DoshaBalance::Aggravating);
        assert_eq!(result.overall_score, 50);
        assert_complete(result);
    }

    #[tokio::test]
    async fn test_gateway_error_uses_same_fallback() {
        let dal = masoor_dal();
        let context = AnalysisContext::new(None, Some(Season::Autumn));

        let failed = service(vec![dal.clone()], llm_failing())
            .analyze_food(dal.id, context)
            .await
            .unwrap();
        let unparsed = service(vec![dal.clone()], llm_replying("no idea"))
            .analyze_food(dal.id, context)
            .await
            .unwrap();

        assert_eq!(
            failed.result.fallback_reason(),
            Some(FallbackReason::UpstreamUnavailable)
        );
        assert_eq!(failed.result.analysis(), unparsed.result.analysis());
        assert_eq!(failed.result.analysis().overall_score, 55);
    }

    #[tokio::test]
    async fn test_slow_model_times_out() {
        let dal = masoor_dal();
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok("{}".to_string())
            })
        });

        let analysis = service(vec![dal.clone()], llm)
            .analyze_food(dal.id, AnalysisContext::default())
            .await
            .unwrap();

        assert_eq!(analysis.result.fallback_reason(), Some(FallbackReason::TimedOut));
    }

    #[tokio::test]
    async fn test_unknown_food_is_not_found() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();

        let err = service(vec![masoor_dal()], llm)
            .analyze_food(Uuid::new_v4(), AnalysisContext::default())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_batch_isolates_missing_and_invalid_foods() {
        let dal = masoor_dal();
        let mut broken = masoor_dal();
        broken.id = Uuid::new_v4();
        broken.ayurvedic_properties.primary_rasa.clear();
        let missing = Uuid::new_v4();

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(MODEL_REPLY.to_string()) }));

        let entries = service(vec![dal.clone(), broken.clone()], llm)
            .analyze_foods(AnalyzeFoodsInput {
                food_ids: vec![dal.id, missing, broken.id],
                context: AnalysisContext::default(),
            })
            .await
            .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries.iter().map(BatchAnalysisEntry::food_id).collect::<Vec<_>>(),
            vec![dal.id, missing, broken.id]
        );
        assert!(matches!(&entries[0], BatchAnalysisEntry::Analyzed(a) if !a.result.is_fallback()));
        assert_eq!(entries[1], BatchAnalysisEntry::NotFound { food_id: missing });
        assert!(matches!(&entries[2], BatchAnalysisEntry::Rejected { reason, .. } if reason.contains("rasa")));
    }

    #[tokio::test]
    async fn test_batch_requires_food_ids() {
        let err = service(vec![], MockLLMClient::new())
            .analyze_foods(AnalyzeFoodsInput {
                food_ids: vec![],
                context: AnalysisContext::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_batch_rejects_more_than_max_foods() {
        let err = service(vec![], MockLLMClient::new())
            .analyze_foods(AnalyzeFoodsInput {
                food_ids: (0..=MAX_BATCH_SIZE).map(|_| Uuid::new_v4()).collect(),
                context: AnalysisContext::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_diet_plan_defaults_to_client_constitution() {
        let identity = Identity::new(Uuid::new_v4(), None);
        let dal = masoor_dal();
        let client = vata_client(identity.id());
        let plan = DietPlan {
            id: Uuid::new_v4(),
            client_id: client.id,
            practitioner_id: identity.id(),
            plan_name: "Autumn reset".to_string(),
            duration_days: 1,
            meals: vec![DayMeals {
                day: 1,
                lunch: Some(MealItem {
                    food_id: dal.id,
                    name: dal.food_name.clone(),
                    serving_size: None,
                }),
                ..Default::default()
            }],
            created_at: Utc::now(),
        };

        let mut plans = MockDietPlanRepository::new();
        let stored = plan.clone();
        plans.expect_get_by_id().returning(move |plan_id, practitioner_id| {
            let found = (plan_id == stored.id && practitioner_id == stored.practitioner_id)
                .then(|| stored.clone());
            Box::pin(async move { Ok(found) })
        });
        let mut clients = MockClientRepository::new();
        clients.expect_get_by_id().returning(move |_, _| {
            let client = client.clone();
            Box::pin(async move { Ok(Some(client)) })
        });

        let service = service_with(vec![dal.clone()], llm_failing(), clients, plans);
        let analysis = service
            .analyze_diet_plan(
                identity.clone(),
                AnalyzeDietPlanInput {
                    plan_id: plan.id,
                    constitution: None,
                    season: Some(Season::Winter),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            analysis.context.constitution,
            Some(Constitution::single(Dosha::Vata))
        );
        assert_eq!(analysis.foods.len(), 1);
        let BatchAnalysisEntry::Analyzed(food) = &analysis.foods[0] else {
            panic!("expected analysed food");
        };
        assert_eq!(food.result.analysis().overall_score, 35);

        let err = service
            .analyze_diet_plan(
                Identity::new(Uuid::new_v4(), None),
                AnalyzeDietPlanInput {
                    plan_id: plan.id,
                    constitution: None,
                    season: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_diet_plan_with_unknown_client_is_not_found() {
        let identity = Identity::new(Uuid::new_v4(), None);
        let dal = masoor_dal();
        let plan = DietPlan {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            practitioner_id: identity.id(),
            plan_name: "Orphaned plan".to_string(),
            duration_days: 1,
            meals: vec![DayMeals {
                day: 1,
                dinner: Some(MealItem {
                    food_id: dal.id,
                    name: dal.food_name.clone(),
                    serving_size: None,
                }),
                ..Default::default()
            }],
            created_at: Utc::now(),
        };

        let mut plans = MockDietPlanRepository::new();
        let stored = plan.clone();
        plans.expect_get_by_id().returning(move |_, _| {
            let stored = stored.clone();
            Box::pin(async move { Ok(Some(stored)) })
        });
        let mut clients = MockClientRepository::new();
        clients
            .expect_get_by_id()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let service = service_with(vec![dal], MockLLMClient::new(), clients, plans);

        for constitution in [None, Some(Constitution::single(Dosha::Pitta))] {
            let err = service
                .analyze_diet_plan(
                    identity.clone(),
                    AnalyzeDietPlanInput {
                        plan_id: plan.id,
                        constitution,
                        season: None,
                    },
                )
                .await
                .unwrap_err();
            assert_eq!(err, CoreError::NotFound);
        }
    }

    #[tokio::test]
    async fn test_improvement_suggestions_fall_back_per_food() {
        let identity = Identity::new(Uuid::new_v4(), None);
        let dal = masoor_dal();
        let client = vata_client(identity.id());
        let client_id = client.id;

        let mut clients = MockClientRepository::new();
        clients.expect_get_by_id().returning(move |id, _| {
            let found = (id == client.id).then(|| client.clone());
            Box::pin(async move { Ok(found) })
        });

        let service = service_with(
            vec![dal.clone()],
            llm_replying("Try adding more ghee."),
            clients,
            MockDietPlanRepository::new(),
        );
        let request = |client_id| ImprovementRequest {
            problematic_foods: vec![ProblematicFood {
                food_id: dal.id,
                issue: Some("bloating".to_string()),
            }],
            client_id,
            constitution: None,
            season: Some(Season::Winter),
        };

        let result = service
            .improvement_suggestions(identity.clone(), request(Some(client_id)))
            .await
            .unwrap();

        assert_eq!(result.source, ResultSource::Fallback);
        assert_eq!(result.fallback_reason, Some(FallbackReason::UnparseableResponse));
        assert_eq!(result.context.health_goals, vec!["weight gain"]);
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.suggestions[0].issue.contains("vata"));

        let err = service
            .improvement_suggestions(identity, request(Some(Uuid::new_v4())))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_improvement_suggestions_from_model() {
        let dal = masoor_dal();
        let service = service(
            vec![dal.clone()],
            llm_replying(
                r#"{"improvement_suggestions": [{"issue": "Dry", "solution": "Add ghee", "foods_to_add": ["ghee"]}]}"#,
            ),
        );

        let result = service
            .improvement_suggestions(
                Identity::new(Uuid::new_v4(), None),
                ImprovementRequest {
                    problematic_foods: vec![ProblematicFood {
                        food_id: dal.id,
                        issue: None,
                    }],
                    client_id: None,
                    constitution: None,
                    season: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(result.source, ResultSource::Parsed);
        assert_eq!(result.suggestions[0].solution, "Add ghee");

        let err = service
            .improvement_suggestions(
                Identity::new(Uuid::new_v4(), None),
                ImprovementRequest {
                    problematic_foods: vec![ProblematicFood {
                        food_id: Uuid::new_v4(),
                        issue: None,
                    }],
                    client_id: None,
                    constitution: None,
                    season: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_seasonal_recommendation() {
        let dal = masoor_dal();

        let parsed = service(vec![dal.clone()], llm_replying(MODEL_REPLY))
            .seasonal_recommendations(SeasonalRecommendationInput {
                food_id: dal.id,
                target_season: Season::Autumn,
                constitution: None,
            })
            .await
            .unwrap();
        assert_eq!(parsed.overall_recommendation, OverallRecommendation::Suitable);
        assert_eq!(parsed.source, ResultSource::Parsed);
        assert_eq!(parsed.seasonal_guidance.seasonal_modifications, "Add ghee in winter");

        let fallback = service(vec![dal.clone()], llm_failing())
            .seasonal_recommendations(SeasonalRecommendationInput {
                food_id: dal.id,
                target_season: Season::Winter,
                constitution: Some(Constitution::single(Dosha::Vata)),
            })
            .await
            .unwrap();
        assert_eq!(fallback.overall_recommendation, OverallRecommendation::Avoid);
        assert_eq!(fallback.source, ResultSource::Fallback);
        assert!(fallback.constitution_advice.for_vata_constitution.contains("aggravate"));
    }
}
