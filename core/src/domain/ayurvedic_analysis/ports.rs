use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    ayurvedic_analysis::{
        entities::{
            BatchAnalysisEntry, DietPlanAnalysis, FoodAnalysis, ImprovementSuggestions,
            SeasonalRecommendation,
        },
        value_objects::{
            AnalysisContext, AnalyzeDietPlanInput, AnalyzeFoodsInput, ImprovementRequest,
            SeasonalRecommendationInput,
        },
    },
    common::entities::app_errors::CoreError,
};

/// Text completion against a hosted model. Implementations return the raw
/// reply text; interpreting it is the caller's job.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        system_instruction: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AyurvedicAnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        food_id: Uuid,
        context: AnalysisContext,
    ) -> impl Future<Output = Result<FoodAnalysis, CoreError>> + Send;

    fn analyze_foods(
        &self,
        input: AnalyzeFoodsInput,
    ) -> impl Future<Output = Result<Vec<BatchAnalysisEntry>, CoreError>> + Send;

    fn analyze_diet_plan(
        &self,
        identity: Identity,
        input: AnalyzeDietPlanInput,
    ) -> impl Future<Output = Result<DietPlanAnalysis, CoreError>> + Send;

    fn improvement_suggestions(
        &self,
        identity: Identity,
        input: ImprovementRequest,
    ) -> impl Future<Output = Result<ImprovementSuggestions, CoreError>> + Send;

    fn seasonal_recommendations(
        &self,
        input: SeasonalRecommendationInput,
    ) -> impl Future<Output = Result<SeasonalRecommendation, CoreError>> + Send;
}
