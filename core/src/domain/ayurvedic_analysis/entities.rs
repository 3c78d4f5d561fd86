use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    ayurvedic_analysis::value_objects::{
        AnalysisContext, Constitution, ImprovementContext, Season,
    },
    food::entities::{Dosha, DoshaEffect},
};

pub const NEUTRAL_SCORE: u8 = 50;
pub const MAX_SCORE: u8 = 100;

/// Structured Ayurvedic assessment of one food. Every list defaults to empty
/// and the score is always within 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub dosha_analysis: DoshaAnalysis,
    pub nutritional_assessment: NutritionalAssessment,
    pub ayurvedic_properties: AyurvedicInsight,
    pub seasonal_guidance: SeasonalGuidance,
    pub food_interactions: FoodInteractions,
    pub personalized_recommendations: PersonalizedRecommendations,
    pub improvement_suggestions: Vec<ImprovementSuggestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DoshaBalance {
    Balancing,
    Aggravating,
    #[default]
    Neutral,
}

impl DoshaBalance {
    /// Lenient reading of model text such as "Balancing", "aggravating/increases".
    pub fn from_model_text(text: &str) -> Self {
        let text = text.trim().to_ascii_lowercase();
        if text.starts_with("balanc") || text.starts_with("decreas") || text.starts_with("pacif") {
            DoshaBalance::Balancing
        } else if text.starts_with("aggravat") || text.starts_with("increas") {
            DoshaBalance::Aggravating
        } else {
            DoshaBalance::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DoshaBalance::Balancing => "balancing",
            DoshaBalance::Aggravating => "aggravating",
            DoshaBalance::Neutral => "neutral",
        }
    }
}

impl From<DoshaEffect> for DoshaBalance {
    fn from(effect: DoshaEffect) -> Self {
        match effect {
            DoshaEffect::Increases => DoshaBalance::Aggravating,
            DoshaEffect::Decreases => DoshaBalance::Balancing,
            DoshaEffect::Neutral => DoshaBalance::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct DoshaAnalysis {
    pub vata_effect: DoshaBalance,
    pub pitta_effect: DoshaBalance,
    pub kapha_effect: DoshaBalance,
    pub explanation: String,
}

impl DoshaAnalysis {
    pub fn effect(&self, dosha: Dosha) -> DoshaBalance {
        match dosha {
            Dosha::Vata => self.vata_effect,
            Dosha::Pitta => self.pitta_effect,
            Dosha::Kapha => self.kapha_effect,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutritionalAssessment {
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub analysis: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct AyurvedicInsight {
    pub rasa: Vec<String>,
    pub virya: String,
    pub vipaka: String,
    pub prabhava: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct SeasonalGuidance {
    pub best_seasons: Vec<String>,
    pub seasonal_modifications: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct FoodInteractions {
    pub beneficial_combinations: Vec<String>,
    pub avoid_combinations: Vec<String>,
    pub timing_recommendations: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct PersonalizedRecommendations {
    pub for_vata_constitution: String,
    pub for_pitta_constitution: String,
    pub for_kapha_constitution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ImprovementSuggestion {
    pub issue: String,
    pub solution: String,
    pub foods_to_add: Vec<String>,
    pub herbs_spices: Vec<String>,
    pub preparation_method: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    UpstreamUnavailable,
    TimedOut,
    UnparseableResponse,
}

/// Where an analysis came from. The fallback variant is a normal, usable
/// result computed from catalog data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Parsed {
        analysis: AnalysisResult,
    },
    Fallback {
        reason: FallbackReason,
        analysis: AnalysisResult,
    },
}

impl AnalysisOutcome {
    pub fn analysis(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Parsed { analysis } => analysis,
            AnalysisOutcome::Fallback { analysis, .. } => analysis,
        }
    }

    pub fn into_analysis(self) -> AnalysisResult {
        match self {
            AnalysisOutcome::Parsed { analysis } => analysis,
            AnalysisOutcome::Fallback { analysis, .. } => analysis,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisOutcome::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            AnalysisOutcome::Parsed { .. } => None,
            AnalysisOutcome::Fallback { reason, .. } => Some(*reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodAnalysis {
    pub food_id: Uuid,
    pub food_name: String,
    pub context: AnalysisContext,
    pub result: AnalysisOutcome,
}

/// One slot of a batch analysis, in the same position as its input id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchAnalysisEntry {
    Analyzed(FoodAnalysis),
    NotFound { food_id: Uuid },
    Rejected { food_id: Uuid, reason: String },
}

impl BatchAnalysisEntry {
    pub fn food_id(&self) -> Uuid {
        match self {
            BatchAnalysisEntry::Analyzed(analysis) => analysis.food_id,
            BatchAnalysisEntry::NotFound { food_id } => *food_id,
            BatchAnalysisEntry::Rejected { food_id, .. } => *food_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietPlanAnalysis {
    pub plan_id: Uuid,
    pub plan_name: String,
    pub client_id: Uuid,
    pub context: AnalysisContext,
    pub foods: Vec<BatchAnalysisEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Parsed,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImprovementSuggestions {
    pub context: ImprovementContext,
    pub source: ResultSource,
    pub fallback_reason: Option<FallbackReason>,
    pub suggestions: Vec<ImprovementSuggestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OverallRecommendation {
    Suitable,
    Modify,
    Avoid,
}

impl OverallRecommendation {
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            OverallRecommendation::Suitable
        } else if score > 50 {
            OverallRecommendation::Modify
        } else {
            OverallRecommendation::Avoid
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeasonalRecommendation {
    pub food_id: Uuid,
    pub food_name: String,
    pub target_season: Season,
    pub constitution: Option<Constitution>,
    pub seasonal_guidance: SeasonalGuidance,
    pub constitution_advice: PersonalizedRecommendations,
    pub overall_recommendation: OverallRecommendation,
    pub source: ResultSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dosha_balance_from_model_text() {
        assert_eq!(DoshaBalance::from_model_text("Balancing"), DoshaBalance::Balancing);
        assert_eq!(
            DoshaBalance::from_model_text(" aggravating/increases "),
            DoshaBalance::Aggravating
        );
        assert_eq!(DoshaBalance::from_model_text("decreases"), DoshaBalance::Balancing);
        assert_eq!(DoshaBalance::from_model_text("mildly warming"), DoshaBalance::Neutral);
        assert_eq!(DoshaBalance::from_model_text(""), DoshaBalance::Neutral);
    }

    #[test]
    fn test_overall_recommendation_thresholds() {
        assert_eq!(OverallRecommendation::from_score(71), OverallRecommendation::Suitable);
        assert_eq!(OverallRecommendation::from_score(70), OverallRecommendation::Modify);
        assert_eq!(OverallRecommendation::from_score(51), OverallRecommendation::Modify);
        assert_eq!(OverallRecommendation::from_score(50), OverallRecommendation::Avoid);
    }

    #[test]
    fn test_outcome_serializes_source_tag() {
        let outcome = AnalysisOutcome::Fallback {
            reason: FallbackReason::TimedOut,
            analysis: AnalysisResult {
                overall_score: NEUTRAL_SCORE,
                dosha_analysis: DoshaAnalysis::default(),
                nutritional_assessment: NutritionalAssessment::default(),
                ayurvedic_properties: AyurvedicInsight::default(),
                seasonal_guidance: SeasonalGuidance::default(),
                food_interactions: FoodInteractions::default(),
                personalized_recommendations: PersonalizedRecommendations::default(),
                improvement_suggestions: Vec::new(),
            },
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["reason"], "timed_out");
        assert_eq!(json["analysis"]["overall_score"], 50);
        assert!(json["analysis"]["improvement_suggestions"].as_array().unwrap().is_empty());
    }
}
