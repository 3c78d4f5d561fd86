//! Turns free-form model replies into `AnalysisResult`s.
//!
//! Models wrap JSON in prose or code fences, drop fields and return numbers
//! as strings. Everything here is lenient about shape; the only hard
//! requirement for a single-food analysis is a `dosha_analysis` object.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{
    ayurvedic_analysis::{
        entities::{
            AnalysisOutcome, AnalysisResult, AyurvedicInsight, DoshaAnalysis, DoshaBalance,
            FallbackReason, FoodInteractions, ImprovementSuggestion, MAX_SCORE, NEUTRAL_SCORE,
            NutritionalAssessment, PersonalizedRecommendations, SeasonalGuidance,
        },
        fallback::build_fallback_analysis,
        value_objects::AnalysisContext,
    },
    common::entities::app_errors::CoreError,
    food::entities::FoodRecord,
};

static FENCED_BLOCK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z]*\s*(.*?)```").ok());

fn parse_candidate(candidate: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(candidate.trim()) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
        _ => None,
    }
}

fn slice_between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (start < end).then(|| &text[start..=end])
}

/// Finds the first JSON object or array in `text`: the whole text, then
/// fenced code blocks, then the widest `{...}` or `[...]` slice.
pub fn extract_json(text: &str) -> Option<Value> {
    if let Some(value) = parse_candidate(text) {
        return Some(value);
    }

    if let Some(fence) = FENCED_BLOCK.as_ref() {
        for captures in fence.captures_iter(text) {
            if let Some(value) = captures.get(1).and_then(|m| parse_candidate(m.as_str())) {
                return Some(value);
            }
        }
    }

    slice_between(text, '{', '}')
        .and_then(parse_candidate)
        .or_else(|| slice_between(text, '[', ']').and_then(parse_candidate))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(value_to_text)
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) if s.trim().is_empty() => Vec::new(),
        Value::String(s) => s
            .split([',', ';'])
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect(),
        _ => Vec::new(),
    };
    Ok(list)
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .into_iter()
            .map(value_to_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null | Value::Object(_) => String::new(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDoshaAnalysis {
    #[serde(deserialize_with = "lenient_text")]
    vata_effect: String,
    #[serde(deserialize_with = "lenient_text")]
    pitta_effect: String,
    #[serde(deserialize_with = "lenient_text")]
    kapha_effect: String,
    #[serde(deserialize_with = "lenient_text")]
    explanation: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawNutritionalAssessment {
    #[serde(deserialize_with = "lenient_list")]
    strengths: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    concerns: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    analysis: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAyurvedicInsight {
    #[serde(deserialize_with = "lenient_list")]
    rasa: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    virya: String,
    #[serde(deserialize_with = "lenient_text")]
    vipaka: String,
    #[serde(deserialize_with = "lenient_text")]
    prabhava: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSeasonalGuidance {
    #[serde(deserialize_with = "lenient_list")]
    best_seasons: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    seasonal_modifications: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFoodInteractions {
    #[serde(deserialize_with = "lenient_list")]
    beneficial_combinations: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    avoid_combinations: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    timing_recommendations: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPersonalizedRecommendations {
    #[serde(deserialize_with = "lenient_text")]
    for_vata_constitution: String,
    #[serde(deserialize_with = "lenient_text")]
    for_pitta_constitution: String,
    #[serde(deserialize_with = "lenient_text")]
    for_kapha_constitution: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSuggestion {
    #[serde(deserialize_with = "lenient_text")]
    issue: String,
    #[serde(deserialize_with = "lenient_text")]
    solution: String,
    #[serde(deserialize_with = "lenient_list")]
    foods_to_add: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    herbs_spices: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    preparation_method: String,
}

impl From<RawSuggestion> for ImprovementSuggestion {
    fn from(raw: RawSuggestion) -> Self {
        Self {
            issue: raw.issue,
            solution: raw.solution,
            foods_to_add: raw.foods_to_add,
            herbs_spices: raw.herbs_spices,
            preparation_method: raw.preparation_method,
        }
    }
}

/// Sub-objects of the wrong type are treated as missing rather than failing
/// the whole reply.
fn section<T: Default + for<'de> Deserialize<'de>>(object: &serde_json::Map<String, Value>, key: &str) -> T {
    object
        .get(key)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

fn parse_score(value: Option<&Value>) -> u8 {
    let score = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s
            .trim()
            .trim_end_matches('%')
            .split('/')
            .next()
            .and_then(|s| s.trim().parse::<f64>().ok()),
        _ => None,
    };

    match score {
        Some(score) if score.is_finite() => score.round().clamp(0.0, f64::from(MAX_SCORE)) as u8,
        _ => NEUTRAL_SCORE,
    }
}

fn parse_suggestions(value: Option<&Value>) -> Vec<ImprovementSuggestion> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| serde_json::from_value::<RawSuggestion>(item.clone()).ok())
        .filter(|raw| !(raw.issue.is_empty() && raw.solution.is_empty()))
        .map(ImprovementSuggestion::from)
        .collect()
}

/// Strict entry point: `UnparseableResponse` when no usable analysis is found.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, CoreError> {
    let value = extract_json(text)
        .ok_or_else(|| CoreError::UnparseableResponse("no JSON object in reply".to_string()))?;

    let Value::Object(object) = value else {
        return Err(CoreError::UnparseableResponse(
            "reply is not a JSON object".to_string(),
        ));
    };

    let dosha = match object.get("dosha_analysis") {
        Some(dosha @ Value::Object(_)) => serde_json::from_value::<RawDoshaAnalysis>(dosha.clone())
            .map_err(|e| CoreError::UnparseableResponse(format!("invalid dosha_analysis: {e}")))?,
        _ => {
            return Err(CoreError::UnparseableResponse(
                "reply has no dosha_analysis object".to_string(),
            ));
        }
    };

    let nutrition: RawNutritionalAssessment = section(&object, "nutritional_assessment");
    let insight: RawAyurvedicInsight = section(&object, "ayurvedic_properties");
    let seasonal: RawSeasonalGuidance = section(&object, "seasonal_guidance");
    let interactions: RawFoodInteractions = section(&object, "food_interactions");
    let personalized: RawPersonalizedRecommendations =
        section(&object, "personalized_recommendations");

    Ok(AnalysisResult {
        overall_score: parse_score(object.get("overall_score")),
        dosha_analysis: DoshaAnalysis {
            vata_effect: DoshaBalance::from_model_text(&dosha.vata_effect),
            pitta_effect: DoshaBalance::from_model_text(&dosha.pitta_effect),
            kapha_effect: DoshaBalance::from_model_text(&dosha.kapha_effect),
            explanation: dosha.explanation,
        },
        nutritional_assessment: NutritionalAssessment {
            strengths: nutrition.strengths,
            concerns: nutrition.concerns,
            analysis: nutrition.analysis,
        },
        ayurvedic_properties: AyurvedicInsight {
            rasa: insight.rasa,
            virya: insight.virya,
            vipaka: insight.vipaka,
            prabhava: insight.prabhava,
        },
        seasonal_guidance: SeasonalGuidance {
            best_seasons: seasonal.best_seasons,
            seasonal_modifications: seasonal.seasonal_modifications,
        },
        food_interactions: FoodInteractions {
            beneficial_combinations: interactions.beneficial_combinations,
            avoid_combinations: interactions.avoid_combinations,
            timing_recommendations: interactions.timing_recommendations,
        },
        personalized_recommendations: PersonalizedRecommendations {
            for_vata_constitution: personalized.for_vata_constitution,
            for_pitta_constitution: personalized.for_pitta_constitution,
            for_kapha_constitution: personalized.for_kapha_constitution,
        },
        improvement_suggestions: parse_suggestions(object.get("improvement_suggestions")),
    })
}

/// Never fails: an unreadable reply becomes the deterministic fallback.
pub fn interpret_analysis(
    text: &str,
    food: &FoodRecord,
    context: &AnalysisContext,
) -> AnalysisOutcome {
    match parse_analysis(text) {
        Ok(analysis) => AnalysisOutcome::Parsed { analysis },
        Err(e) => {
            tracing::warn!(food_id = %food.id, "falling back on model reply: {}", e);
            AnalysisOutcome::Fallback {
                reason: FallbackReason::UnparseableResponse,
                analysis: build_fallback_analysis(food, context),
            }
        }
    }
}

/// Accepts `{"improvement_suggestions": [...]}`, `{"suggestions": [...]}` or
/// a bare array.
pub fn parse_improvement_suggestions(text: &str) -> Result<Vec<ImprovementSuggestion>, CoreError> {
    let value = extract_json(text)
        .ok_or_else(|| CoreError::UnparseableResponse("no JSON in reply".to_string()))?;

    let list = match &value {
        Value::Array(_) => Some(&value),
        Value::Object(object) => object
            .get("improvement_suggestions")
            .or_else(|| object.get("suggestions"))
            .filter(|v| v.is_array()),
        _ => None,
    };

    match list {
        Some(list) => Ok(parse_suggestions(Some(list))),
        None => Err(CoreError::UnparseableResponse(
            "reply has no improvement_suggestions list".to_string(),
        )),
    }
}
