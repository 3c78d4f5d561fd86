use std::fmt::Write as _;

use crate::domain::{
    ayurvedic_analysis::value_objects::{AnalysisContext, ImprovementContext, ProblematicFood},
    common::entities::app_errors::CoreError,
    food::entities::{FoodRecord, NutritionFacts},
};

pub const SYSTEM_INSTRUCTION: &str = "You are an Ayurvedic practitioner and clinical \
nutritionist. You assess Indian foods by their effect on Vata, Pitta and Kapha, their \
seasonal suitability, compatible and incompatible combinations (viruddha ahara) and \
their therapeutic properties. Ground every statement in classical Ayurvedic principles \
and modern nutrition science, account for digestive fire (agni), and answer with a \
single JSON object only.";

const ANALYSIS_FIELDS: &str = "\
- overall_score: integer from 0 to 100
- dosha_analysis: { vata_effect, pitta_effect, kapha_effect, explanation }, each effect one of \"balancing\", \"aggravating\", \"neutral\"
- nutritional_assessment: { strengths: [string], concerns: [string], analysis: string }
- ayurvedic_properties: { rasa: [string], virya: string, vipaka: string, prabhava: string }
- seasonal_guidance: { best_seasons: [string], seasonal_modifications: string }
- food_interactions: { beneficial_combinations: [string], avoid_combinations: [string], timing_recommendations: string }
- personalized_recommendations: { for_vata_constitution, for_pitta_constitution, for_kapha_constitution }
- improvement_suggestions: [{ issue, solution, foods_to_add: [string], herbs_spices: [string], preparation_method }]";

const SUGGESTION_FIELDS: &str = "\
{ \"improvement_suggestions\": [{ issue, solution, foods_to_add: [string], herbs_spices: [string], preparation_method }] }";

fn write_nutrition(out: &mut String, nutrition: &NutritionFacts) {
    let _ = writeln!(
        out,
        "- Nutrition per 100 g: energy {} kcal, protein {} g, fat {} g, carbohydrate {} g, \
         fiber {} g, calcium {} mg, iron {} mg, vitamin C {} mg",
        nutrition.energy_kcal,
        nutrition.protein_g,
        nutrition.fat_g,
        nutrition.carb_g,
        nutrition.fiber_g,
        nutrition.calcium_mg,
        nutrition.iron_mg,
        nutrition.vitamin_c_mg,
    );
}

fn write_food(out: &mut String, food: &FoodRecord) {
    let properties = &food.ayurvedic_properties;
    let rasa: Vec<&str> = properties.primary_rasa.iter().map(|r| r.as_str()).collect();

    let _ = writeln!(out, "- Name: {}", food.food_name);
    if let Some(local) = &food.food_name_local {
        let _ = writeln!(out, "- Local name: {local}");
    }
    let _ = writeln!(out, "- Category: {}", food.category);
    write_nutrition(out, &food.nutrition_per_100g);
    let _ = writeln!(out, "- Recorded rasa: {}", rasa.join(", "));
    let _ = writeln!(out, "- Recorded virya: {}", properties.virya.as_str());
    let _ = writeln!(
        out,
        "- Recorded dosha effects: vata {}, pitta {}, kapha {}",
        properties.dosha_effects.vata.as_str(),
        properties.dosha_effects.pitta.as_str(),
        properties.dosha_effects.kapha.as_str(),
    );
    if !food.ingredients.is_empty() {
        let names: Vec<&str> = food.ingredients.iter().map(|i| i.name.as_str()).collect();
        let _ = writeln!(out, "- Ingredients: {}", names.join(", "));
    }
}

/// Builds the user prompt for a single-food analysis. The record must pass
/// `FoodRecord::validate`.
pub fn build_food_analysis_prompt(
    food: &FoodRecord,
    context: &AnalysisContext,
) -> Result<String, CoreError> {
    food.validate()?;

    let mut prompt = String::from("Analyze this Indian food item from an Ayurvedic and nutritional perspective.\n\nFood details:\n");
    write_food(&mut prompt, food);

    prompt.push_str("\nPerson context:\n");
    match (&context.constitution, &context.season) {
        (None, None) => prompt.push_str(
            "- No constitution or season given. Give general guidance for all three constitutions and all seasons.\n",
        ),
        (constitution, season) => {
            match constitution {
                Some(c) => {
                    let _ = writeln!(prompt, "- Constitution: {c}");
                }
                None => prompt.push_str("- Constitution: not given, advise for all three\n"),
            }
            match season {
                Some(s) => {
                    let _ = writeln!(prompt, "- Current season: {s}");
                }
                None => prompt.push_str("- Season: not given, advise for all seasons\n"),
            }
        }
    }

    prompt.push_str("\nRespond with one JSON object containing exactly these fields:\n");
    prompt.push_str(ANALYSIS_FIELDS);
    prompt.push('\n');

    Ok(prompt)
}

/// Builds the prompt asking for fixes to foods that do not suit the person.
pub fn build_improvement_prompt(
    foods: &[(FoodRecord, ProblematicFood)],
    context: &ImprovementContext,
) -> Result<String, CoreError> {
    if foods.is_empty() {
        return Err(CoreError::InvalidInput(
            "at least one problematic food is required".to_string(),
        ));
    }

    let mut prompt = String::from(
        "Suggest Ayurvedic improvements for these problematic foods in a client's diet.\n\nPerson context:\n",
    );
    match &context.constitution {
        Some(c) => {
            let _ = writeln!(prompt, "- Constitution: {c}");
        }
        None => prompt.push_str("- Constitution: not given\n"),
    }
    if let Some(season) = &context.season {
        let _ = writeln!(prompt, "- Current season: {season}");
    }
    if !context.health_goals.is_empty() {
        let _ = writeln!(prompt, "- Health goals: {}", context.health_goals.join(", "));
    }
    if !context.dietary_restrictions.is_empty() {
        let _ = writeln!(
            prompt,
            "- Dietary restrictions: {}",
            context.dietary_restrictions.join(", ")
        );
    }

    prompt.push_str("\nProblematic foods:\n");
    for (food, problem) in foods {
        food.validate()?;
        let issue = problem.issue.as_deref().unwrap_or("general concern");
        let rasa: Vec<&str> = food
            .ayurvedic_properties
            .primary_rasa
            .iter()
            .map(|r| r.as_str())
            .collect();
        let _ = writeln!(
            prompt,
            "- {} ({}; rasa {}; virya {}): {}",
            food.food_name,
            food.category,
            rasa.join(", "),
            food.ayurvedic_properties.virya.as_str(),
            issue
        );
    }

    prompt.push_str(
        "\nFor each food explain why it is problematic, how to change its preparation, \
         alternatives, herbs or spices that aid digestion, and the best time to eat it.\n\
         Respond with one JSON object of this shape:\n",
    );
    prompt.push_str(SUGGESTION_FIELDS);
    prompt.push('\n');

    Ok(prompt)
}
