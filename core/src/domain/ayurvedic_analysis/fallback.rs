//! Deterministic analysis built from a food's recorded Ayurvedic tags. Used
//! whenever the model is unreachable or its reply cannot be read.

use crate::domain::{
    ayurvedic_analysis::{
        entities::{
            AnalysisResult, AyurvedicInsight, DoshaAnalysis, DoshaBalance, FoodInteractions,
            ImprovementSuggestion, MAX_SCORE, NEUTRAL_SCORE, NutritionalAssessment,
            PersonalizedRecommendations, SeasonalGuidance,
        },
        value_objects::{AnalysisContext, Constitution, Season},
    },
    food::entities::{Dosha, FoodRecord, Rasa, Virya},
};

const DOSHA_WEIGHT: i32 = 10;
const SEASON_WEIGHT: i32 = 5;

struct DoshaRemedy {
    solution: &'static str,
    foods_to_add: &'static [&'static str],
    herbs_spices: &'static [&'static str],
    preparation_method: &'static str,
    advice: &'static str,
}

fn remedy(dosha: Dosha) -> DoshaRemedy {
    match dosha {
        Dosha::Vata => DoshaRemedy {
            solution: "Serve warm and moist, cooked with ghee or sesame oil",
            foods_to_add: &["ghee", "sesame oil", "cooked root vegetables"],
            herbs_spices: &["asafoetida", "cumin", "fresh ginger"],
            preparation_method: "Soak and cook thoroughly, then temper with hing and cumin in ghee",
            advice: "prefer it warm, well cooked and with a little ghee",
        },
        Dosha::Pitta => DoshaRemedy {
            solution: "Balance the heat with cooling accompaniments and fewer sour or hot ingredients",
            foods_to_add: &["coconut", "cucumber", "fresh coriander"],
            herbs_spices: &["coriander seed", "fennel", "mint"],
            preparation_method: "Cook with minimal chili, tamarind and salt; finish with fresh coriander",
            advice: "keep chili and sour additions low and pair it with cooling sides",
        },
        Dosha::Kapha => DoshaRemedy {
            solution: "Lighten the dish and kindle digestion with pungent spices",
            foods_to_add: &["leafy greens", "barley", "millet"],
            herbs_spices: &["black pepper", "dry ginger", "turmeric"],
            preparation_method: "Prefer dry roasting or light steaming with little oil; serve warm",
            advice: "take smaller portions, cooked light with warming spices",
        },
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Classical rule: sweet and salty ripen sweet, sour stays sour, the rest
/// ripen pungent.
fn vipaka(rasa: &[Rasa]) -> &'static str {
    match rasa.first() {
        Some(Rasa::Sweet | Rasa::Salty) => "sweet",
        Some(Rasa::Sour) => "sour",
        Some(Rasa::Pungent | Rasa::Bitter | Rasa::Astringent) => "pungent",
        None => "",
    }
}

fn season_fit(virya: Virya, season: Season) -> i32 {
    match (virya, season) {
        (Virya::Heating, Season::Winter | Season::Monsoon) => SEASON_WEIGHT,
        (Virya::Heating, Season::Autumn) => -SEASON_WEIGHT,
        (Virya::Cooling, Season::Autumn) => SEASON_WEIGHT,
        (Virya::Cooling, Season::Winter | Season::Monsoon) => -SEASON_WEIGHT,
        _ => 0,
    }
}

fn best_seasons(virya: Virya) -> Vec<Season> {
    match virya {
        Virya::Heating => vec![Season::Winter, Season::Monsoon],
        Virya::Cooling => vec![Season::Autumn],
        Virya::Neutral => Season::ALL.to_vec(),
    }
}

fn seasonal_modifications(virya: Virya) -> &'static str {
    match virya {
        Virya::Heating => {
            "Heating food: favour it in cold or damp weather and pair it with cooling sides in autumn."
        }
        Virya::Cooling => {
            "Cooling food: favour it in the hot post-monsoon months and serve it warm with digestive spices in winter and monsoon."
        }
        Virya::Neutral => "Neutral potency: suitable through the year with ordinary seasonal spicing.",
    }
}

pub fn dosha_balance(food: &FoodRecord, dosha: Dosha) -> DoshaBalance {
    food.ayurvedic_properties.dosha_effects.get(dosha).into()
}

/// 50, plus or minus 10 per balanced or aggravated dosha (20 for doshas in
/// the given constitution), plus or minus 5 for the potency's fit with the
/// season. Clamped to 0..=100.
pub fn fallback_score(food: &FoodRecord, context: &AnalysisContext) -> u8 {
    let mut score = i32::from(NEUTRAL_SCORE);

    for dosha in Dosha::ALL {
        let weight = match context.constitution {
            Some(c) if c.includes(dosha) => 2 * DOSHA_WEIGHT,
            _ => DOSHA_WEIGHT,
        };
        score += match dosha_balance(food, dosha) {
            DoshaBalance::Balancing => weight,
            DoshaBalance::Aggravating => -weight,
            DoshaBalance::Neutral => 0,
        };
    }

    if let Some(season) = context.season {
        score += season_fit(food.ayurvedic_properties.virya, season);
    }

    score.clamp(0, i32::from(MAX_SCORE)) as u8
}

fn dosha_explanation(food: &FoodRecord) -> String {
    let effects: Vec<String> = Dosha::ALL
        .iter()
        .map(|dosha| format!("{} for {}", dosha_balance(food, *dosha).as_str(), dosha))
        .collect();
    format!(
        "Based on the recorded properties of {}: {}.",
        food.food_name,
        effects.join(", ")
    )
}

fn advice_for(food: &FoodRecord, dosha: Dosha) -> String {
    match dosha_balance(food, dosha) {
        DoshaBalance::Balancing => format!("Beneficial for balancing {dosha} dosha."),
        DoshaBalance::Aggravating => format!(
            "May aggravate {dosha} dosha; {}.",
            remedy(dosha).advice
        ),
        DoshaBalance::Neutral => format!("Neutral effect on {dosha} dosha."),
    }
}

/// One suggestion per aggravated dosha, limited to the constitution's doshas
/// when one is given.
pub fn fallback_suggestions(
    food: &FoodRecord,
    constitution: Option<&Constitution>,
) -> Vec<ImprovementSuggestion> {
    Dosha::ALL
        .into_iter()
        .filter(|dosha| constitution.is_none_or(|c| c.includes(*dosha)))
        .filter(|dosha| dosha_balance(food, *dosha) == DoshaBalance::Aggravating)
        .map(|dosha| {
            let remedy = remedy(dosha);
            ImprovementSuggestion {
                issue: format!("{} may aggravate {dosha} dosha", food.food_name),
                solution: remedy.solution.to_string(),
                foods_to_add: to_strings(remedy.foods_to_add),
                herbs_spices: to_strings(remedy.herbs_spices),
                preparation_method: remedy.preparation_method.to_string(),
            }
        })
        .collect()
}

/// Fallback for an explicitly problematic food: the dosha suggestions, or a
/// general one carrying the caller's note when no dosha is aggravated.
pub fn fallback_improvements(
    food: &FoodRecord,
    issue: Option<&str>,
    constitution: Option<&Constitution>,
) -> Vec<ImprovementSuggestion> {
    let mut suggestions = fallback_suggestions(food, constitution);

    if let Some(issue) = issue {
        for suggestion in &mut suggestions {
            suggestion.issue = format!("{} ({issue})", suggestion.issue);
        }
    }

    if suggestions.is_empty() {
        suggestions.push(ImprovementSuggestion {
            issue: format!("{}: {}", food.food_name, issue.unwrap_or("general concern")),
            solution: "Eat moderate, freshly cooked portions at midday when digestion is strongest"
                .to_string(),
            foods_to_add: Vec::new(),
            herbs_spices: to_strings(&["cumin", "fresh ginger"]),
            preparation_method: "Serve warm and avoid reheating leftovers".to_string(),
        });
    }

    suggestions
}

pub fn build_fallback_analysis(food: &FoodRecord, context: &AnalysisContext) -> AnalysisResult {
    let properties = &food.ayurvedic_properties;

    AnalysisResult {
        overall_score: fallback_score(food, context),
        dosha_analysis: DoshaAnalysis {
            vata_effect: dosha_balance(food, Dosha::Vata),
            pitta_effect: dosha_balance(food, Dosha::Pitta),
            kapha_effect: dosha_balance(food, Dosha::Kapha),
            explanation: dosha_explanation(food),
        },
        nutritional_assessment: NutritionalAssessment {
            strengths: Vec::new(),
            concerns: Vec::new(),
            analysis: String::new(),
        },
        ayurvedic_properties: AyurvedicInsight {
            rasa: properties
                .primary_rasa
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
            virya: properties.virya.as_str().to_string(),
            vipaka: vipaka(&properties.primary_rasa).to_string(),
            prabhava: properties.therapeutic_properties.join(", "),
        },
        seasonal_guidance: SeasonalGuidance {
            best_seasons: best_seasons(properties.virya)
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            seasonal_modifications: seasonal_modifications(properties.virya).to_string(),
        },
        food_interactions: FoodInteractions::default(),
        personalized_recommendations: PersonalizedRecommendations {
            for_vata_constitution: advice_for(food, Dosha::Vata),
            for_pitta_constitution: advice_for(food, Dosha::Pitta),
            for_kapha_constitution: advice_for(food, Dosha::Kapha),
        },
        improvement_suggestions: fallback_suggestions(food, context.constitution.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ayurvedic_analysis::prompt::tests::masoor_dal, food::entities::DoshaEffect,
    };

    #[test]
    fn test_masoor_dal_without_context() {
        let analysis = build_fallback_analysis(&masoor_dal(), &AnalysisContext::default());

        assert_eq!(analysis.dosha_analysis.pitta_effect, DoshaBalance::Balancing);
        assert_eq!(analysis.dosha_analysis.vata_effect, DoshaBalance::Aggravating);
        assert_eq!(analysis.dosha_analysis.kapha_effect, DoshaBalance::Neutral);
        assert_eq!(analysis.overall_score, 50);
        assert_eq!(analysis.ayurvedic_properties.rasa, vec!["astringent", "sweet"]);
        assert_eq!(analysis.ayurvedic_properties.vipaka, "pungent");
        assert_eq!(analysis.seasonal_guidance.best_seasons, vec!["autumn"]);
        assert_eq!(analysis.improvement_suggestions.len(), 1);
        assert!(analysis.improvement_suggestions[0].issue.contains("vata"));
        assert!(analysis.nutritional_assessment.strengths.is_empty());
    }

    #[test]
    fn test_score_weights_constitution_and_season() {
        let food = masoor_dal();

        let pitta = AnalysisContext::new(Some(Constitution::single(Dosha::Pitta)), None);
        assert_eq!(fallback_score(&food, &pitta), 60);

        let vata_winter = AnalysisContext::new(
            Some(Constitution::single(Dosha::Vata)),
            Some(Season::Winter),
        );
        assert_eq!(fallback_score(&food, &vata_winter), 35);

        let autumn = AnalysisContext::new(None, Some(Season::Autumn));
        assert_eq!(fallback_score(&food, &autumn), 55);
    }

    #[test]
    fn test_score_is_reproducible_and_clamped() {
        let mut food = masoor_dal();
        let effects = &mut food.ayurvedic_properties.dosha_effects;
        for dosha in Dosha::ALL {
            effects.set(dosha, DoshaEffect::Increases);
        }
        food.ayurvedic_properties.virya = Virya::Heating;

        let context = AnalysisContext::new(
            Some(Constitution::dual(Dosha::Pitta, Dosha::Kapha).unwrap()),
            Some(Season::Autumn),
        );
        assert_eq!(fallback_score(&food, &context), 0);
        assert_eq!(
            build_fallback_analysis(&food, &context),
            build_fallback_analysis(&food, &context)
        );
    }

    #[test]
    fn test_suggestions_limited_to_constitution() {
        let food = masoor_dal();
        let pitta = Constitution::single(Dosha::Pitta);

        assert!(fallback_suggestions(&food, Some(&pitta)).is_empty());
        assert_eq!(fallback_suggestions(&food, None).len(), 1);

        let general = fallback_improvements(&food, Some("bloating"), Some(&pitta));
        assert_eq!(general.len(), 1);
        assert_eq!(general[0].issue, "Masoor Dal: bloating");

        let vata = fallback_improvements(&food, Some("bloating"), None);
        assert!(vata[0].issue.ends_with("(bloating)"));
        assert!(vata[0].herbs_spices.contains(&"asafoetida".to_string()));
    }
}
