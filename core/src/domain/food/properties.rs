//! Keyword and macro-nutrient rules that assign Ayurvedic properties to
//! imported foods which arrive without them.

use crate::domain::food::entities::{
    AyurvedicProperties, Dosha, DoshaEffect, DoshaEffects, NutritionFacts, Rasa, Virya,
};

const SWEET_WORDS: &[&str] = &["sweet", "sugar", "jaggery", "honey", "milk", "rice", "wheat"];
const SOUR_WORDS: &[&str] = &["lemon", "lime", "tamarind", "yogurt", "buttermilk"];
const SALTY_WORDS: &[&str] = &["salt", "pickle"];
const PUNGENT_WORDS: &[&str] = &["ginger", "garlic", "onion", "chili", "pepper", "mustard"];
const BITTER_WORDS: &[&str] = &["bitter", "neem", "fenugreek", "turmeric", "spinach"];
const ASTRINGENT_WORDS: &[&str] = &["pomegranate", "cranberry", "beans", "lentil"];

const HEATING_WORDS: &[&str] = &[
    "ginger", "garlic", "onion", "chili", "pepper", "mustard", "sesame",
];
const COOLING_WORDS: &[&str] = &["cucumber", "mint", "coconut", "melon", "yogurt", "milk"];

fn mentions(name: &str, words: &[&str]) -> bool {
    words.iter().any(|w| name.contains(w))
}

pub fn derive_primary_rasa(food_name: &str, nutrition: &NutritionFacts, sodium_mg: f64) -> Vec<Rasa> {
    let name = food_name.to_lowercase();
    let mut rasa = Vec::new();

    if mentions(&name, SWEET_WORDS) || nutrition.carb_g > 50.0 {
        rasa.push(Rasa::Sweet);
    }
    if mentions(&name, SOUR_WORDS) {
        rasa.push(Rasa::Sour);
    }
    if mentions(&name, SALTY_WORDS) || sodium_mg > 500.0 {
        rasa.push(Rasa::Salty);
    }
    if mentions(&name, PUNGENT_WORDS) {
        rasa.push(Rasa::Pungent);
    }
    if mentions(&name, BITTER_WORDS) {
        rasa.push(Rasa::Bitter);
    }
    if mentions(&name, ASTRINGENT_WORDS) || nutrition.protein_g > 15.0 {
        rasa.push(Rasa::Astringent);
    }

    if rasa.is_empty() {
        rasa.push(Rasa::Sweet);
    }
    rasa
}

pub fn derive_virya(food_name: &str, nutrition: &NutritionFacts) -> Virya {
    let name = food_name.to_lowercase();

    if mentions(&name, HEATING_WORDS) {
        Virya::Heating
    } else if mentions(&name, COOLING_WORDS) {
        Virya::Cooling
    } else if nutrition.fat_g > 15.0 {
        Virya::Heating
    } else {
        Virya::Neutral
    }
}

/// Later rasas override earlier ones; virya is applied last.
pub fn derive_dosha_effects(rasa: &[Rasa], virya: Virya) -> DoshaEffects {
    use DoshaEffect::{Decreases, Increases};

    let mut effects = DoshaEffects::default();

    for r in rasa {
        match r {
            Rasa::Sweet => {
                effects.vata = Decreases;
                effects.kapha = Increases;
            }
            Rasa::Sour => {
                effects.pitta = Increases;
                effects.vata = Decreases;
            }
            Rasa::Salty => {
                effects.pitta = Increases;
                effects.kapha = Increases;
            }
            Rasa::Pungent => {
                effects.vata = Increases;
                effects.pitta = Increases;
                effects.kapha = Decreases;
            }
            Rasa::Bitter => {
                effects.vata = Increases;
                effects.pitta = Decreases;
                effects.kapha = Decreases;
            }
            Rasa::Astringent => {
                effects.vata = Increases;
                effects.kapha = Decreases;
            }
        }
    }

    match virya {
        Virya::Heating => {
            effects.pitta = Increases;
            if effects.get(Dosha::Vata) == DoshaEffect::Neutral {
                effects.vata = Decreases;
            }
        }
        Virya::Cooling => {
            effects.pitta = Decreases;
            if effects.get(Dosha::Kapha) == DoshaEffect::Neutral {
                effects.kapha = Increases;
            }
        }
        Virya::Neutral => {}
    }

    effects
}

pub fn derive_properties(
    food_name: &str,
    nutrition: &NutritionFacts,
    sodium_mg: f64,
) -> AyurvedicProperties {
    let primary_rasa = derive_primary_rasa(food_name, nutrition, sodium_mg);
    let virya = derive_virya(food_name, nutrition);
    let dosha_effects = derive_dosha_effects(&primary_rasa, virya);

    AyurvedicProperties {
        primary_rasa,
        virya,
        dosha_effects,
        therapeutic_properties: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nutrition(carb_g: f64, protein_g: f64, fat_g: f64) -> NutritionFacts {
        NutritionFacts {
            carb_g,
            protein_g,
            fat_g,
            ..Default::default()
        }
    }

    #[test]
    fn test_rasa_from_keywords_and_macros() {
        let rasa = derive_primary_rasa("Lemon rice", &nutrition(30.0, 3.0, 2.0), 0.0);
        assert_eq!(rasa, vec![Rasa::Sweet, Rasa::Sour]);

        let rasa = derive_primary_rasa("Paneer tikka", &nutrition(5.0, 18.0, 20.0), 0.0);
        assert_eq!(rasa, vec![Rasa::Astringent]);

        let rasa = derive_primary_rasa("Papad", &nutrition(10.0, 5.0, 1.0), 900.0);
        assert_eq!(rasa, vec![Rasa::Salty]);
    }

    #[test]
    fn test_rasa_defaults_to_sweet() {
        let rasa = derive_primary_rasa("Plain dish", &nutrition(10.0, 2.0, 1.0), 0.0);
        assert_eq!(rasa, vec![Rasa::Sweet]);
    }

    #[test]
    fn test_virya_rules() {
        assert_eq!(derive_virya("Ginger tea", &nutrition(5.0, 0.0, 0.0)), Virya::Heating);
        assert_eq!(derive_virya("Cucumber raita", &nutrition(5.0, 2.0, 3.0)), Virya::Cooling);
        assert_eq!(derive_virya("Fried snack", &nutrition(30.0, 5.0, 25.0)), Virya::Heating);
        assert_eq!(derive_virya("Boiled potato", &nutrition(17.0, 2.0, 0.1)), Virya::Neutral);
    }

    #[test]
    fn test_dosha_effects_for_lentils() {
        let effects = derive_dosha_effects(&[Rasa::Sweet, Rasa::Astringent], Virya::Cooling);
        assert_eq!(effects.vata, DoshaEffect::Increases);
        assert_eq!(effects.pitta, DoshaEffect::Decreases);
        assert_eq!(effects.kapha, DoshaEffect::Decreases);
    }

    #[test]
    fn test_heating_virya_only_fills_neutral_vata() {
        let effects = derive_dosha_effects(&[Rasa::Bitter], Virya::Heating);
        assert_eq!(effects.vata, DoshaEffect::Increases);
        assert_eq!(effects.pitta, DoshaEffect::Increases);

        let effects = derive_dosha_effects(&[], Virya::Heating);
        assert_eq!(effects.vata, DoshaEffect::Decreases);
        assert_eq!(effects.kapha, DoshaEffect::Neutral);
    }
}
