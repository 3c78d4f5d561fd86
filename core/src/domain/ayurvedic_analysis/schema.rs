use serde_json::{Value, json};

fn string_list() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn dosha_effect() -> Value {
    json!({ "type": "string", "enum": ["balancing", "aggravating", "neutral"] })
}

fn improvement_suggestion() -> Value {
    json!({
        "type": "object",
        "properties": {
            "issue": { "type": "string" },
            "solution": { "type": "string" },
            "foods_to_add": string_list(),
            "herbs_spices": string_list(),
            "preparation_method": { "type": "string" }
        },
        "required": ["issue", "solution"]
    })
}

/// Response schema sent with every single-food analysis request.
pub fn get_analysis_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "overall_score": { "type": "integer" },
            "dosha_analysis": {
                "type": "object",
                "properties": {
                    "vata_effect": dosha_effect(),
                    "pitta_effect": dosha_effect(),
                    "kapha_effect": dosha_effect(),
                    "explanation": { "type": "string" }
                },
                "required": ["vata_effect", "pitta_effect", "kapha_effect", "explanation"]
            },
            "nutritional_assessment": {
                "type": "object",
                "properties": {
                    "strengths": string_list(),
                    "concerns": string_list(),
                    "analysis": { "type": "string" }
                }
            },
            "ayurvedic_properties": {
                "type": "object",
                "properties": {
                    "rasa": string_list(),
                    "virya": { "type": "string" },
                    "vipaka": { "type": "string" },
                    "prabhava": { "type": "string" }
                }
            },
            "seasonal_guidance": {
                "type": "object",
                "properties": {
                    "best_seasons": string_list(),
                    "seasonal_modifications": { "type": "string" }
                }
            },
            "food_interactions": {
                "type": "object",
                "properties": {
                    "beneficial_combinations": string_list(),
                    "avoid_combinations": string_list(),
                    "timing_recommendations": { "type": "string" }
                }
            },
            "personalized_recommendations": {
                "type": "object",
                "properties": {
                    "for_vata_constitution": { "type": "string" },
                    "for_pitta_constitution": { "type": "string" },
                    "for_kapha_constitution": { "type": "string" }
                }
            },
            "improvement_suggestions": {
                "type": "array",
                "items": improvement_suggestion()
            }
        },
        "required": ["overall_score", "dosha_analysis"]
    })
}

pub fn get_improvement_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "improvement_suggestions": {
                "type": "array",
                "items": improvement_suggestion()
            }
        },
        "required": ["improvement_suggestions"]
    })
}
