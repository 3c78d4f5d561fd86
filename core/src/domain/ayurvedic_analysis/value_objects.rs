use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, food::entities::Dosha};

/// A person's constitution: a single dosha or a dual-dosha combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Constitution {
    pub primary: Dosha,
    pub secondary: Option<Dosha>,
}

impl Constitution {
    pub fn single(primary: Dosha) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn dual(primary: Dosha, secondary: Dosha) -> Result<Self, CoreError> {
        if primary == secondary {
            return Err(CoreError::InvalidInput(format!(
                "constitution lists {primary} twice"
            )));
        }
        Ok(Self {
            primary,
            secondary: Some(secondary),
        })
    }

    pub fn includes(&self, dosha: Dosha) -> bool {
        self.primary == dosha || self.secondary == Some(dosha)
    }

    pub fn doshas(&self) -> Vec<Dosha> {
        let mut doshas = vec![self.primary];
        doshas.extend(self.secondary);
        doshas
    }
}

impl fmt::Display for Constitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}-{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

impl FromStr for Constitution {
    type Err = CoreError;

    /// Accepts `vata`, or a dual form such as `vata-pitta`, `vata_pitta`, `vata+pitta`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(['-', '_', '+'])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [primary] => Ok(Constitution::single(primary.parse()?)),
            [primary, secondary] => Constitution::dual(primary.parse()?, secondary.parse()?),
            _ => Err(CoreError::InvalidInput(format!(
                "invalid constitution '{s}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Monsoon,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Winter,
        Season::Spring,
        Season::Monsoon,
        Season::Autumn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Monsoon => "monsoon",
            Season::Autumn => "autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request context. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisContext {
    pub constitution: Option<Constitution>,
    pub season: Option<Season>,
}

impl AnalysisContext {
    pub fn new(constitution: Option<Constitution>, season: Option<Season>) -> Self {
        Self {
            constitution,
            season,
        }
    }
}

/// Upper bound on foods analysed in one batch request.
pub const MAX_BATCH_SIZE: usize = 50;

#[derive(Debug, Clone)]
pub struct AnalyzeFoodsInput {
    pub food_ids: Vec<Uuid>,
    pub context: AnalysisContext,
}

#[derive(Debug, Clone)]
pub struct AnalyzeDietPlanInput {
    pub plan_id: Uuid,
    /// Overrides the constitution of the plan's client when set.
    pub constitution: Option<Constitution>,
    pub season: Option<Season>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProblematicFood {
    pub food_id: Uuid,
    pub issue: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ImprovementRequest {
    pub problematic_foods: Vec<ProblematicFood>,
    pub client_id: Option<Uuid>,
    pub constitution: Option<Constitution>,
    pub season: Option<Season>,
}

/// Everything the improvement prompt knows about the person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImprovementContext {
    pub constitution: Option<Constitution>,
    pub season: Option<Season>,
    pub health_goals: Vec<String>,
    pub dietary_restrictions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SeasonalRecommendationInput {
    pub food_id: Uuid,
    pub target_season: Season,
    pub constitution: Option<Constitution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_constitution() {
        let constitution: Constitution = "Pitta".parse().unwrap();
        assert_eq!(constitution, Constitution::single(Dosha::Pitta));
        assert_eq!(constitution.to_string(), "pitta");
    }

    #[test]
    fn test_parse_dual_constitution() {
        for raw in ["vata-kapha", "vata_kapha", "vata+kapha"] {
            let constitution: Constitution = raw.parse().unwrap();
            assert_eq!(constitution.primary, Dosha::Vata);
            assert_eq!(constitution.secondary, Some(Dosha::Kapha));
            assert!(constitution.includes(Dosha::Kapha));
            assert!(!constitution.includes(Dosha::Pitta));
        }
    }

    #[test]
    fn test_reject_invalid_constitution() {
        assert!("vata-vata".parse::<Constitution>().is_err());
        assert!("vata-pitta-kapha".parse::<Constitution>().is_err());
        assert!("fire".parse::<Constitution>().is_err());
        assert!("".parse::<Constitution>().is_err());
    }
}
