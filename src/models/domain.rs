use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::Validate;

/// Lowest score any dimension can hold
pub const MIN_SCORE: i32 = 0;

/// Highest score any dimension can hold
pub const MAX_SCORE: i32 = 100;

/// The six personality axes a quiz answer can contribute to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DimensionKey {
    LifePace,
    ModernTraditional,
    VitalityTranquility,
    UrbanNature,
    CostTolerance,
    ClimatePreference,
}

impl DimensionKey {
    /// All dimensions in canonical order
    pub const ALL: [DimensionKey; 6] = [
        DimensionKey::LifePace,
        DimensionKey::ModernTraditional,
        DimensionKey::VitalityTranquility,
        DimensionKey::UrbanNature,
        DimensionKey::CostTolerance,
        DimensionKey::ClimatePreference,
    ];

    /// Position of this dimension in [`DimensionKey::ALL`]
    pub fn index(self) -> usize {
        match self {
            DimensionKey::LifePace => 0,
            DimensionKey::ModernTraditional => 1,
            DimensionKey::VitalityTranquility => 2,
            DimensionKey::UrbanNature => 3,
            DimensionKey::CostTolerance => 4,
            DimensionKey::ClimatePreference => 5,
        }
    }

    /// Wire name, as used in JSON payloads
    pub fn as_str(self) -> &'static str {
        match self {
            DimensionKey::LifePace => "lifePace",
            DimensionKey::ModernTraditional => "modernTraditional",
            DimensionKey::VitalityTranquility => "vitalityTranquility",
            DimensionKey::UrbanNature => "urbanNature",
            DimensionKey::CostTolerance => "costTolerance",
            DimensionKey::ClimatePreference => "climatePreference",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            DimensionKey::LifePace => "Pace of Life",
            DimensionKey::ModernTraditional => "Modern vs Traditional",
            DimensionKey::VitalityTranquility => "Vitality vs Tranquility",
            DimensionKey::UrbanNature => "Urban vs Nature",
            DimensionKey::CostTolerance => "Cost Tolerance",
            DimensionKey::ClimatePreference => "Climate Preference",
        }
    }

    /// Description of a low (<= 50) and a high (> 50) score on this axis
    pub fn descriptions(self) -> (&'static str, &'static str) {
        match self {
            DimensionKey::LifePace => (
                "Prefers a slow, easy-going rhythm",
                "Thrives on a fast, driven rhythm",
            ),
            DimensionKey::ModernTraditional => (
                "Drawn to history, heritage and old streets",
                "Drawn to skylines, new ideas and modern living",
            ),
            DimensionKey::VitalityTranquility => (
                "Values calm, quiet and space to breathe",
                "Values nightlife, crowds and constant energy",
            ),
            DimensionKey::UrbanNature => (
                "Wants mountains, water and green close by",
                "Wants dense streets and city convenience",
            ),
            DimensionKey::CostTolerance => (
                "Looks for affordable, low-pressure living",
                "Accepts high living costs for opportunity",
            ),
            DimensionKey::ClimatePreference => (
                "Enjoys cool air and distinct seasons",
                "Enjoys warmth and mild winters",
            ),
        }
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete dimension vector: one integer score per dimension
///
/// Every key is a struct field, so a vector can never miss a dimension or
/// carry an extra one. Values are signed so that out-of-range input survives
/// deserialization and can be rejected by [`Validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DimensionScores {
    #[validate(range(min = 0, max = 100))]
    pub life_pace: i32,
    #[validate(range(min = 0, max = 100))]
    pub modern_traditional: i32,
    #[validate(range(min = 0, max = 100))]
    pub vitality_tranquility: i32,
    #[validate(range(min = 0, max = 100))]
    pub urban_nature: i32,
    #[validate(range(min = 0, max = 100))]
    pub cost_tolerance: i32,
    #[validate(range(min = 0, max = 100))]
    pub climate_preference: i32,
}

impl DimensionScores {
    /// Vector with the same score on every dimension
    pub fn uniform(value: i32) -> Self {
        Self::from_fn(|_| value)
    }

    /// Build a vector by evaluating `f` once per dimension
    pub fn from_fn(mut f: impl FnMut(DimensionKey) -> i32) -> Self {
        Self {
            life_pace: f(DimensionKey::LifePace),
            modern_traditional: f(DimensionKey::ModernTraditional),
            vitality_tranquility: f(DimensionKey::VitalityTranquility),
            urban_nature: f(DimensionKey::UrbanNature),
            cost_tolerance: f(DimensionKey::CostTolerance),
            climate_preference: f(DimensionKey::ClimatePreference),
        }
    }

    pub fn get(&self, key: DimensionKey) -> i32 {
        match key {
            DimensionKey::LifePace => self.life_pace,
            DimensionKey::ModernTraditional => self.modern_traditional,
            DimensionKey::VitalityTranquility => self.vitality_tranquility,
            DimensionKey::UrbanNature => self.urban_nature,
            DimensionKey::CostTolerance => self.cost_tolerance,
            DimensionKey::ClimatePreference => self.climate_preference,
        }
    }

    /// Iterate over (dimension, score) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (DimensionKey, i32)> + '_ {
        DimensionKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }

    /// First dimension whose score lies outside [0, 100], if any
    pub fn first_out_of_range(&self) -> Option<(DimensionKey, i32)> {
        self.iter()
            .find(|(_, value)| !(MIN_SCORE..=MAX_SCORE).contains(value))
    }

    /// Copy of this vector with every score clamped into [0, 100]
    pub fn clamped(&self) -> Self {
        Self::from_fn(|key| self.get(key).clamp(MIN_SCORE, MAX_SCORE))
    }
}

/// A single selectable answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub value: i32,
}

/// Quiz question; each question feeds exactly one dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub dimension: DimensionKey,
    pub options: Vec<QuestionOption>,
}

/// Chosen option value per answered question id
///
/// Unanswered questions are absent rather than zero.
pub type UserAnswers = BTreeMap<u32, i32>;

/// Catalog city with its pre-authored dimension vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "personaTypes", default)]
    pub persona_types: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "detailedDescription", default)]
    pub detailed_description: String,
    pub scores: DimensionScores,
}

/// Similarity of one catalog city to a user vector
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchResult<'a> {
    pub city: &'a City,
    /// Match percentage, 100 for identical vectors
    pub score: i32,
    /// Sum of per-dimension absolute differences, in [0, 600]
    pub diff: u32,
}

/// Whether a dimension score leans high or low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tendency {
    Low,
    High,
}

/// Readable breakdown of one dimension of a user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionInsight {
    pub dimension: DimensionKey,
    pub label: &'static str,
    pub score: i32,
    pub tendency: Tendency,
    pub description: &'static str,
}

/// User vs city values on one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionComparison {
    pub dimension: DimensionKey,
    pub label: &'static str,
    #[serde(rename = "userScore")]
    pub user_score: i32,
    #[serde(rename = "cityScore")]
    pub city_score: i32,
    pub difference: u32,
}

/// What to do with a dimension score outside [0, 100] at ranking time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Fail the ranking call with an invalid-input error
    #[default]
    Reject,
    /// Clamp each value into [0, 100] before computing
    Clamp,
}
