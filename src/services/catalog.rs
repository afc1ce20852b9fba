use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use crate::models::{City, Question, MAX_SCORE, MIN_SCORE};

/// Errors that can occur while loading the content catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(u32),

    #[error("Duplicate city id: {0}")]
    DuplicateCity(String),

    #[error("Question {0} has no options")]
    EmptyQuestion(u32),

    #[error("Question {question} option '{option}' has value {value} outside [0, 100]")]
    InvalidOptionValue {
        question: u32,
        option: String,
        value: i32,
    },

    #[error("City '{city}' has {dimension} = {value} outside [0, 100]")]
    InvalidCityScore {
        city: String,
        dimension: String,
        value: i32,
    },
}

/// Static question and city content
///
/// Loaded once at start-up and shared read-only afterwards. Construction
/// checks the structural invariants the scoring core relies on, so every
/// city vector in a `Catalog` is in range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    questions: Vec<Question>,
    cities: Vec<City>,
}

impl Catalog {
    /// Build a catalog from already-parsed content
    pub fn new(questions: Vec<Question>, cities: Vec<City>) -> Result<Self, CatalogError> {
        let catalog = Self { questions, cities };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub async fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json_str(&json)?;

        tracing::info!(
            "Loaded catalog from {} ({} questions, {} cities)",
            path.display(),
            catalog.questions.len(),
            catalog.cities.len()
        );

        Ok(catalog)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id));
            }
            if question.options.is_empty() {
                return Err(CatalogError::EmptyQuestion(question.id));
            }
            if let Some(option) = question
                .options
                .iter()
                .find(|option| !(MIN_SCORE..=MAX_SCORE).contains(&option.value))
            {
                return Err(CatalogError::InvalidOptionValue {
                    question: question.id,
                    option: option.text.clone(),
                    value: option.value,
                });
            }
        }

        let mut city_ids = HashSet::new();
        for city in &self.cities {
            if !city_ids.insert(city.id.as_str()) {
                return Err(CatalogError::DuplicateCity(city.id.clone()));
            }
            if let Some((dimension, value)) = city.scores.first_out_of_range() {
                return Err(CatalogError::InvalidCityScore {
                    city: city.id.clone(),
                    dimension: dimension.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}
