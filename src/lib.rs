//! City Match - personality-to-city matching engine
//!
//! This library turns quiz answers into six personality-dimension scores and
//! ranks a fixed catalog of cities by how closely their own scores match.
//! The scoring core is pure; the catalog loader and HTTP routes drive it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{aggregate_scores, rank_matches, MatchError, Matcher, Ranking};
pub use models::{City, DimensionKey, DimensionScores, MatchResult, Question, UserAnswers};
pub use services::{Catalog, CatalogError};
