//! Kindred Match - heuristic matchmaking ranker
//!
//! Loads a tabular dataset of user profiles and orders every row for a
//! querying user with fixed priority rules: compatibility rank tables,
//! location match, gender/commitment logic and a social attunement score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, MatchError, MatchResult, SortPolicy};
pub use models::{ProfileRecord, MatchRecord, FindMatchesRequest, FindMatchesResponse};
pub use services::{load_dataset, read_dataset, DatasetStore, LoadError};
