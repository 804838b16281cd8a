use crate::core::{features::RowFeatures, preferences::PreferenceSet, ranking::SortPolicy};
use crate::models::{MatchRecord, ProfileRecord};
use thiserror::Error;

/// Outcomes of a ranking call other than success
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("User ID not found: {0}")]
    UserNotFound(String),
}

/// Result of the matching process
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub matches: Vec<MatchRecord>,
    pub total_candidates: usize,
}

/// Ranks every dataset row for a querying user.
///
/// # Pipeline Stages
/// 1. Select the user's own rows (none means `UserNotFound`)
/// 2. Pool them into a [`PreferenceSet`]
/// 3. Derive [`RowFeatures`] for every row, the user's own included
/// 4. Stable sort by the [`SortPolicy`] for those preferences
/// 5. Trim each row down to a [`MatchRecord`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Find matches for `user_id` in `dataset`.
    ///
    /// The id is compared by exact equality; callers trim it beforehand.
    /// The dataset is never modified.
    pub fn find_matches(
        &self,
        user_id: &str,
        dataset: &[ProfileRecord],
    ) -> Result<MatchResult, MatchError> {
        let user_rows: Vec<&ProfileRecord> = dataset
            .iter()
            .filter(|row| row.user_id.as_deref() == Some(user_id))
            .collect();

        if user_rows.is_empty() {
            tracing::debug!("No rows for user {} in {} records", user_id, dataset.len());
            return Err(MatchError::UserNotFound(user_id.to_string()));
        }

        let preferences = PreferenceSet::from_rows(user_rows);
        let policy = SortPolicy::for_preferences(&preferences);

        tracing::debug!(
            "Ranking {} records for user {} (long distance: {}, gender filter: {:?})",
            dataset.len(),
            user_id,
            preferences.wants_long_distance(),
            preferences.gender_filter()
        );

        let mut ranked: Vec<RowFeatures> = dataset
            .iter()
            .enumerate()
            .map(|(index, row)| RowFeatures::derive(index, row, &preferences))
            .collect();

        policy.sort(&mut ranked);

        let matches = ranked
            .iter()
            .map(|features| MatchRecord::from(&dataset[features.index]))
            .collect();

        Ok(MatchResult {
            matches,
            total_candidates: dataset.len(),
        })
    }
}
