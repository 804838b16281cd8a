use crate::core::features::RowFeatures;
use crate::core::preferences::PreferenceSet;
use std::cmp::Ordering;

/// Sort keys available to the ranking policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingKey {
    GenderPriority,
    LocationMatch,
    SocialAttunement,
    CompatibilityRank,
    CareerClarity,
    SocietalOptimism,
    SelfUnderstanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordered list of keys with an explicit direction per key.
///
/// Absent values sort after present ones regardless of direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPolicy {
    keys: Vec<(RankingKey, Direction)>,
}

impl SortPolicy {
    pub fn new(keys: Vec<(RankingKey, Direction)>) -> Self {
        Self { keys }
    }

    /// Policy for a querying user.
    ///
    /// The location key is only present when the user is open to a
    /// long-distance relationship. Note that ascending on the match flag
    /// puts non-matching locations first.
    pub fn for_preferences(prefs: &PreferenceSet) -> Self {
        use Direction::Ascending;
        use RankingKey::*;

        let mut keys = vec![(GenderPriority, Ascending)];
        if prefs.wants_long_distance() {
            keys.push((LocationMatch, Ascending));
        }
        keys.extend([
            (SocialAttunement, Ascending),
            (CompatibilityRank, Ascending),
            (CareerClarity, Ascending),
            (SocietalOptimism, Ascending),
            (SelfUnderstanding, Ascending),
        ]);

        Self::new(keys)
    }

    pub fn keys(&self) -> &[(RankingKey, Direction)] {
        &self.keys
    }

    pub fn uses(&self, key: RankingKey) -> bool {
        self.keys.iter().any(|(k, _)| *k == key)
    }

    /// Composite comparison; the first unequal key decides.
    pub fn compare(&self, a: &RowFeatures, b: &RowFeatures) -> Ordering {
        self.keys
            .iter()
            .map(|(key, direction)| compare_key(*key, *direction, a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable sort: rows with equal keys keep their dataset order.
    pub fn sort(&self, rows: &mut [RowFeatures]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }
}

fn compare_key(key: RankingKey, direction: Direction, a: &RowFeatures, b: &RowFeatures) -> Ordering {
    match key {
        RankingKey::GenderPriority => directed(a.gender_priority.cmp(&b.gender_priority), direction),
        RankingKey::LocationMatch => directed(a.location_match.cmp(&b.location_match), direction),
        RankingKey::SocialAttunement => {
            compare_missing_last(a.social_attunement, b.social_attunement, direction)
        }
        RankingKey::CompatibilityRank => {
            directed(a.compatibility_rank.cmp(&b.compatibility_rank), direction)
        }
        RankingKey::CareerClarity => directed(a.career_rank.cmp(&b.career_rank), direction),
        RankingKey::SocietalOptimism => directed(a.optimism_rank.cmp(&b.optimism_rank), direction),
        RankingKey::SelfUnderstanding => directed(a.self_class.cmp(&b.self_class), direction),
    }
}

#[inline]
fn directed(ordering: Ordering, direction: Direction) -> Ordering {
    match direction {
        Direction::Ascending => ordering,
        Direction::Descending => ordering.reverse(),
    }
}

#[inline]
fn compare_missing_last<T: Ord>(a: Option<T>, b: Option<T>, direction: Direction) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.cmp(&b), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
