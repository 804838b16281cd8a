use crate::core::preferences::PreferenceSet;
use crate::core::tables::{
    career_rank, compatibility_code, compatibility_rank, optimism_rank, SelfUnderstanding,
};
use crate::models::ProfileRecord;

/// Transient sort keys derived from one dataset row.
///
/// Lives only for the duration of a single ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFeatures {
    /// Position of the row in the input dataset
    pub index: usize,
    /// 1 when the row is the opposite gender under active gender priority
    pub gender_priority: u8,
    pub location_match: bool,
    pub social_attunement: Option<i64>,
    pub compatibility_rank: usize,
    pub career_rank: usize,
    pub optimism_rank: usize,
    pub self_class: SelfUnderstanding,
}

impl RowFeatures {
    pub fn derive(index: usize, row: &ProfileRecord, prefs: &PreferenceSet) -> Self {
        let code = compatibility_code(row.mbti.as_deref(), row.disc.as_deref());

        Self {
            index,
            gender_priority: gender_priority(row.gender.as_deref(), prefs),
            location_match: prefs.location_matches(row.location.as_deref()),
            social_attunement: row.social_attunement(),
            compatibility_rank: compatibility_rank(&code),
            career_rank: career_rank(row.career_clarity.as_deref()),
            optimism_rank: optimism_rank(row.societal_optimism.as_deref()),
            self_class: SelfUnderstanding::classify(row.self_understanding.as_deref()),
        }
    }
}

/// Gender priority flag for a candidate row.
///
/// Only the M/F pair is considered opposite; any other value stays at 0.
pub fn gender_priority(candidate: Option<&str>, prefs: &PreferenceSet) -> u8 {
    match (prefs.gender_filter(), candidate) {
        (Some("M"), Some("F")) | (Some("F"), Some("M")) => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed_user(gender: &str) -> PreferenceSet {
        PreferenceSet::from_rows(&[ProfileRecord {
            user_id: Some("me".to_string()),
            gender: Some(gender.to_string()),
            ldr: Some(2),
            commitment: Some(5),
            location: Some("Pune".to_string()),
            ..Default::default()
        }])
    }

    #[test]
    fn test_gender_priority_flags_opposite_gender() {
        let prefs = committed_user("M");

        assert_eq!(gender_priority(Some("F"), &prefs), 1);
        assert_eq!(gender_priority(Some("M"), &prefs), 0);
        assert_eq!(gender_priority(Some("X"), &prefs), 0);
        assert_eq!(gender_priority(None, &prefs), 0);

        let prefs = committed_user("F");
        assert_eq!(gender_priority(Some("M"), &prefs), 1);
    }

    #[test]
    fn test_gender_priority_ignored_for_non_binary_user() {
        let prefs = committed_user("X");
        assert_eq!(gender_priority(Some("F"), &prefs), 0);
        assert_eq!(gender_priority(Some("M"), &prefs), 0);
    }

    #[test]
    fn test_derive_features() {
        let prefs = committed_user("M");
        let row = ProfileRecord {
            user_id: Some("other".to_string()),
            gender: Some("F".to_string()),
            location: Some("Pune".to_string()),
            mbti: Some("ENFJ".to_string()),
            disc: Some(" S".to_string()),
            career_clarity: Some("Moderate clarity".to_string()),
            societal_optimism: Some("Mixed".to_string()),
            self_understanding: Some("Low effort, honestly".to_string()),
            communication: Some(2),
            attachment: Some(3),
            ..Default::default()
        };

        let features = RowFeatures::derive(7, &row, &prefs);

        assert_eq!(features.index, 7);
        assert_eq!(features.gender_priority, 1);
        assert!(features.location_match);
        assert_eq!(features.social_attunement, Some(5));
        assert_eq!(features.compatibility_rank, 1);
        assert_eq!(features.career_rank, 1);
        assert_eq!(features.optimism_rank, 2);
        assert_eq!(features.self_class, SelfUnderstanding::LowEffort);
    }

    #[test]
    fn test_derive_features_for_blank_row() {
        let features = RowFeatures::derive(0, &ProfileRecord::default(), &PreferenceSet::default());

        assert_eq!(features.gender_priority, 0);
        assert!(!features.location_match);
        assert_eq!(features.social_attunement, None);
        assert_eq!(features.compatibility_rank, 64);
        assert_eq!(features.career_rank, 3);
        assert_eq!(features.optimism_rank, 4);
        assert_eq!(features.self_class, SelfUnderstanding::Other);
    }
}
