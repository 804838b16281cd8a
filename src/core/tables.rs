use once_cell::sync::Lazy;
use std::collections::HashMap;

/// MBTI-DISC combinations ordered from most to least approachable.
pub const COMPATIBILITY_CODES: [&str; 64] = [
    "ENFJ-I", "ENFJ-S", "ENFJ-C", "ENFJ-D",
    "ESFJ-I", "ESFJ-S", "ESFJ-C", "ESFJ-D",
    "ENFP-I", "ENFP-S", "ENFP-C", "ENFP-D",
    "ESFP-I", "ESFP-S", "ESFP-C", "ESFP-D",
    "INFJ-I", "INFJ-S", "INFJ-C", "INFJ-D",
    "ISFJ-I", "ISFJ-S", "ISFJ-C", "ISFJ-D",
    "INFP-I", "INFP-S", "INFP-C", "INFP-D",
    "ISFP-I", "ISFP-S", "ISFP-C", "ISFP-D",
    "ENTP-I", "ENTP-S", "ENTP-C", "ENTP-D",
    "ESTP-I", "ESTP-S", "ESTP-C", "ESTP-D",
    "INTP-I", "INTP-S", "INTP-C", "INTP-D",
    "ISTP-I", "ISTP-S", "ISTP-C", "ISTP-D",
    "ENTJ-I", "ENTJ-S", "ENTJ-C", "ENTJ-D",
    "ESTJ-I", "ESTJ-S", "ESTJ-C", "ESTJ-D",
    "INTJ-I", "INTJ-S", "INTJ-C", "INTJ-D",
    "ISTJ-I", "ISTJ-S", "ISTJ-C", "ISTJ-D",
];

/// Rank assigned to any code missing from [`COMPATIBILITY_CODES`].
pub const UNKNOWN_COMPATIBILITY_RANK: usize = COMPATIBILITY_CODES.len();

pub const CAREER_ORDER: [&str; 3] = ["High clarity", "Moderate clarity", "Low clarity"];

pub const OPTIMISM_ORDER: [&str; 4] = ["Positive", "Neutral", "Mixed", "Negative"];

static COMPATIBILITY_RANKS: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    COMPATIBILITY_CODES
        .iter()
        .enumerate()
        .map(|(rank, code)| (*code, rank))
        .collect()
});

/// Build the compatibility code for a personality type and style code.
///
/// Both parts are trimmed; a missing part is rendered as `nan` so the
/// resulting code never collides with a table entry.
pub fn compatibility_code(mbti: Option<&str>, disc: Option<&str>) -> String {
    format!(
        "{}-{}",
        mbti.map(str::trim).unwrap_or("nan"),
        disc.map(str::trim).unwrap_or("nan"),
    )
}

#[inline]
pub fn compatibility_rank(code: &str) -> usize {
    COMPATIBILITY_RANKS
        .get(code)
        .copied()
        .unwrap_or(UNKNOWN_COMPATIBILITY_RANK)
}

/// Position of `value` in a fixed category order, or the order's length
/// when the value is absent or not a member.
#[inline]
pub fn category_rank(order: &[&str], value: Option<&str>) -> usize {
    value
        .and_then(|v| order.iter().position(|c| *c == v))
        .unwrap_or(order.len())
}

#[inline]
pub fn career_rank(value: Option<&str>) -> usize {
    category_rank(&CAREER_ORDER, value)
}

#[inline]
pub fn optimism_rank(value: Option<&str>) -> usize {
    category_rank(&OPTIMISM_ORDER, value)
}

/// Coarse bucket for the free-text self-understanding answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelfUnderstanding {
    Detailed,
    Moderate,
    LowEffort,
    Other,
}

impl SelfUnderstanding {
    /// Case-insensitive prefix classification.
    pub fn classify(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::Other;
        };
        let lower = text.to_lowercase();

        if lower.starts_with("detailed") {
            Self::Detailed
        } else if lower.starts_with("moderate") {
            Self::Moderate
        } else if lower.starts_with("low effort") {
            Self::LowEffort
        } else {
            Self::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_table_is_complete() {
        assert_eq!(COMPATIBILITY_CODES.len(), 64);
        assert_eq!(COMPATIBILITY_RANKS.len(), 64, "codes must be distinct");
        assert_eq!(compatibility_rank("ENFJ-I"), 0);
        assert_eq!(compatibility_rank("ISTJ-D"), 63);
    }

    #[test]
    fn test_unknown_code_ranks_last() {
        assert_eq!(compatibility_rank("XXXX-Q"), 64);
        assert_eq!(compatibility_rank(""), UNKNOWN_COMPATIBILITY_RANK);
    }

    #[test]
    fn test_compatibility_code_trims_parts() {
        assert_eq!(compatibility_code(Some(" ENFJ "), Some("I ")), "ENFJ-I");
        assert_eq!(compatibility_code(None, Some("I")), "nan-I");
    }

    #[test]
    fn test_category_ranks() {
        assert_eq!(career_rank(Some("High clarity")), 0);
        assert_eq!(career_rank(Some("Low clarity")), 2);
        assert_eq!(career_rank(Some("high clarity")), 3);
        assert_eq!(career_rank(None), 3);

        assert_eq!(optimism_rank(Some("Negative")), 3);
        assert_eq!(optimism_rank(Some("Unsure")), 4);
    }

    #[test]
    fn test_self_understanding_classification() {
        assert_eq!(
            SelfUnderstanding::classify(Some("Detailed - I know myself well")),
            SelfUnderstanding::Detailed
        );
        assert_eq!(SelfUnderstanding::classify(Some("moderately")), SelfUnderstanding::Moderate);
        assert_eq!(SelfUnderstanding::classify(Some("LOW EFFORT")), SelfUnderstanding::LowEffort);
        assert_eq!(SelfUnderstanding::classify(Some("  Detailed")), SelfUnderstanding::Other);
        assert_eq!(SelfUnderstanding::classify(None), SelfUnderstanding::Other);
    }

    #[test]
    fn test_self_understanding_order() {
        assert!(SelfUnderstanding::Detailed < SelfUnderstanding::Moderate);
        assert!(SelfUnderstanding::Moderate < SelfUnderstanding::LowEffort);
        assert!(SelfUnderstanding::LowEffort < SelfUnderstanding::Other);
    }
}
