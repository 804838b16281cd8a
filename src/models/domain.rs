use serde::{Deserialize, Deserializer, Serialize};

/// One row of the profile dataset.
///
/// Every column is optional: empty cells, the usual missing-value markers
/// (`NA`, `N/A`, `NaN`, `null`, ...), missing columns and short rows all
/// read as `None`. Numeric columns that fail to parse are also `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(rename = "USER ID", default, deserialize_with = "de_text")]
    pub user_id: Option<String>,
    #[serde(rename = "AGE", default, deserialize_with = "de_age")]
    pub age: Option<Age>,
    #[serde(rename = "GENDER", default, deserialize_with = "de_text")]
    pub gender: Option<String>,
    #[serde(rename = "LOCATION", default, deserialize_with = "de_text")]
    pub location: Option<String>,
    #[serde(rename = "MBTI", default, deserialize_with = "de_text")]
    pub mbti: Option<String>,
    #[serde(rename = "DISC", default, deserialize_with = "de_text")]
    pub disc: Option<String>,
    #[serde(rename = "LDR (1: NO LDR)", default, deserialize_with = "de_ordinal")]
    pub ldr: Option<i64>,
    #[serde(rename = "1: PLATONIC TO 5: COMMITTED", default, deserialize_with = "de_ordinal")]
    pub commitment: Option<i64>,
    #[serde(rename = "CLARITY ABOUT CAREER", default, deserialize_with = "de_text")]
    pub career_clarity: Option<String>,
    #[serde(rename = "OPTIMISM ABOUT SOCIETY", default, deserialize_with = "de_text")]
    pub societal_optimism: Option<String>,
    #[serde(rename = "UNDERSTANDING OF ONESELF", default, deserialize_with = "de_text")]
    pub self_understanding: Option<String>,
    #[serde(rename = "COMMUNICATION (1: INTROVERT)", default, deserialize_with = "de_ordinal")]
    pub communication: Option<i64>,
    #[serde(rename = "ATTACHMENT (1: NOT ATTACHED)", default, deserialize_with = "de_ordinal")]
    pub attachment: Option<i64>,
    #[serde(rename = "PERSONALITY", default, deserialize_with = "de_text")]
    pub personality: Option<String>,
    #[serde(rename = "LIKES AND DISLIKES", default, deserialize_with = "de_text")]
    pub likes_and_dislikes: Option<String>,
}

impl ProfileRecord {
    /// Communication plus attachment; absent when either part is absent.
    pub fn social_attunement(&self) -> Option<i64> {
        Some(self.communication? + self.attachment?)
    }
}

/// Ranked match as returned to callers: exactly six columns, in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "USER ID")]
    pub user_id: Option<String>,
    #[serde(rename = "AGE")]
    pub age: Option<Age>,
    #[serde(rename = "GENDER")]
    pub gender: Option<String>,
    #[serde(rename = "LOCATION")]
    pub location: Option<String>,
    #[serde(rename = "PERSONALITY")]
    pub personality: Option<String>,
    #[serde(rename = "LIKES AND DISLIKES")]
    pub likes_and_dislikes: Option<String>,
}

impl From<&ProfileRecord> for MatchRecord {
    fn from(row: &ProfileRecord) -> Self {
        Self {
            user_id: row.user_id.clone(),
            age: row.age,
            gender: row.gender.clone(),
            location: row.location.clone(),
            personality: row.personality.clone(),
            likes_and_dislikes: row.likes_and_dislikes.clone(),
        }
    }
}

/// Age cell: whole numbers stay integers, anything else keeps its fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Age {
    Whole(i64),
    Fractional(f64),
}

impl Age {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if let Some(whole) = parse_ordinal(trimmed) {
            return Some(Self::Whole(whole));
        }

        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Self::Fractional)
    }
}

/// Cell values read as missing, besides the empty cell.
///
/// Matched exactly: whitespace-only cells are kept as text.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[inline]
pub fn is_missing(raw: &str) -> bool {
    raw.is_empty() || MISSING_MARKERS.contains(&raw)
}

/// Parse an ordinal cell: trimmed integer, or a float without fractional part.
pub fn parse_ordinal(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .map(|v| v as i64)
}

fn de_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !is_missing(s)))
}

fn de_age<'de, D>(deserializer: D) -> Result<Option<Age>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Age::parse))
}

fn de_ordinal<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_ordinal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ordinal() {
        assert_eq!(parse_ordinal("4"), Some(4));
        assert_eq!(parse_ordinal(" 2 "), Some(2));
        assert_eq!(parse_ordinal("5.0"), Some(5));
        assert_eq!(parse_ordinal("2.5"), None);
        assert_eq!(parse_ordinal("n/a"), None);
        assert_eq!(parse_ordinal(""), None);
    }

    #[test]
    fn test_parse_age_keeps_fraction() {
        assert_eq!(Age::parse("24"), Some(Age::Whole(24)));
        assert_eq!(Age::parse("24.0"), Some(Age::Whole(24)));
        assert_eq!(Age::parse(" 24.5"), Some(Age::Fractional(24.5)));
        assert_eq!(Age::parse("NaN"), None);
        assert_eq!(Age::parse("twenty"), None);
    }

    #[test]
    fn test_missing_markers() {
        for marker in ["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "<NA>", "#N/A", "-nan"] {
            assert!(is_missing(marker), "{:?} should be missing", marker);
        }
        assert!(!is_missing(" "));
        assert!(!is_missing("na"));
        assert!(!is_missing("M"));
    }

    #[test]
    fn test_social_attunement_requires_both_scores() {
        let mut row = ProfileRecord {
            communication: Some(3),
            attachment: Some(4),
            ..Default::default()
        };
        assert_eq!(row.social_attunement(), Some(7));

        row.attachment = None;
        assert_eq!(row.social_attunement(), None);
    }

    #[test]
    fn test_match_record_serializes_six_columns_in_order() {
        let row = ProfileRecord {
            user_id: Some("u1".to_string()),
            age: Some(Age::Whole(27)),
            gender: Some("F".to_string()),
            location: Some("Pune".to_string()),
            mbti: Some("ENFJ".to_string()),
            personality: Some("warm".to_string()),
            likes_and_dislikes: Some("books".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&MatchRecord::from(&row)).unwrap();
        assert_eq!(
            json,
            r#"{"USER ID":"u1","AGE":27,"GENDER":"F","LOCATION":"Pune","PERSONALITY":"warm","LIKES AND DISLIKES":"books"}"#
        );
    }
}
