use crate::models::ProfileRecord;
use std::collections::BTreeSet;

/// LDR values meaning "open to or requires long distance"
const LONG_DISTANCE_VALUES: [i64; 2] = [1, 2];

/// Commitment values that switch on gender-based priority
const COMMITTED_VALUES: [i64; 2] = [4, 5];

/// Distinct attribute values pooled from every row of the querying user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSet {
    pub ldr_values: BTreeSet<i64>,
    pub locations: BTreeSet<String>,
    pub commitment_values: BTreeSet<i64>,
    pub genders: BTreeSet<String>,
}

impl PreferenceSet {
    /// Pool the non-missing values of the user's rows.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a ProfileRecord>,
    {
        let mut set = Self::default();

        for row in rows {
            set.ldr_values.extend(row.ldr);
            set.commitment_values.extend(row.commitment);
            set.locations.extend(row.location.iter().cloned());
            set.genders.extend(row.gender.iter().cloned());
        }

        set
    }

    /// Whether the location-match key takes part in the ordering.
    pub fn wants_long_distance(&self) -> bool {
        LONG_DISTANCE_VALUES
            .iter()
            .any(|v| self.ldr_values.contains(v))
    }

    /// The user's single gender when gender-based priority applies.
    ///
    /// Requires a committed preference (4 or 5) and exactly one distinct
    /// gender across the user's rows.
    pub fn gender_filter(&self) -> Option<&str> {
        let committed = COMMITTED_VALUES
            .iter()
            .any(|v| self.commitment_values.contains(v));

        if committed && self.genders.len() == 1 {
            self.genders.iter().next().map(String::as_str)
        } else {
            None
        }
    }

    pub fn location_matches(&self, location: Option<&str>) -> bool {
        location.is_some_and(|loc| self.locations.contains(loc))
    }
}
