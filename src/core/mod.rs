// Core algorithm exports
pub mod features;
pub mod matcher;
pub mod preferences;
pub mod ranking;
pub mod tables;

pub use features::{gender_priority, RowFeatures};
pub use matcher::{Matcher, MatchError, MatchResult};
pub use preferences::PreferenceSet;
pub use ranking::{Direction, RankingKey, SortPolicy};
pub use tables::{compatibility_code, compatibility_rank, SelfUnderstanding};
