// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ProfileRecord, MatchRecord, Age, parse_ordinal, is_missing};
pub use requests::{FindMatchesRequest, FindMatchesForm};
pub use responses::{FindMatchesResponse, HealthResponse, ReloadResponse, ErrorResponse};
