use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank matches for a user (JSON body)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}

impl FindMatchesRequest {
    /// Copy of the request with surrounding whitespace stripped from the id
    pub fn normalized(&self) -> Self {
        Self {
            user_id: self.user_id.trim().to_string(),
        }
    }
}

/// Urlencoded form post, as sent by a plain HTML form
#[derive(Debug, Clone, Deserialize)]
pub struct FindMatchesForm {
    #[serde(default)]
    pub user_id: String,
}

impl From<FindMatchesForm> for FindMatchesRequest {
    fn from(form: FindMatchesForm) -> Self {
        Self { user_id: form.user_id }
    }
}
