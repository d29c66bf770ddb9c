use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, Client};

/// User record returned by `sign_in()` and by `GET /api/user/{id}`.
/// Held in memory for the process lifetime; there is no persisted session
/// token, so every process start signs in again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user_id: i64,
    pub user_name: String,
    /// "student" or "staff".
    pub role: String,
    /// Accumulated points. Servers predating the rewards rollout omit this.
    #[serde(default)]
    pub total_points: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Re-fetches this user's record, picking up points earned since sign-in.
    pub fn refresh(&self, client: &Client) -> Result<AuthResponse, ApiError> {
        client.get_user(self.user_id)
    }
}
