//! User profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public profile of an account; `id` is the account id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when updating a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub username: String,
    pub email: String,
}
