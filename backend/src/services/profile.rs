//! Profile service

use std::sync::Arc;

use shared::{Profile, ProfileInput};

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::services::auth::normalize_email;
use crate::store::Store;

#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn Store>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Fetch the user's profile, creating it from signup metadata when missing
    pub async fn get_or_create(&self, user: &AuthUser) -> AppResult<Profile> {
        if let Some(profile) = self.store.get_profile(user.user_id).await? {
            return Ok(profile);
        }

        let username = self
            .store
            .find_account(user.user_id)
            .await?
            .map(|a| a.username)
            .unwrap_or_default();

        tracing::info!(user_id = %user.user_id, "Creating missing profile");
        self.store
            .upsert_profile(user.user_id, &username, &user.email)
            .await
    }

    pub async fn update(&self, user: &AuthUser, input: ProfileInput) -> AppResult<Profile> {
        shared::validate_profile_input(&input)?;
        let email = normalize_email(&input.email);
        self.store
            .upsert_profile(user.user_id, input.username.trim(), &email)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_update_lowercases_email() {
        let service = ProfileService::new(Arc::new(MemoryStore::new()));
        let user = AuthUser {
            user_id: Uuid::new_v4(),
            email: "tabi@example.com".to_string(),
        };

        let profile = service
            .update(
                &user,
                ProfileInput {
                    username: " tabibito ".to_string(),
                    email: "  Tabi@Example.COM ".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.username, "tabibito");
        assert_eq!(profile.email, "tabi@example.com");
    }
}
