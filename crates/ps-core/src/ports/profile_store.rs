use std::collections::BTreeSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::ids::{RecipeId, UserId};
use crate::profile::UserProfile;
use crate::recipe::Recipe;
use crate::scan::DietaryPreference;

#[derive(Debug, Clone, Error)]
pub enum ProfileStoreError {
    #[error("profile store failed: {0}")]
    Store(String),

    #[error("profile document corrupt: {0}")]
    Corrupt(String),
}

/// Typed accessor for the per-user profile document.
///
/// The document is a shared resource across tabs and devices for the same
/// user; writes are last-writer-wins with no conflict detection.
#[async_trait]
pub trait ProfileStorePort: Send + Sync {
    /// Read the whole profile document. An unknown user yields an empty
    /// profile rather than an error.
    async fn get_profile(&self, user_id: &UserId) -> Result<UserProfile, ProfileStoreError>;

    /// Set favorite membership for one recipe.
    ///
    /// `Some(recipe)` adds the id to the favorite set and snapshots the full
    /// body; `None` removes both. The two writes are atomic from the
    /// client's point of view.
    async fn set_favorite_membership(
        &self,
        user_id: &UserId,
        recipe_id: &RecipeId,
        recipe: Option<&Recipe>,
    ) -> Result<(), ProfileStoreError>;

    /// Persist dietary preferences. Best-effort from the caller's view.
    async fn set_dietary_preferences(
        &self,
        user_id: &UserId,
        preferences: &BTreeSet<DietaryPreference>,
    ) -> Result<(), ProfileStoreError>;
}
