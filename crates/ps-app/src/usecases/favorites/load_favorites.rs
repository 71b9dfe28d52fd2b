use std::sync::Arc;

use tracing::warn;

use ps_core::ids::UserId;
use ps_core::ports::{ProfileStoreError, ProfileStorePort};
use ps_core::recipe::Recipe;

/// Load the saved bodies of a user's favorited recipes, title-sorted.
///
/// Favorited recipes stay viewable here even after the recipe set that
/// produced them was discarded — the store snapshots full bodies.
pub struct LoadFavorites {
    profile_store: Arc<dyn ProfileStorePort>,
}

impl LoadFavorites {
    pub fn new(profile_store: Arc<dyn ProfileStorePort>) -> Self {
        Self { profile_store }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<Vec<Recipe>, ProfileStoreError> {
        let profile = self.profile_store.get_profile(user_id).await?;

        let orphans = profile.favorite_recipe_ids.len() - profile.favorites().len();
        if orphans > 0 {
            // A foreign writer broke the id/snapshot invariant; tolerate on
            // read and keep only viewable favorites.
            warn!(user_id = %user_id, orphans, "favorite ids without saved bodies skipped");
        }

        let mut favorites: Vec<Recipe> = profile.favorites().into_iter().cloned().collect();
        favorites.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(favorites)
    }
}
