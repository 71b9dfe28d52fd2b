//! In-memory profile store, used by tests and local runs.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use ps_core::ids::{RecipeId, UserId};
use ps_core::ports::{ProfileStoreError, ProfileStorePort};
use ps_core::profile::UserProfile;
use ps_core::recipe::Recipe;
use ps_core::scan::DietaryPreference;

#[derive(Debug, Clone)]
struct StoredProfile {
    profile: UserProfile,
    updated_at: DateTime<Utc>,
}

impl StoredProfile {
    fn empty() -> Self {
        Self {
            profile: UserProfile::default(),
            updated_at: Utc::now(),
        }
    }
}

/// Profile store backed by a process-local map.
///
/// Maintains the id-set/snapshot invariant on every membership write, the
/// same way the remote document store does.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    documents: Mutex<HashMap<UserId, StoredProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_document<R>(
        &self,
        user_id: &UserId,
        f: impl FnOnce(&mut StoredProfile) -> R,
    ) -> Result<R, ProfileStoreError> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| ProfileStoreError::Store("document map lock poisoned".to_string()))?;
        let doc = documents
            .entry(user_id.clone())
            .or_insert_with(StoredProfile::empty);
        let result = f(doc);
        doc.updated_at = Utc::now();
        Ok(result)
    }

    /// Last write time of a user's document, if it exists.
    pub fn updated_at(&self, user_id: &UserId) -> Option<DateTime<Utc>> {
        self.documents
            .lock()
            .ok()?
            .get(user_id)
            .map(|doc| doc.updated_at)
    }
}

#[async_trait]
impl ProfileStorePort for InMemoryProfileStore {
    async fn get_profile(&self, user_id: &UserId) -> Result<UserProfile, ProfileStoreError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| ProfileStoreError::Store("document map lock poisoned".to_string()))?;
        Ok(documents
            .get(user_id)
            .map(|doc| doc.profile.clone())
            .unwrap_or_default())
    }

    async fn set_favorite_membership(
        &self,
        user_id: &UserId,
        recipe_id: &RecipeId,
        recipe: Option<&Recipe>,
    ) -> Result<(), ProfileStoreError> {
        self.with_document(user_id, |doc| match recipe {
            Some(body) => {
                doc.profile.favorite_recipe_ids.insert(recipe_id.clone());
                doc.profile
                    .saved_recipes
                    .insert(recipe_id.clone(), body.clone());
            }
            None => {
                doc.profile.favorite_recipe_ids.remove(recipe_id);
                doc.profile.saved_recipes.remove(recipe_id);
            }
        })
    }

    async fn set_dietary_preferences(
        &self,
        user_id: &UserId,
        preferences: &BTreeSet<DietaryPreference>,
    ) -> Result<(), ProfileStoreError> {
        self.with_document(user_id, |doc| {
            doc.profile.dietary_allergies = preferences.clone();
        })
    }
}
