use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{info, warn};

use ps_core::ids::UserId;
use ps_core::ports::{ProfileStoreError, ProfileStorePort};
use ps_core::scan::DietaryPreference;

/// Persist a user's dietary preferences to the profile store.
///
/// Best-effort from the pipeline's perspective: callers either await the
/// typed result or detach via `execute_silently`.
pub struct UpdateDietaryPreferences {
    profile_store: Arc<dyn ProfileStorePort>,
}

impl UpdateDietaryPreferences {
    pub fn new(profile_store: Arc<dyn ProfileStorePort>) -> Self {
        Self { profile_store }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        preferences: &BTreeSet<DietaryPreference>,
    ) -> Result<(), ProfileStoreError> {
        self.profile_store
            .set_dietary_preferences(user_id, preferences)
            .await?;
        info!(user_id = %user_id, count = preferences.len(), "dietary preferences persisted");
        Ok(())
    }

    /// Fire-and-forget variant: failures are logged and swallowed.
    pub async fn execute_silently(
        &self,
        user_id: &UserId,
        preferences: &BTreeSet<DietaryPreference>,
    ) {
        if let Err(err) = self.execute(user_id, preferences).await {
            warn!(user_id = %user_id, error = %err, "dietary preference write failed");
        }
    }
}
