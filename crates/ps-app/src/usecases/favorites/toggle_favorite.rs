use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, info, info_span, warn, Instrument};

use ps_core::ids::{RecipeId, UserId};
use ps_core::ports::{ProfileStoreError, ProfileStorePort};
use ps_core::recipe::Recipe;

/// Emitted after a toggle resolves so every mounted view of the recipe
/// converges without manual callback wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteChanged {
    pub user_id: UserId,
    pub recipe_id: RecipeId,
    pub favorited: bool,
}

#[derive(Debug, Error)]
pub enum ToggleFavoriteError {
    /// A toggle for the same `(user, recipe)` pair is still pending.
    /// Duplicate requests are rejected, never queued or merged.
    #[error("a toggle for this recipe is already in flight")]
    AlreadyInFlight,

    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}

/// Toggle membership of one recipe in one user's favorites.
///
/// Concurrency contract:
/// - at most one in-flight toggle per `(user, recipe)` pair; a duplicate is
///   rejected with `AlreadyInFlight` so the caller disables the control
///   rather than queueing speculative writes;
/// - toggles of different recipes proceed independently;
/// - the profile document itself is last-writer-wins across devices; no
///   cross-device locking is attempted.
///
/// On any store error nothing is committed and no change event is emitted —
/// the membership boolean stays what it was everywhere.
pub struct ToggleFavorite {
    profile_store: Arc<dyn ProfileStorePort>,
    in_flight: Mutex<HashSet<(UserId, RecipeId)>>,
    events: broadcast::Sender<FavoriteChanged>,
}

impl ToggleFavorite {
    pub fn new(profile_store: Arc<dyn ProfileStorePort>) -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            profile_store,
            in_flight: Mutex::new(HashSet::new()),
            events,
        }
    }

    /// Subscribe to membership changes. Views apply the boolean to their
    /// own local copy of the recipe.
    pub fn subscribe(&self) -> broadcast::Receiver<FavoriteChanged> {
        self.events.subscribe()
    }

    /// Toggle and return the resulting membership state.
    ///
    /// The full recipe body is required because favoriting snapshots the
    /// body alongside the id; unfavoriting removes both.
    pub async fn execute(
        &self,
        user_id: &UserId,
        recipe: &Recipe,
    ) -> Result<bool, ToggleFavoriteError> {
        let span = info_span!(
            "usecase.toggle_favorite",
            user_id = %user_id,
            recipe_id = %recipe.id,
        );

        async {
            let _guard = InFlightGuard::acquire(&self.in_flight, user_id, &recipe.id)
                .ok_or(ToggleFavoriteError::AlreadyInFlight)?;

            // Read-modify-write against the profile document. Not
            // transactional with other writers of the same document:
            // last-writer-wins is the accepted model.
            let profile = self.profile_store.get_profile(user_id).await?;
            let favorited = !profile.is_favorite(&recipe.id);

            self.profile_store
                .set_favorite_membership(user_id, &recipe.id, favorited.then_some(recipe))
                .await?;

            info!(favorited, "favorite membership toggled");
            // Nobody listening is fine; views may rely on the returned bool
            // alone.
            let _ = self.events.send(FavoriteChanged {
                user_id: user_id.clone(),
                recipe_id: recipe.id.clone(),
                favorited,
            });

            Ok(favorited)
        }
        .instrument(span)
        .await
    }

    /// UI-boundary variant preserving the original product behavior: any
    /// failure is logged and swallowed, and `None` means "leave the local
    /// boolean as it was".
    pub async fn execute_silently(&self, user_id: &UserId, recipe: &Recipe) -> Option<bool> {
        match self.execute(user_id, recipe).await {
            Ok(favorited) => Some(favorited),
            Err(ToggleFavoriteError::AlreadyInFlight) => {
                debug!(recipe_id = %recipe.id, "duplicate toggle ignored");
                None
            }
            Err(err) => {
                warn!(recipe_id = %recipe.id, error = %err, "favorite toggle failed");
                None
            }
        }
    }
}

/// Releases the in-flight key on every exit path, including errors.
struct InFlightGuard<'a> {
    keys: &'a Mutex<HashSet<(UserId, RecipeId)>>,
    key: (UserId, RecipeId),
}

impl<'a> InFlightGuard<'a> {
    fn acquire(
        keys: &'a Mutex<HashSet<(UserId, RecipeId)>>,
        user_id: &UserId,
        recipe_id: &RecipeId,
    ) -> Option<Self> {
        let key = (user_id.clone(), recipe_id.clone());
        let mut set = keys.lock().unwrap_or_else(|e| e.into_inner());
        if !set.insert(key.clone()) {
            return None;
        }
        Some(Self { keys, key })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut set = self.keys.lock().unwrap_or_else(|e| e.into_inner());
        set.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    use ps_core::profile::UserProfile;
    use ps_core::scan::DietaryPreference;

    /// Store that can stall its first read until released, to hold a toggle
    /// in flight deterministically.
    struct GatedStore {
        profile: Mutex<UserProfile>,
        gate: Option<Arc<Notify>>,
        reached_read: Arc<Notify>,
        fail_writes: bool,
        writes: AtomicUsize,
    }

    impl GatedStore {
        fn new() -> Self {
            Self {
                profile: Mutex::new(UserProfile::default()),
                gate: None,
                reached_read: Arc::new(Notify::new()),
                fail_writes: false,
                writes: AtomicUsize::new(0),
            }
        }

        fn gated(gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new()
            }
        }

        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::new()
            }
        }

        fn snapshot(&self) -> UserProfile {
            self.profile.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProfileStorePort for GatedStore {
        async fn get_profile(&self, _user_id: &UserId) -> Result<UserProfile, ProfileStoreError> {
            self.reached_read.notify_one();
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            Ok(self.snapshot())
        }

        async fn set_favorite_membership(
            &self,
            _user_id: &UserId,
            recipe_id: &RecipeId,
            recipe: Option<&Recipe>,
        ) -> Result<(), ProfileStoreError> {
            if self.fail_writes {
                return Err(ProfileStoreError::Store("write denied".to_string()));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            let mut profile = self.profile.lock().unwrap();
            match recipe {
                Some(body) => {
                    profile.favorite_recipe_ids.insert(recipe_id.clone());
                    profile.saved_recipes.insert(recipe_id.clone(), body.clone());
                }
                None => {
                    profile.favorite_recipe_ids.remove(recipe_id);
                    profile.saved_recipes.remove(recipe_id);
                }
            }
            Ok(())
        }

        async fn set_dietary_preferences(
            &self,
            _user_id: &UserId,
            _preferences: &BTreeSet<DietaryPreference>,
        ) -> Result<(), ProfileStoreError> {
            Ok(())
        }
    }

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: RecipeId::from(id),
            title: format!("Recipe {id}"),
            academic_fuel_score: 80.0,
            fuel_summary: String::new(),
            ingredients: vec![],
            instructions: vec![],
        }
    }

    #[tokio::test]
    async fn toggle_adds_then_removes_id_and_snapshot_together() {
        let store = Arc::new(GatedStore::new());
        let uc = ToggleFavorite::new(store.clone());
        let user = UserId::from("u1");
        let r1 = recipe("r1");

        let favorited = uc.execute(&user, &r1).await.unwrap();
        assert!(favorited);
        let profile = store.snapshot();
        assert!(profile.favorite_recipe_ids.contains(&r1.id));
        assert!(profile.saved_recipes.contains_key(&r1.id));

        let favorited = uc.execute(&user, &r1).await.unwrap();
        assert!(!favorited);
        let profile = store.snapshot();
        assert!(!profile.favorite_recipe_ids.contains(&r1.id));
        assert!(!profile.saved_recipes.contains_key(&r1.id));
    }

    #[tokio::test]
    async fn duplicate_toggle_is_rejected_while_the_first_is_pending() {
        let gate = Arc::new(Notify::new());
        let store = Arc::new(GatedStore::gated(gate.clone()));
        let uc = Arc::new(ToggleFavorite::new(store.clone()));
        let user = UserId::from("u1");
        let r1 = recipe("r1");

        let first = {
            let uc = uc.clone();
            let user = user.clone();
            let r1 = r1.clone();
            tokio::spawn(async move { uc.execute(&user, &r1).await })
        };
        // Wait until the first toggle is provably inside the store read.
        store.reached_read.notified().await;

        let second = uc.execute(&user, &r1).await;
        assert!(matches!(second, Err(ToggleFavoriteError::AlreadyInFlight)));

        gate.notify_one();
        let first = first.await.unwrap().unwrap();
        assert!(first);

        // Exactly one completed toggle, never a corrupted intermediate.
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
        assert!(store.snapshot().favorite_recipe_ids.contains(&r1.id));
    }

    #[tokio::test]
    async fn different_recipes_toggle_independently() {
        let store = Arc::new(GatedStore::new());
        let uc = Arc::new(ToggleFavorite::new(store.clone()));
        let user = UserId::from("u1");

        let a = {
            let uc = uc.clone();
            let user = user.clone();
            tokio::spawn(async move { uc.execute(&user, &recipe("a")).await })
        };
        let b = {
            let uc = uc.clone();
            let user = user.clone();
            tokio::spawn(async move { uc.execute(&user, &recipe("b")).await })
        };

        assert!(a.await.unwrap().unwrap());
        assert!(b.await.unwrap().unwrap());
        let profile = store.snapshot();
        assert_eq!(profile.favorite_recipe_ids.len(), 2);
    }

    #[tokio::test]
    async fn failure_commits_nothing_and_emits_no_event() {
        let store = Arc::new(GatedStore::failing());
        let uc = ToggleFavorite::new(store.clone());
        let mut events = uc.subscribe();
        let user = UserId::from("u1");
        let r1 = recipe("r1");

        let result = uc.execute(&user, &r1).await;
        assert!(matches!(result, Err(ToggleFavoriteError::Store(_))));
        assert!(store.snapshot().favorite_recipe_ids.is_empty());
        assert!(matches!(
            events.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));

        // The key was released: a retry is a fresh attempt, not a reject.
        let retry = uc.execute(&user, &r1).await;
        assert!(matches!(retry, Err(ToggleFavoriteError::Store(_))));
    }

    #[tokio::test]
    async fn successful_toggle_broadcasts_the_new_membership() {
        let store = Arc::new(GatedStore::new());
        let uc = ToggleFavorite::new(store);
        let mut list_view = uc.subscribe();
        let mut detail_view = uc.subscribe();
        let user = UserId::from("u1");
        let r1 = recipe("r1");

        uc.execute(&user, &r1).await.unwrap();

        let expected = FavoriteChanged {
            user_id: user.clone(),
            recipe_id: r1.id.clone(),
            favorited: true,
        };
        assert_eq!(list_view.recv().await.unwrap(), expected);
        assert_eq!(detail_view.recv().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn execute_silently_swallows_store_errors() {
        let uc = ToggleFavorite::new(Arc::new(GatedStore::failing()));
        let outcome = uc
            .execute_silently(&UserId::from("u1"), &recipe("r1"))
            .await;
        assert_eq!(outcome, None);
    }
}
