use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use ps_core::ids::UserId;
use ps_core::ports::{ProfileStorePort, RecipeServicePort};
use ps_core::protocol::{GenerateRecipesRequest, GenerationMode};
use ps_core::session::{Completion, SessionError};

use crate::context::SessionContext;
use crate::error::PipelineError;

/// Generate recipes for the current selection.
///
/// Both backends (`database` and `ai`) resolve through the identical
/// begin/complete contract; the mode is threaded through as an input
/// parameter only. When a signed-in user is supplied, the active dietary
/// preferences are persisted fire-and-forget before dispatch — that write
/// never blocks or fails generation.
pub struct GenerateRecipes {
    service: Arc<dyn RecipeServicePort>,
    profile_store: Option<Arc<dyn ProfileStorePort>>,
    session: Arc<SessionContext>,
}

impl GenerateRecipes {
    pub fn new(
        service: Arc<dyn RecipeServicePort>,
        profile_store: Option<Arc<dyn ProfileStorePort>>,
        session: Arc<SessionContext>,
    ) -> Self {
        Self {
            service,
            profile_store,
            session,
        }
    }

    pub async fn execute(
        &self,
        mode: GenerationMode,
        user: Option<&UserId>,
    ) -> Result<Completion, PipelineError> {
        let span = info_span!("usecase.generate_recipes", mode = mode.as_str());

        async {
            // Guard and request snapshot under one lock; no network call is
            // made when the guard rejects.
            let (epoch, request, preferences) = self.session.with_state(|s| {
                let session_id = match s.scan_session() {
                    Some(scan) => scan.session_id.clone(),
                    None => return Err(SessionError::NoActiveSession),
                };
                let epoch = s.begin_generate()?;
                let request = GenerateRecipesRequest {
                    session_id,
                    identified_items: s.selection().names(),
                    filters: s.filters().quick_filters().iter().cloned().collect(),
                    dietary_preferences: s.filters().dietary_labels(),
                };
                Ok((epoch, request, s.filters().dietary_preferences().clone()))
            })?;

            // Durable preference sync is best-effort and detached.
            if let (Some(store), Some(user)) = (self.profile_store.clone(), user) {
                let user = user.clone();
                tokio::spawn(async move {
                    if let Err(err) = store.set_dietary_preferences(&user, &preferences).await {
                        warn!(user_id = %user, error = %err, "dietary preference sync failed");
                    }
                });
            }

            match self.service.generate_recipes(mode, &request).await {
                Ok(response) => {
                    let recipe_count = response.recipes.len();
                    let completion = self
                        .session
                        .with_state(|s| s.complete_generate(epoch, response));
                    match completion {
                        Completion::Applied => info!(recipe_count, "recipes applied to session"),
                        Completion::Stale => {
                            debug!("generation superseded by a newer call, discarded")
                        }
                    }
                    Ok(completion)
                }
                Err(err) => {
                    self.session.with_state(|s| s.fail_generate(epoch));
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}
