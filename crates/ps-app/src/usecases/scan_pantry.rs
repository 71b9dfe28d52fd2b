use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use ps_core::ports::{RecipeServiceError, RecipeServicePort};
use ps_core::session::Completion;

use crate::context::SessionContext;
use crate::error::PipelineError;

/// Upload a pantry photograph and thread the response into the session.
///
/// The session transition is bracketed around the network call: `begin_scan`
/// tags the dispatch with an epoch, and a completion that lost to a newer
/// scan is discarded rather than applied.
pub struct ScanPantry {
    service: Arc<dyn RecipeServicePort>,
    session: Arc<SessionContext>,
}

impl ScanPantry {
    pub fn new(service: Arc<dyn RecipeServicePort>, session: Arc<SessionContext>) -> Self {
        Self { service, session }
    }

    pub async fn execute(&self, image: Vec<u8>) -> Result<Completion, PipelineError> {
        let span = info_span!("usecase.scan_pantry", bytes = image.len());

        async {
            // Mirror the service's 400 locally: an empty payload never
            // leaves the client.
            if image.is_empty() {
                return Err(RecipeServiceError::InvalidInput(
                    "empty image payload".to_string(),
                )
                .into());
            }

            let epoch = self.session.with_state(|s| s.begin_scan());

            match self.service.scan(image).await {
                Ok(response) => {
                    let item_count = response.identified_items.len();
                    let completion =
                        self.session.with_state(|s| s.complete_scan(epoch, response));
                    match completion {
                        Completion::Applied => {
                            info!(item_count, "scan applied to session");
                        }
                        Completion::Stale => {
                            debug!("scan completion superseded by a newer scan, discarded");
                        }
                    }
                    Ok(completion)
                }
                Err(err) => {
                    self.session.with_state(|s| s.fail_scan(epoch));
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}
