use thiserror::Error;

use ps_core::ports::{ProfileStoreError, RecipeServiceError};
use ps_core::session::SessionError;

/// Errors surfaced by the pipeline use cases.
///
/// Network-dependent transitions surface these synchronously to the caller
/// and leave prior session state untouched; there is no partial application
/// and no automatic retry.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A local state-machine guard rejected the operation before any
    /// network call was made.
    #[error("precondition failed: {0}")]
    Precondition(#[from] SessionError),

    #[error(transparent)]
    Service(#[from] RecipeServiceError),

    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}
