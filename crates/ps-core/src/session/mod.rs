//! Session state machine: one scan-to-recipes pipeline instance.

mod error;
mod stage;
mod state;

pub use error::SessionError;
pub use stage::PipelineStage;
pub use state::{Completion, Epoch, SessionState};
