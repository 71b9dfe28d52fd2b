use std::sync::{Mutex, MutexGuard};

use ps_core::recipe::RecipeSet;
use ps_core::scan::{DietaryPreference, IdentifiedItem, ScanSession};
use ps_core::session::{PipelineStage, SessionError, SessionState};

/// Process-scoped context object owning the session state machine.
///
/// Created once at application start and shared (via `Arc`) with every use
/// case and the presentation layer; it is never torn down — `reset()` is the
/// only way back to the empty pipeline. All session state is ephemeral and
/// lost on process exit by design.
///
/// State mutation only happens through the transition operations below, on
/// reaction to discrete events; the lock is never held across an `.await`.
#[derive(Debug, Default)]
pub struct SessionContext {
    state: Mutex<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning only matters if a panic escaped a transition; the state
    // machine itself never panics, so recover the inner value.
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run a closure against the locked state machine.
    ///
    /// Crate-internal: use cases bracket their network calls with
    /// begin/complete transitions through this.
    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.lock())
    }

    // === In-place edits ===

    pub fn toggle_item(&self, item: &IdentifiedItem) -> Result<(), SessionError> {
        self.lock().toggle_item(item)
    }

    pub fn remove_item(&self, name: &str) {
        self.lock().remove_item(name);
    }

    pub fn add_custom_item(&self, name: &str) {
        self.lock().add_custom_item(name);
    }

    pub fn toggle_quick_filter(&self, label: &str) {
        self.lock().toggle_quick_filter(label);
    }

    pub fn toggle_dietary_preference(&self, preference: DietaryPreference) {
        self.lock().toggle_dietary_preference(preference);
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    // === Snapshots for the presentation layer ===

    pub fn stage(&self) -> PipelineStage {
        self.lock().stage()
    }

    pub fn scan_session(&self) -> Option<ScanSession> {
        self.lock().scan_session().cloned()
    }

    pub fn selected_item_names(&self) -> Vec<String> {
        self.lock().selection().names()
    }

    pub fn recipes(&self) -> Option<RecipeSet> {
        self.lock().recipes().cloned()
    }
}
