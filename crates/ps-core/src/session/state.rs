use serde::{Deserialize, Serialize};

use super::{PipelineStage, SessionError};
use crate::protocol::{GenerateRecipesResponse, ScanResponse};
use crate::recipe::RecipeSet;
use crate::scan::{DietaryPreference, FilterState, IdentifiedItem, ScanSession, SelectionSet};

/// Tag for one dispatched async call.
///
/// Every scan/generate dispatch bumps the stage's epoch; a completion whose
/// epoch is no longer current is discarded. This closes the stale-response
/// race where an old call lands after a newer one was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epoch(u64);

/// Outcome of applying an async completion to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The completion was current and the state was replaced wholesale.
    Applied,

    /// A newer call superseded this one; the state was left untouched.
    Stale,
}

impl Completion {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// The session state machine for one scan-to-recipes pipeline.
///
/// Owns the scan session, the editable selection, the filter state and the
/// recipe set; all mutation goes through the transition operations below.
/// No completion ever merges partial results: scans and generations replace
/// state wholesale, so overlapping calls resolve by epoch, not by merge.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionState {
    scan: Option<ScanSession>,
    selection: SelectionSet,
    filters: FilterState,
    recipes: Option<RecipeSet>,

    is_scanning: bool,
    is_generating: bool,

    // Epochs are monotonic for the process lifetime. reset() bumps both and
    // complete_scan bumps the generate epoch, so completions dispatched
    // against a session that no longer exists land stale.
    scan_epoch: u64,
    generate_epoch: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // === Scan transitions ===

    /// Mark the pipeline busy with a scan. The existing session, if any, is
    /// kept until a completion lands.
    pub fn begin_scan(&mut self) -> Epoch {
        self.is_scanning = true;
        self.scan_epoch += 1;
        Epoch(self.scan_epoch)
    }

    /// Apply a successful scan response.
    ///
    /// Replaces the scan session wholesale, reseeds the selection from all
    /// identified items, and clears filters and recipes. A generation still
    /// in flight belongs to the replaced session, so its epoch is
    /// invalidated here. A stale epoch leaves everything untouched.
    pub fn complete_scan(&mut self, epoch: Epoch, response: ScanResponse) -> Completion {
        if epoch.0 != self.scan_epoch {
            return Completion::Stale;
        }

        self.selection = SelectionSet::seed_from(&response.identified_items);
        self.scan = Some(ScanSession {
            session_id: response.session_id,
            identified_items: response.identified_items,
            suggested_filters: response.suggested_filters,
        });
        self.filters = FilterState::new();
        self.recipes = None;
        self.is_scanning = false;
        self.is_generating = false;
        self.generate_epoch += 1;
        Completion::Applied
    }

    /// Clear the scan busy flag after a failed call. Prior state is kept.
    pub fn fail_scan(&mut self, epoch: Epoch) {
        if epoch.0 == self.scan_epoch {
            self.is_scanning = false;
        }
    }

    // === In-place edits ===

    /// Toggle an item's membership in the selection by name.
    pub fn toggle_item(&mut self, item: &IdentifiedItem) -> Result<(), SessionError> {
        if self.scan.is_none() {
            return Err(SessionError::NoActiveSession);
        }
        self.selection.toggle(item);
        Ok(())
    }

    /// Remove an item from the selection by name. No-op when absent.
    pub fn remove_item(&mut self, name: &str) {
        self.selection.remove(name);
    }

    /// Add a manually typed item to the selection.
    pub fn add_custom_item(&mut self, name: &str) {
        self.selection.add_custom(name);
    }

    pub fn toggle_quick_filter(&mut self, label: &str) {
        self.filters.toggle_quick_filter(label);
    }

    pub fn toggle_dietary_preference(&mut self, preference: DietaryPreference) {
        self.filters.toggle_dietary_preference(preference);
    }

    // === Generation transitions ===

    /// Mark the pipeline busy with a generation call.
    ///
    /// Rejected with `EmptySelection` when nothing is selected; callers must
    /// not dispatch the network call in that case.
    pub fn begin_generate(&mut self) -> Result<Epoch, SessionError> {
        if self.selection.is_empty() {
            return Err(SessionError::EmptySelection);
        }
        self.is_generating = true;
        self.generate_epoch += 1;
        Ok(Epoch(self.generate_epoch))
    }

    /// Apply a successful generation response, replacing the recipe set
    /// wholesale. A stale epoch leaves everything untouched.
    pub fn complete_generate(
        &mut self,
        epoch: Epoch,
        response: GenerateRecipesResponse,
    ) -> Completion {
        if epoch.0 != self.generate_epoch {
            return Completion::Stale;
        }

        self.recipes = Some(RecipeSet::new(response.recipes));
        self.is_generating = false;
        Completion::Applied
    }

    /// Clear the generation busy flag after a failed call. Prior state is kept.
    pub fn fail_generate(&mut self, epoch: Epoch) {
        if epoch.0 == self.generate_epoch {
            self.is_generating = false;
        }
    }

    /// Return to `Empty`, clearing all four state objects and both busy
    /// flags. Both epochs are bumped so a completion dispatched before the
    /// reset can never repopulate the session.
    pub fn reset(&mut self) {
        self.scan = None;
        self.selection = SelectionSet::new();
        self.filters = FilterState::new();
        self.recipes = None;
        self.is_scanning = false;
        self.is_generating = false;
        self.scan_epoch += 1;
        self.generate_epoch += 1;
    }

    // === Accessors ===

    pub fn stage(&self) -> PipelineStage {
        if self.is_generating {
            PipelineStage::Generating
        } else if self.is_scanning {
            PipelineStage::Scanning
        } else if self.recipes.is_some() {
            PipelineStage::Generated
        } else if self.scan.is_some() {
            PipelineStage::Scanned
        } else {
            PipelineStage::Empty
        }
    }

    pub fn scan_session(&self) -> Option<&ScanSession> {
        self.scan.as_ref()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn recipes(&self) -> Option<&RecipeSet> {
        self.recipes.as_ref()
    }
}
