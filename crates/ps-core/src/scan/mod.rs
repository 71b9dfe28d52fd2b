//! Scan domain models: identified items, selection editing, filter state.

mod filters;
mod selection;

pub use filters::{DietaryPreference, FilterState};
pub use selection::SelectionSet;

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;

/// Wire label the recipe service uses for pantry-stock provenance.
const PANTRY_STOCK_LABEL: &str = "ASUCD Pantry";

/// Provenance of an identified item.
///
/// The backend cross-references detected items against the pantry inventory;
/// anything it cannot attribute is tagged with the raw source string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemSource {
    /// Item matched against the pantry inventory.
    PantryStock,

    /// Item owned by the user (including manually added items).
    Personal,

    /// Any other source string the service may emit.
    Other(String),
}

impl From<String> for ItemSource {
    fn from(value: String) -> Self {
        match value.as_str() {
            PANTRY_STOCK_LABEL => Self::PantryStock,
            "Personal" => Self::Personal,
            _ => Self::Other(value),
        }
    }
}

impl From<ItemSource> for String {
    fn from(value: ItemSource) -> Self {
        match value {
            ItemSource::PantryStock => PANTRY_STOCK_LABEL.to_string(),
            ItemSource::Personal => "Personal".to_string(),
            ItemSource::Other(raw) => raw,
        }
    }
}

/// A pantry item detected from an image.
///
/// `name` is the dedup key within a session; `confidence` is in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedItem {
    pub name: String,
    pub confidence: f64,
    pub source: ItemSource,
}

impl IdentifiedItem {
    /// Synthesize an item the user typed in by hand.
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            confidence: 1.0,
            source: ItemSource::Personal,
        }
    }
}

/// The unit of work for one photograph.
///
/// Created atomically from a scan response, replaced wholesale on every new
/// scan, and destroyed only by an explicit reset. Never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSession {
    pub session_id: SessionId,
    pub identified_items: Vec<IdentifiedItem>,
    pub suggested_filters: Vec<String>,
}
