use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Closed set of dietary preferences the recipe engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DietaryPreference {
    #[serde(rename = "No Dairy")]
    NoDairy,
    #[serde(rename = "Gluten Free")]
    GlutenFree,
    #[serde(rename = "Nut Free")]
    NutFree,
    Vegan,
    Halal,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 5] = [
        Self::NoDairy,
        Self::GlutenFree,
        Self::NutFree,
        Self::Vegan,
        Self::Halal,
    ];

    /// Human-readable label, identical to the wire representation.
    pub fn label(self) -> &'static str {
        match self {
            Self::NoDairy => "No Dairy",
            Self::GlutenFree => "Gluten Free",
            Self::NutFree => "Nut Free",
            Self::Vegan => "Vegan",
            Self::Halal => "Halal",
        }
    }
}

impl std::fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Two independent toggle sets: quick filters proposed by the scan step and
/// dietary preferences from the closed enumeration.
///
/// Both are pure presence/absence sets; iteration order is stable (sorted)
/// for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    quick_filters: BTreeSet<String>,
    dietary_preferences: BTreeSet<DietaryPreference>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_quick_filter(&mut self, label: &str) {
        if !self.quick_filters.remove(label) {
            self.quick_filters.insert(label.to_string());
        }
    }

    pub fn toggle_dietary_preference(&mut self, preference: DietaryPreference) {
        if !self.dietary_preferences.remove(&preference) {
            self.dietary_preferences.insert(preference);
        }
    }

    pub fn quick_filters(&self) -> &BTreeSet<String> {
        &self.quick_filters
    }

    pub fn dietary_preferences(&self) -> &BTreeSet<DietaryPreference> {
        &self.dietary_preferences
    }

    /// Wire labels of the active dietary preferences.
    pub fn dietary_labels(&self) -> Vec<String> {
        self.dietary_preferences
            .iter()
            .map(|p| p.label().to_string())
            .collect()
    }

    pub fn clear(&mut self) {
        self.quick_filters.clear();
        self.dietary_preferences.clear();
    }
}
