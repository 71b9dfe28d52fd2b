use serde::{Deserialize, Serialize};

use super::IdentifiedItem;

/// Editable projection of a scan session's identified items.
///
/// Seeded as a copy of all identified items when a scan completes. Item names
/// are unique within the set; editing the selection never mutates the scan
/// session it was seeded from. Order is insertion order, stable for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSet {
    items: Vec<IdentifiedItem>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the selection from a scan's identified items, replacing any
    /// previous contents.
    pub fn seed_from(items: &[IdentifiedItem]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }

    /// Toggle an item by name: remove it when present, append it otherwise.
    ///
    /// Idempotent in pairs; repeated calls never error.
    pub fn toggle(&mut self, item: &IdentifiedItem) {
        if self.contains(&item.name) {
            self.remove(&item.name);
        } else {
            self.items.push(item.clone());
        }
    }

    /// Remove an item by name. No-op when absent.
    pub fn remove(&mut self, name: &str) {
        self.items.retain(|i| i.name != name);
    }

    /// Add a manually typed item.
    ///
    /// The name is trimmed first; empty names and names already present
    /// (case-sensitive exact match) are no-ops. The synthesized item carries
    /// confidence 1.0 and `Personal` provenance.
    pub fn add_custom(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return;
        }
        self.items.push(IdentifiedItem::custom(name));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IdentifiedItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ItemSource;

    fn item(name: &str) -> IdentifiedItem {
        IdentifiedItem {
            name: name.to_string(),
            confidence: 0.9,
            source: ItemSource::PantryStock,
        }
    }

    #[test]
    fn toggle_is_xor_per_name() {
        let rice = item("Rice");
        let beans = item("Beans");
        let mut set = SelectionSet::seed_from(&[rice.clone(), beans.clone()]);

        set.toggle(&rice);
        assert!(!set.contains("Rice"));
        assert!(set.contains("Beans"));

        set.toggle(&rice);
        assert!(set.contains("Rice"));

        // Double toggle returns to the original membership; toggled items
        // re-append at the tail.
        set.toggle(&beans);
        set.toggle(&beans);
        assert!(set.contains("Rice"));
        assert!(set.contains("Beans"));
        assert_eq!(set.names(), vec!["Rice", "Beans"]);
    }

    #[test]
    fn remove_is_unconditional_and_silent_when_absent() {
        let mut set = SelectionSet::seed_from(&[item("Rice")]);
        set.remove("Rice");
        assert!(set.is_empty());
        set.remove("Rice");
        assert!(set.is_empty());
    }

    #[test]
    fn add_custom_is_idempotent() {
        let mut set = SelectionSet::new();
        set.add_custom("Olive Oil");
        set.add_custom("Olive Oil");

        assert_eq!(set.len(), 1);
        let added = set.iter().next().unwrap();
        assert_eq!(added.name, "Olive Oil");
        assert_eq!(added.confidence, 1.0);
        assert_eq!(added.source, ItemSource::Personal);
    }

    #[test]
    fn add_custom_trims_and_rejects_empty_names() {
        let mut set = SelectionSet::new();
        set.add_custom("   ");
        assert!(set.is_empty());

        set.add_custom("  Oats ");
        assert_eq!(set.names(), vec!["Oats"]);

        // Case-sensitive dedup: a different casing is a different item.
        set.add_custom("oats");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn editing_the_selection_never_touches_the_seed() {
        let seed = vec![item("Rice"), item("Beans")];
        let mut set = SelectionSet::seed_from(&seed);

        set.remove("Rice");
        set.add_custom("Tofu");

        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].name, "Rice");
    }
}
