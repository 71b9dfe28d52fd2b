//! Per-user profile document, owned by the remote profile store.
//!
//! The client only ever holds a read-through copy; durability is delegated
//! entirely to the store.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::ids::RecipeId;
use crate::recipe::Recipe;
use crate::scan::DietaryPreference;

/// One user's profile document.
///
/// Invariant (maintained by the store adapters on write): a recipe id is in
/// `favorite_recipe_ids` if and only if its full body is in `saved_recipes`,
/// so a favorited recipe stays viewable after its originating recipe set is
/// discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub display_name: Option<String>,

    /// Full recipe bodies snapshotted at favoriting time, keyed by id.
    #[serde(default)]
    pub saved_recipes: HashMap<RecipeId, Recipe>,

    #[serde(default)]
    pub favorite_recipe_ids: HashSet<RecipeId>,

    #[serde(default)]
    pub dietary_allergies: BTreeSet<DietaryPreference>,
}

impl UserProfile {
    pub fn is_favorite(&self, recipe_id: &RecipeId) -> bool {
        self.favorite_recipe_ids.contains(recipe_id)
    }

    /// Saved bodies of the favorited recipes.
    ///
    /// Ids without a snapshot are skipped; the write path keeps the two in
    /// lockstep, so a miss here means a foreign writer broke the invariant.
    pub fn favorites(&self) -> Vec<&Recipe> {
        self.favorite_recipe_ids
            .iter()
            .filter_map(|id| self.saved_recipes.get(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: RecipeId::from(id),
            title: format!("Recipe {id}"),
            academic_fuel_score: 70.0,
            fuel_summary: String::new(),
            ingredients: vec![],
            instructions: vec![],
        }
    }

    #[test]
    fn favorites_returns_saved_bodies_only() {
        let mut profile = UserProfile::default();
        profile.favorite_recipe_ids.insert(RecipeId::from("r1"));
        profile.favorite_recipe_ids.insert(RecipeId::from("orphan"));
        profile
            .saved_recipes
            .insert(RecipeId::from("r1"), recipe("r1"));

        let favorites = profile.favorites();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, RecipeId::from("r1"));
    }

    #[test]
    fn profile_deserializes_from_sparse_documents() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.saved_recipes.is_empty());
        assert!(profile.favorite_recipe_ids.is_empty());
        assert!(profile.display_name.is_none());
    }
}
