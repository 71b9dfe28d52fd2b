//! Recipe domain models.

use serde::{Deserialize, Serialize};

use crate::ids::RecipeId;

/// Availability of one recipe ingredient against the scanned selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientStatus {
    Available,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub status: IngredientStatus,
    /// Suggested swap when the ingredient is missing.
    pub substitution: Option<String>,
}

/// One generated recipe.
///
/// `academic_fuel_score` is computed entirely by the recipe engine and
/// consumed opaquely here; it only ever ranks recipes for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub academic_fuel_score: f64,
    pub fuel_summary: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn available_count(&self) -> usize {
        self.ingredients
            .iter()
            .filter(|i| i.status == IngredientStatus::Available)
            .count()
    }

    pub fn missing_count(&self) -> usize {
        self.ingredients.len() - self.available_count()
    }
}

/// Result of one generation call.
///
/// Replaced wholesale by every successful generation and invalidated whenever
/// a new scan session replaces the current one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeSet {
    recipes: Vec<Recipe>,
}

impl RecipeSet {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes ranked by Academic Fuel score, best first.
    pub fn sorted_by_fuel_score(&self) -> Vec<&Recipe> {
        let mut sorted: Vec<&Recipe> = self.recipes.iter().collect();
        sorted.sort_by(|a, b| {
            b.academic_fuel_score
                .partial_cmp(&a.academic_fuel_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
