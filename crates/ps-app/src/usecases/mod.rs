pub mod check_health;
pub mod favorites;
pub mod generate_recipes;
pub mod scan_pantry;
pub mod update_dietary_preferences;

pub use check_health::CheckServiceHealth;
pub use favorites::{FavoriteChanged, LoadFavorites, ToggleFavorite, ToggleFavoriteError};
pub use generate_recipes::GenerateRecipes;
pub use scan_pantry::ScanPantry;
pub use update_dietary_preferences::UpdateDietaryPreferences;
