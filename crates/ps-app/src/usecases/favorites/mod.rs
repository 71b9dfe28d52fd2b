//! Favorite synchronization: single-flight toggles against the profile
//! store plus change notification toward mounted views.

mod load_favorites;
mod toggle_favorite;

pub use load_favorites::LoadFavorites;
pub use toggle_favorite::{FavoriteChanged, ToggleFavorite, ToggleFavoriteError};
