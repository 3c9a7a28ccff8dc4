pub mod catalog;
pub mod favorites;
pub mod selector;

pub use catalog::{FeaturedRecipe, Recipe, FEATURED_RECIPES, RECIPES_BY_NUTRIENT};
pub use favorites::Favorites;
pub use selector::{select_recipes, select_recipes_from};
