use std::collections::HashSet;

use crate::nutrients::NutrientKey;
use crate::recipes::catalog::{recipes_for, Recipe, RecipeTable, RECIPES_BY_NUTRIENT};

/// Recipes addressing the given deficient nutrients, from the built-in table.
pub fn select_recipes(deficient: &[NutrientKey]) -> Vec<&'static Recipe> {
    select_recipes_from(RECIPES_BY_NUTRIENT, deficient)
}

/// Concatenates each key's recipe list in key order, then drops repeated
/// recipe ids. The first occurrence of an id wins.
pub fn select_recipes_from(table: &RecipeTable, deficient: &[NutrientKey]) -> Vec<&'static Recipe> {
    let mut seen = HashSet::new();
    deficient
        .iter()
        .flat_map(|key| recipes_for(table, *key).iter())
        .filter(|recipe| seen.insert(recipe.id))
        .collect()
}
