pub mod aggregator;
pub mod ranking;

pub use aggregator::{analyze, NutrientResult, NutritionReport};
pub use ranking::{deficient_keys, rank_deficiencies, DEFICIENCY_COUNT};
