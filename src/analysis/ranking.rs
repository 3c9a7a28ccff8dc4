use crate::analysis::aggregator::{NutrientResult, NutritionReport};
use crate::nutrients::NutrientKey;

/// How many nutrients are reported as deficient.
pub const DEFICIENCY_COUNT: usize = 3;

/// The lowest-scoring nutrients, lowest first.
///
/// The sort is stable, so nutrients with equal percentages keep table order.
/// Reports with fewer than `DEFICIENCY_COUNT` entries return all of them.
pub fn rank_deficiencies(report: &NutritionReport) -> Vec<(NutrientKey, NutrientResult)> {
    let mut ranked: Vec<(NutrientKey, NutrientResult)> = report.entries().to_vec();
    ranked.sort_by_key(|(_, result)| result.percentage);
    ranked.truncate(DEFICIENCY_COUNT);
    ranked
}

/// Just the keys of `rank_deficiencies`, for recipe selection.
pub fn deficient_keys(report: &NutritionReport) -> Vec<NutrientKey> {
    rank_deficiencies(report).into_iter().map(|(key, _)| key).collect()
}
