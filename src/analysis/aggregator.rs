use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::debug;

use crate::meal_log::LoggedMeal;
use crate::nutrients::meal_profiles::{find_profile, DEFAULT_PROFILE};
use crate::nutrients::{NutrientKey, NutrientProfile, NUTRITION_STANDARDS};

/// Day total for one nutrient measured against its daily target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientResult {
    pub current: f64,
    pub target: f64,
    /// Share of the target reached, rounded and capped at 100.
    pub percentage: u8,
    pub unit: &'static str,
    pub name: &'static str,
}

/// Per-nutrient results in table order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NutritionReport {
    entries: Vec<(NutrientKey, NutrientResult)>,
}

impl NutritionReport {
    /// Builds a report from already computed entries, keeping their order.
    pub fn from_entries(entries: Vec<(NutrientKey, NutrientResult)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: NutrientKey) -> Option<&NutrientResult> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, result)| result)
    }

    pub fn entries(&self) -> &[(NutrientKey, NutrientResult)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &(NutrientKey, NutrientResult)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a JSON object whose keys keep table order.
impl Serialize for NutritionReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, result) in &self.entries {
            map.serialize_entry(key, result)?;
        }
        map.end()
    }
}

/// `min(round(current / target * 100), 100)`, never below 0.
pub fn percentage_of_target(current: f64, target: f64) -> u8 {
    let raw = (current / target * 100.0).round();
    raw.clamp(0.0, 100.0) as u8
}

/// Sums the nutrient profiles of every logged meal.
///
/// Names are matched exactly against the meal profile table; anything else
/// counts as the default profile.
pub fn sum_meal_nutrients(meals: &[LoggedMeal]) -> NutrientProfile {
    let mut totals = NutrientProfile::default();
    for meal in meals {
        let profile = match find_profile(&meal.name) {
            Some(profile) => profile,
            None => {
                debug!(meal = %meal.name, "no nutrient profile for meal, using default");
                &DEFAULT_PROFILE
            }
        };
        totals.accumulate(profile);
    }
    totals
}

/// Compares a day's meals against the daily standards.
///
/// Total over any input: an empty day yields zero for every nutrient.
pub fn analyze(meals: &[LoggedMeal]) -> NutritionReport {
    let totals = sum_meal_nutrients(meals);

    let entries = NUTRITION_STANDARDS
        .iter()
        .map(|(key, standard)| {
            let current = totals.get(*key);
            (
                *key,
                NutrientResult {
                    current,
                    target: standard.value,
                    percentage: percentage_of_target(current, standard.value),
                    unit: standard.unit,
                    name: standard.name,
                },
            )
        })
        .collect();

    debug!(meals = meals.len(), "nutrition analysis complete");
    NutritionReport { entries }
}
