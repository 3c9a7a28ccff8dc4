//! The flows behind each CLI command, written against the `Storage` trait so
//! they run the same over a file store or an in-memory one.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::info;

use crate::analysis::{analyze, rank_deficiencies, NutrientResult, NutritionReport};
use crate::meal_log::{LoggedMeal, MealEntryForm, MealSlot};
use crate::nutrients::NutrientKey;
use crate::recipes::{select_recipes, Favorites, Recipe};
use crate::storage::{load_daily_meals, save_daily_meals, Storage};

/// Puts every named dish through the entry form, slot by slot, and saves the
/// resulting day over whatever was stored before.
pub fn log_meals<S, C>(storage: &mut S, entries: &[(MealSlot, Vec<String>)], mut clock: C) -> Result<Vec<LoggedMeal>>
where
    S: Storage + ?Sized,
    C: FnMut() -> u128,
{
    let mut form = MealEntryForm::new();
    for (slot, names) in entries {
        let step = MealSlot::ALL
            .iter()
            .position(|s| s == slot)
            .context("meal slot missing from the entry form")?;
        form.go_to_step(step);
        for name in names {
            form.set_draft(name.as_str());
            form.add_meal(clock());
        }
    }

    let Some(meals) = form.finish() else {
        bail!("No meals given. Log at least one meal before analyzing.");
    };
    save_meals(storage, &meals)?;
    Ok(meals)
}

pub fn save_meals<S: Storage + ?Sized>(storage: &mut S, meals: &[LoggedMeal]) -> Result<()> {
    save_daily_meals(storage, meals).context("Failed to save today's meals")?;
    info!(count = meals.len(), "stored today's meals");
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedNutrient {
    pub key: NutrientKey,
    #[serde(flatten)]
    pub result: NutrientResult,
}

fn ranked(report: &NutritionReport) -> Vec<RankedNutrient> {
    rank_deficiencies(report)
        .into_iter()
        .map(|(key, result)| RankedNutrient { key, result })
        .collect()
}

/// Everything the analysis view shows.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub meals: Vec<LoggedMeal>,
    pub nutrition: NutritionReport,
    pub deficient: Vec<RankedNutrient>,
}

impl AnalysisView {
    pub fn deficient_pairs(&self) -> Vec<(NutrientKey, NutrientResult)> {
        self.deficient.iter().map(|r| (r.key, r.result.clone())).collect()
    }
}

pub fn analysis_view<S: Storage + ?Sized>(storage: &S) -> Result<AnalysisView> {
    let meals = load_daily_meals(storage).context("Failed to load today's meals")?;
    let nutrition = analyze(&meals);
    let deficient = ranked(&nutrition);
    Ok(AnalysisView { meals, nutrition, deficient })
}

/// Everything the recommendation view shows.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub deficient: Vec<RankedNutrient>,
    pub recipes: Vec<&'static Recipe>,
    pub favorites: Favorites,
}

/// Recipes for the ranking computed from the stored day.
///
/// Refuses to recommend anything for a day with no meals.
pub fn recommendation_view<S: Storage + ?Sized>(storage: &S, favorite_toggles: &[u32]) -> Result<RecommendationView> {
    let view = analysis_view(storage)?;
    if view.meals.is_empty() {
        bail!("No meals stored for today. Log your meals before asking for recipes.");
    }

    let keys: Vec<NutrientKey> = view.deficient.iter().map(|r| r.key).collect();
    let recipes = select_recipes(&keys);

    let mut favorites = Favorites::new();
    for id in favorite_toggles {
        favorites.toggle(*id);
    }

    Ok(RecommendationView {
        deficient: view.deficient,
        recipes,
        favorites,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn counter() -> impl FnMut() -> u128 {
        let mut tick = 100;
        move || {
            tick += 1;
            tick
        }
    }

    #[test]
    fn test_log_meals_assigns_slots_and_saves() {
        let mut storage = MemoryStorage::new();
        let meals = log_meals(
            &mut storage,
            &[
                (MealSlot::Breakfast, vec!["ごはん".to_string(), "味噌汁".to_string()]),
                (MealSlot::Dinner, vec!["ハンバーグ".to_string(), "  ".to_string()]),
            ],
            counter(),
        )
        .unwrap();
        assert_eq!(meals.len(), 3);
        assert_eq!(meals[2].slot, MealSlot::Dinner);
        assert_eq!(load_daily_meals(&storage).unwrap(), meals);
    }

    #[test]
    fn test_log_meals_refuses_empty_day() {
        let mut storage = MemoryStorage::new();
        let err = log_meals(&mut storage, &[(MealSlot::Lunch, vec![" ".to_string()])], counter()).unwrap_err();
        assert!(err.to_string().contains("Log at least one meal"));
        assert!(storage.get(crate::storage::DAILY_MEALS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_analysis_of_empty_store() {
        let storage = MemoryStorage::new();
        let view = analysis_view(&storage).unwrap();
        assert!(view.meals.is_empty());
        let keys: Vec<NutrientKey> = view.deficient.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![NutrientKey::Protein, NutrientKey::Fat, NutrientKey::Carbs]);
    }

    #[test]
    fn test_recommendations_follow_real_ranking() {
        let mut storage = MemoryStorage::new();
        log_meals(
            &mut storage,
            &[(MealSlot::Breakfast, vec!["ごはん".to_string(), "味噌汁".to_string()])],
            counter(),
        )
        .unwrap();

        let view = recommendation_view(&storage, &[3, 5, 5]).unwrap();
        let keys: Vec<NutrientKey> = view.deficient.iter().map(|r| r.key).collect();
        // fat 4%, vitaminC 5%, vitaminA 6%
        assert_eq!(keys, vec![NutrientKey::Fat, NutrientKey::VitaminC, NutrientKey::VitaminA]);
        let ids: Vec<u32> = view.recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 4, 15, 16, 11, 12]);
        assert_eq!(view.favorites.ids(), &[3]);
    }

    #[test]
    fn test_log_meals_rejects_slot_outside_the_form() {
        let mut storage = MemoryStorage::new();
        let err = log_meals(
            &mut storage,
            &[(MealSlot::Other("夜食".to_string()), vec!["ごはん".to_string()])],
            counter(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("meal slot missing"));
    }

    #[test]
    fn test_recommendations_for_day_with_unknown_slot_label() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                crate::storage::DAILY_MEALS_KEY,
                r#"[{"id":"1","type":"夜食","name":"ごはん"},{"id":"2","type":"夜食","name":"味噌汁"}]"#.to_string(),
            )
            .unwrap();
        let view = recommendation_view(&storage, &[]).unwrap();
        let keys: Vec<NutrientKey> = view.deficient.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![NutrientKey::Fat, NutrientKey::VitaminC, NutrientKey::VitaminA]);
    }

    #[test]
    fn test_recommendations_need_meals() {
        let storage = MemoryStorage::new();
        assert!(recommendation_view(&storage, &[]).is_err());
    }

    #[test]
    fn test_ranked_nutrient_json_is_flat() {
        let storage = MemoryStorage::new();
        let view = analysis_view(&storage).unwrap();
        let json = serde_json::to_value(&view.deficient[0]).unwrap();
        assert_eq!(json["key"], "protein");
        assert_eq!(json["percentage"], 0);
        assert_eq!(json["unit"], "g");
    }
}
