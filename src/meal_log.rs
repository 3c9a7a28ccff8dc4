use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Meal slots in the order the entry form walks through them.
///
/// Stored days may carry labels this crate does not know; those are kept
/// verbatim in `Other` so the day still loads and re-saves unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Other(String),
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner, MealSlot::Snack];

    pub fn label(&self) -> &str {
        match self {
            MealSlot::Breakfast => "朝食",
            MealSlot::Lunch => "昼食",
            MealSlot::Dinner => "夕食",
            MealSlot::Snack => "間食",
            MealSlot::Other(label) => label,
        }
    }

    /// Japanese labels and their English names map to the four form slots.
    pub fn from_label(label: &str) -> Self {
        match label {
            "朝食" | "breakfast" => MealSlot::Breakfast,
            "昼食" | "lunch" => MealSlot::Lunch,
            "夕食" | "dinner" => MealSlot::Dinner,
            "間食" | "snack" => MealSlot::Snack,
            other => MealSlot::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for MealSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for MealSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(MealSlot::from_label(&label))
    }
}

/// One dish eaten during the day. This is exactly the shape kept under the
/// `dailyMeals` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedMeal {
    pub id: String,
    #[serde(rename = "type")]
    pub slot: MealSlot,
    pub name: String,
}

/// Count and names of the meals logged for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSummary {
    pub slot: MealSlot,
    pub names: Vec<String>,
}

impl SlotSummary {
    pub fn count(&self) -> usize {
        self.names.len()
    }
}

/// One summary per slot, in form order, including empty slots. Unrecognized
/// slot labels follow in first-seen order.
pub fn summarize_slots(meals: &[LoggedMeal]) -> Vec<SlotSummary> {
    let mut slots: Vec<MealSlot> = MealSlot::ALL.to_vec();
    for meal in meals {
        if !slots.contains(&meal.slot) {
            slots.push(meal.slot.clone());
        }
    }

    slots
        .into_iter()
        .map(|slot| {
            let names = meals
                .iter()
                .filter(|meal| meal.slot == slot)
                .map(|meal| meal.name.clone())
                .collect();
            SlotSummary { slot, names }
        })
        .collect()
}

/// Wall-clock milliseconds, the source of meal ids.
pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// State of the multi-step meal entry form.
///
/// Every method is a plain state update: nothing here touches storage or the
/// clock, so the caller passes timestamps in.
#[derive(Debug, Clone, Default)]
pub struct MealEntryForm {
    current_step: usize,
    meals: Vec<LoggedMeal>,
    draft: String,
    last_id: Option<u128>,
}

impl MealEntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_slot(&self) -> MealSlot {
        MealSlot::ALL[self.current_step].clone()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == MealSlot::ALL.len() - 1
    }

    pub fn meals(&self) -> &[LoggedMeal] {
        &self.meals
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Logs the draft under the current slot and clears it.
    ///
    /// A draft that is blank after trimming is ignored and `None` is returned.
    /// Ids are millisecond timestamps, bumped past the previous id when two
    /// meals are added within the same millisecond.
    pub fn add_meal(&mut self, now_millis: u128) -> Option<&LoggedMeal> {
        if self.draft.trim().is_empty() {
            return None;
        }

        let id = match self.last_id {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_id = Some(id);

        let slot = self.current_slot();
        let name = std::mem::take(&mut self.draft);
        self.meals.push(LoggedMeal {
            id: id.to_string(),
            slot,
            name,
        });
        self.meals.last()
    }

    /// Returns the removed meal, if one had that id.
    pub fn remove_meal(&mut self, id: &str) -> Option<LoggedMeal> {
        let position = self.meals.iter().position(|meal| meal.id == id)?;
        Some(self.meals.remove(position))
    }

    pub fn next_step(&mut self) {
        if !self.is_last_step() {
            self.current_step += 1;
        }
    }

    pub fn prev_step(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
        }
    }

    /// Jumps straight to a step. Out-of-range steps leave the form unchanged.
    pub fn go_to_step(&mut self, step: usize) -> bool {
        if step < MealSlot::ALL.len() {
            self.current_step = step;
            true
        } else {
            false
        }
    }

    pub fn current_meals(&self) -> Vec<&LoggedMeal> {
        let slot = self.current_slot();
        self.meals.iter().filter(|meal| meal.slot == slot).collect()
    }

    pub fn slot_summary(&self) -> Vec<SlotSummary> {
        summarize_slots(&self.meals)
    }

    /// Analysis is only reachable once something has been logged.
    pub fn can_analyze(&self) -> bool {
        !self.meals.is_empty()
    }

    pub fn finish(self) -> Option<Vec<LoggedMeal>> {
        if self.can_analyze() {
            Some(self.meals)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(entries: &[(usize, &str)]) -> MealEntryForm {
        let mut form = MealEntryForm::new();
        for (offset, (step, name)) in entries.iter().enumerate() {
            assert!(form.go_to_step(*step));
            form.set_draft(*name);
            form.add_meal(1_000 + offset as u128);
        }
        form
    }

    #[test]
    fn test_add_meal_uses_current_slot_and_clears_draft() {
        let mut form = MealEntryForm::new();
        form.next_step();
        form.set_draft("パスタ");
        let meal = form.add_meal(42).cloned().unwrap();
        assert_eq!(meal.slot, MealSlot::Lunch);
        assert_eq!(meal.name, "パスタ");
        assert_eq!(meal.id, "42");
        assert_eq!(form.draft(), "");
    }

    #[test]
    fn test_blank_draft_is_ignored() {
        let mut form = MealEntryForm::new();
        form.set_draft("   ");
        assert!(form.add_meal(1).is_none());
        assert!(form.meals().is_empty());
        // The draft is left as typed so the user can keep editing it.
        assert_eq!(form.draft(), "   ");
    }

    #[test]
    fn test_name_is_stored_as_typed() {
        let mut form = MealEntryForm::new();
        form.set_draft(" ごはん ");
        form.add_meal(1);
        assert_eq!(form.meals()[0].name, " ごはん ");
    }

    #[test]
    fn test_ids_stay_unique_within_one_millisecond() {
        let mut form = MealEntryForm::new();
        for name in ["a", "b", "c"] {
            form.set_draft(name);
            form.add_meal(500);
        }
        let ids: Vec<&str> = form.meals().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["500", "501", "502"]);

        // A clock that goes backwards still yields increasing ids.
        form.set_draft("d");
        form.add_meal(10);
        assert_eq!(form.meals()[3].id, "503");
    }

    #[test]
    fn test_step_navigation_is_bounded() {
        let mut form = MealEntryForm::new();
        form.prev_step();
        assert_eq!(form.current_step(), 0);
        for _ in 0..10 {
            form.next_step();
        }
        assert_eq!(form.current_step(), 3);
        assert!(form.is_last_step());
        assert_eq!(form.current_slot(), MealSlot::Snack);
        assert!(!form.go_to_step(4));
        assert_eq!(form.current_step(), 3);
        assert!(form.go_to_step(1));
        assert_eq!(form.current_slot(), MealSlot::Lunch);
    }

    #[test]
    fn test_remove_meal() {
        let mut form = form_with(&[(0, "ごはん"), (0, "味噌汁")]);
        let removed = form.remove_meal("1000").unwrap();
        assert_eq!(removed.name, "ごはん");
        assert_eq!(form.meals().len(), 1);
        assert!(form.remove_meal("missing").is_none());
    }

    #[test]
    fn test_current_meals_and_summary() {
        let mut form = form_with(&[(0, "ごはん"), (2, "ハンバーグ"), (0, "味噌汁")]);
        form.go_to_step(0);
        let names: Vec<&str> = form.current_meals().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ごはん", "味噌汁"]);

        let summary = form.slot_summary();
        assert_eq!(summary.len(), 4);
        assert_eq!(summary[0].count(), 2);
        assert_eq!(summary[1].count(), 0);
        assert_eq!(summary[2].names, vec!["ハンバーグ".to_string()]);
        assert_eq!(summary[3].slot, MealSlot::Snack);
    }

    #[test]
    fn test_finish_requires_at_least_one_meal() {
        let empty = MealEntryForm::new();
        assert!(!empty.can_analyze());
        assert!(empty.finish().is_none());

        let form = form_with(&[(3, "フルーツ")]);
        assert!(form.can_analyze());
        assert_eq!(form.finish().unwrap().len(), 1);
    }

    #[test]
    fn test_logged_meal_json_layout() {
        let meal = LoggedMeal {
            id: "1700000000000".to_string(),
            slot: MealSlot::Dinner,
            name: "ハンバーグ".to_string(),
        };
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "1700000000000", "type": "夕食", "name": "ハンバーグ"})
        );

        let english: LoggedMeal =
            serde_json::from_str(r#"{"id":"1","type":"snack","name":"フルーツ"}"#).unwrap();
        assert_eq!(english.slot, MealSlot::Snack);
    }

    #[test]
    fn test_unknown_slot_label_is_kept() {
        let meal: LoggedMeal = serde_json::from_str(r#"{"id":"1","type":"夜食","name":"ラーメン"}"#).unwrap();
        assert_eq!(meal.slot, MealSlot::Other("夜食".to_string()));
        assert_eq!(
            serde_json::to_value(&meal).unwrap(),
            serde_json::json!({"id": "1", "type": "夜食", "name": "ラーメン"})
        );

        let summary = summarize_slots(&[meal]);
        assert_eq!(summary.len(), 5);
        assert_eq!(summary[4].slot.label(), "夜食");
        assert_eq!(summary[4].names, vec!["ラーメン".to_string()]);
        assert!(summary[..4].iter().all(|s| s.count() == 0));
    }
}
