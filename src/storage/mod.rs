//! Key-value persistence for the day's meal log.
//!
//! Values are JSON text stored under string keys, with last-write-wins
//! semantics. Analysis never writes here; only a completed entry session does.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use tracing::debug;

use crate::meal_log::LoggedMeal;

/// Key under which the current day's meals are kept.
pub const DAILY_MEALS_KEY: &str = "dailyMeals";

pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

/// Replaces whatever day was stored before. There is no merging.
pub fn save_daily_meals<S: Storage + ?Sized>(storage: &mut S, meals: &[LoggedMeal]) -> Result<(), StorageError> {
    let json = serde_json::to_string(meals)?;
    storage.set(DAILY_MEALS_KEY, json)?;
    debug!(count = meals.len(), "saved daily meals");
    Ok(())
}

/// A missing key reads as an empty day.
pub fn load_daily_meals<S: Storage + ?Sized>(storage: &S) -> Result<Vec<LoggedMeal>, StorageError> {
    match storage.get(DAILY_MEALS_KEY)? {
        Some(json) => {
            let meals: Vec<LoggedMeal> = serde_json::from_str(&json)?;
            debug!(count = meals.len(), "loaded daily meals");
            Ok(meals)
        }
        None => Ok(Vec::new()),
    }
}
