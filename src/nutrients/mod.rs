pub mod meal_profiles;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine nutrients tracked against a daily target.
///
/// Declaration order is the table order: it decides how reports are listed
/// and how ties are broken when ranking deficiencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NutrientKey {
    Protein,
    Fat,
    Carbs,
    Calcium,
    Iron,
    VitaminA,
    VitaminB1,
    VitaminC,
    Fiber,
}

impl NutrientKey {
    pub const ALL: [NutrientKey; 9] = [
        NutrientKey::Protein,
        NutrientKey::Fat,
        NutrientKey::Carbs,
        NutrientKey::Calcium,
        NutrientKey::Iron,
        NutrientKey::VitaminA,
        NutrientKey::VitaminB1,
        NutrientKey::VitaminC,
        NutrientKey::Fiber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientKey::Protein => "protein",
            NutrientKey::Fat => "fat",
            NutrientKey::Carbs => "carbs",
            NutrientKey::Calcium => "calcium",
            NutrientKey::Iron => "iron",
            NutrientKey::VitaminA => "vitaminA",
            NutrientKey::VitaminB1 => "vitaminB1",
            NutrientKey::VitaminC => "vitaminC",
            NutrientKey::Fiber => "fiber",
        }
    }
}

impl fmt::Display for NutrientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NutrientKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NutrientKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown nutrient key: {}", s))
    }
}

/// Daily reference intake for one nutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientStandard {
    pub value: f64,
    pub unit: &'static str,
    pub name: &'static str,
}

// Simplified Japanese dietary reference intakes for an adult.
pub static NUTRITION_STANDARDS: [(NutrientKey, NutrientStandard); 9] = [
    (NutrientKey::Protein, NutrientStandard { value: 60.0, unit: "g", name: "タンパク質" }),
    (NutrientKey::Fat, NutrientStandard { value: 60.0, unit: "g", name: "脂質" }),
    (NutrientKey::Carbs, NutrientStandard { value: 320.0, unit: "g", name: "炭水化物" }),
    (NutrientKey::Calcium, NutrientStandard { value: 650.0, unit: "mg", name: "カルシウム" }),
    (NutrientKey::Iron, NutrientStandard { value: 7.5, unit: "mg", name: "鉄分" }),
    (NutrientKey::VitaminA, NutrientStandard { value: 850.0, unit: "μg", name: "ビタミンA" }),
    (NutrientKey::VitaminB1, NutrientStandard { value: 1.1, unit: "mg", name: "ビタミンB1" }),
    (NutrientKey::VitaminC, NutrientStandard { value: 100.0, unit: "mg", name: "ビタミンC" }),
    (NutrientKey::Fiber, NutrientStandard { value: 20.0, unit: "g", name: "食物繊維" }),
];

/// Absolute nutrient amounts, either for one meal or summed over a day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientProfile {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub calcium: f64,
    pub iron: f64,
    pub vitamin_a: f64,
    pub vitamin_b1: f64,
    pub vitamin_c: f64,
    pub fiber: f64,
}

impl NutrientProfile {
    pub fn get(&self, key: NutrientKey) -> f64 {
        match key {
            NutrientKey::Protein => self.protein,
            NutrientKey::Fat => self.fat,
            NutrientKey::Carbs => self.carbs,
            NutrientKey::Calcium => self.calcium,
            NutrientKey::Iron => self.iron,
            NutrientKey::VitaminA => self.vitamin_a,
            NutrientKey::VitaminB1 => self.vitamin_b1,
            NutrientKey::VitaminC => self.vitamin_c,
            NutrientKey::Fiber => self.fiber,
        }
    }

    /// Adds every amount of `other` into `self`.
    pub fn accumulate(&mut self, other: &NutrientProfile) {
        macro_rules! add_field {
            ($($field:ident),*) => {
                $( self.$field += other.$field; )*
            };
        }
        add_field!(protein, fat, carbs, calcium, iron, vitamin_a, vitamin_b1, vitamin_c, fiber);
    }
}
