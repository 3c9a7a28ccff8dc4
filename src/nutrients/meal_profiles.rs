use super::NutrientProfile;

// Per-serving amounts for the dishes the tracker recognizes.
pub const MEAL_PROFILES: &[(&str, NutrientProfile)] = &[
    (
        "サラダチキン",
        NutrientProfile {
            protein: 25.0,
            fat: 3.0,
            carbs: 1.0,
            calcium: 15.0,
            iron: 1.0,
            vitamin_a: 10.0,
            vitamin_b1: 0.1,
            vitamin_c: 0.0,
            fiber: 0.0,
        },
    ),
    (
        "味噌汁",
        NutrientProfile {
            protein: 3.0,
            fat: 2.0,
            carbs: 5.0,
            calcium: 40.0,
            iron: 0.5,
            vitamin_a: 50.0,
            vitamin_b1: 0.05,
            vitamin_c: 5.0,
            fiber: 2.0,
        },
    ),
    (
        "ごはん",
        NutrientProfile {
            protein: 4.0,
            fat: 0.5,
            carbs: 55.0,
            calcium: 10.0,
            iron: 0.2,
            vitamin_a: 0.0,
            vitamin_b1: 0.1,
            vitamin_c: 0.0,
            fiber: 0.5,
        },
    ),
    (
        "サラダ",
        NutrientProfile {
            protein: 2.0,
            fat: 5.0,
            carbs: 10.0,
            calcium: 30.0,
            iron: 1.0,
            vitamin_a: 200.0,
            vitamin_b1: 0.1,
            vitamin_c: 30.0,
            fiber: 4.0,
        },
    ),
    (
        "ハンバーグ",
        NutrientProfile {
            protein: 20.0,
            fat: 15.0,
            carbs: 10.0,
            calcium: 20.0,
            iron: 2.0,
            vitamin_a: 50.0,
            vitamin_b1: 0.2,
            vitamin_c: 5.0,
            fiber: 1.0,
        },
    ),
    (
        "パスタ",
        NutrientProfile {
            protein: 8.0,
            fat: 3.0,
            carbs: 70.0,
            calcium: 15.0,
            iron: 1.0,
            vitamin_a: 10.0,
            vitamin_b1: 0.2,
            vitamin_c: 0.0,
            fiber: 2.0,
        },
    ),
    (
        "フルーツ",
        NutrientProfile {
            protein: 1.0,
            fat: 0.0,
            carbs: 15.0,
            calcium: 10.0,
            iron: 0.3,
            vitamin_a: 50.0,
            vitamin_b1: 0.05,
            vitamin_c: 40.0,
            fiber: 3.0,
        },
    ),
];

/// Used for any meal name that has no entry in `MEAL_PROFILES`.
pub static DEFAULT_PROFILE: NutrientProfile = NutrientProfile {
    protein: 5.0,
    fat: 3.0,
    carbs: 10.0,
    calcium: 20.0,
    iron: 0.5,
    vitamin_a: 30.0,
    vitamin_b1: 0.1,
    vitamin_c: 10.0,
    fiber: 1.0,
};

/// Exact, case-sensitive lookup. `None` means the caller should fall back to
/// `DEFAULT_PROFILE`.
pub fn find_profile(meal_name: &str) -> Option<&'static NutrientProfile> {
    MEAL_PROFILES
        .iter()
        .find(|(name, _)| *name == meal_name)
        .map(|(_, profile)| profile)
}

pub fn resolve_profile(meal_name: &str) -> &'static NutrientProfile {
    find_profile(meal_name).unwrap_or(&DEFAULT_PROFILE)
}
