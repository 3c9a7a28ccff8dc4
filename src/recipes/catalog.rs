use serde::Serialize;

use crate::nutrients::NutrientKey;

/// A recipe suggestion that links out to Cookpad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub id: u32,
    pub title: &'static str,
    /// Badge labels shown on the recipe card.
    pub nutrients: &'static [&'static str],
    pub time: &'static str,
    pub url: &'static str,
}

/// Recipe shown in the rotating banner on the start screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedRecipe {
    pub id: u32,
    pub title: &'static str,
    pub image: &'static str,
    pub url: &'static str,
}

pub type RecipeTable = [(NutrientKey, &'static [Recipe])];

pub const RECIPES_BY_NUTRIENT: &RecipeTable = &[
    (
        NutrientKey::Protein,
        &[
            Recipe {
                id: 1,
                title: "簡単！鶏むね肉の塩麹漬け",
                nutrients: &["タンパク質", "低脂質"],
                time: "15分",
                url: "https://cookpad.com/jp/search/鶏むね肉",
            },
            Recipe {
                id: 2,
                title: "豆腐と卵のふわふわ丼",
                nutrients: &["タンパク質", "カルシウム"],
                time: "10分",
                url: "https://cookpad.com/jp/search/豆腐と卵",
            },
        ],
    ),
    (
        NutrientKey::Fat,
        &[
            Recipe {
                id: 3,
                title: "アボカドとサーモンのサラダ",
                nutrients: &["良質な脂質", "ビタミンE"],
                time: "10分",
                url: "https://cookpad.com/jp/search/アボカドとサーモン",
            },
            Recipe {
                id: 4,
                title: "ナッツとドライフルーツのヨーグルト",
                nutrients: &["良質な脂質", "食物繊維"],
                time: "5分",
                url: "https://cookpad.com/jp/search/ナッツとヨーグルト",
            },
        ],
    ),
    (
        NutrientKey::Carbs,
        &[
            Recipe {
                id: 5,
                title: "玄米と野菜のヘルシーボウル",
                nutrients: &["炭水化物", "食物繊維"],
                time: "20分",
                url: "https://cookpad.com/jp/search/玄米ボウル",
            },
            Recipe {
                id: 6,
                title: "さつまいもとりんごのスムージー",
                nutrients: &["炭水化物", "ビタミンC"],
                time: "5分",
                url: "https://cookpad.com/jp/search/さつまいもスムージー",
            },
        ],
    ),
    (
        NutrientKey::Calcium,
        &[
            Recipe {
                id: 7,
                title: "小松菜と豆腐のごま和え",
                nutrients: &["カルシウム", "鉄分"],
                time: "10分",
                url: "https://cookpad.com/jp/search/小松菜と豆腐",
            },
            Recipe {
                id: 8,
                title: "牛乳と小魚のリゾット",
                nutrients: &["カルシウム", "タンパク質"],
                time: "20分",
                url: "https://cookpad.com/jp/search/小魚リゾット",
            },
        ],
    ),
    (
        NutrientKey::Iron,
        &[
            Recipe {
                id: 9,
                title: "ほうれん草とレバーの炒め物",
                nutrients: &["鉄分", "ビタミンA"],
                time: "15分",
                url: "https://cookpad.com/jp/search/ほうれん草とレバー",
            },
            Recipe {
                id: 10,
                title: "切り干し大根と小松菜の煮物",
                nutrients: &["鉄分", "食物繊維"],
                time: "25分",
                url: "https://cookpad.com/jp/search/切り干し大根と小松菜",
            },
        ],
    ),
    (
        NutrientKey::VitaminA,
        &[
            Recipe {
                id: 11,
                title: "にんじんとかぼちゃのポタージュ",
                nutrients: &["ビタミンA", "食物繊維"],
                time: "20分",
                url: "https://cookpad.com/jp/search/にんじんとかぼちゃのポタージュ",
            },
            Recipe {
                id: 12,
                title: "ほうれん草とトマトのオムレツ",
                nutrients: &["ビタミンA", "タンパク質"],
                time: "15分",
                url: "https://cookpad.com/jp/search/ほうれん草オムレツ",
            },
        ],
    ),
    (
        NutrientKey::VitaminB1,
        &[
            Recipe {
                id: 13,
                title: "豚肉と玄米の炊き込みご飯",
                nutrients: &["ビタミンB1", "タンパク質"],
                time: "30分",
                url: "https://cookpad.com/jp/search/豚肉と玄米",
            },
            Recipe {
                id: 14,
                title: "枝豆と大豆のサラダ",
                nutrients: &["ビタミンB1", "食物繊維"],
                time: "10分",
                url: "https://cookpad.com/jp/search/枝豆と大豆",
            },
        ],
    ),
    (
        NutrientKey::VitaminC,
        &[
            Recipe {
                id: 15,
                title: "ブロッコリーとパプリカのサラダ",
                nutrients: &["ビタミンC", "食物繊維"],
                time: "10分",
                url: "https://cookpad.com/jp/search/ブロッコリーとパプリカ",
            },
            Recipe {
                id: 16,
                title: "キウイとイチゴのスムージー",
                nutrients: &["ビタミンC", "抗酸化物質"],
                time: "5分",
                url: "https://cookpad.com/jp/search/キウイとイチゴ",
            },
        ],
    ),
    (
        NutrientKey::Fiber,
        &[
            Recipe {
                id: 17,
                title: "きのこと海藻のスープ",
                nutrients: &["食物繊維", "ミネラル"],
                time: "15分",
                url: "https://cookpad.com/jp/search/きのこと海藻",
            },
            Recipe {
                id: 18,
                title: "雑穀とレンズ豆のサラダ",
                nutrients: &["食物繊維", "タンパク質"],
                time: "20分",
                url: "https://cookpad.com/jp/search/雑穀とレンズ豆",
            },
        ],
    ),
];

pub const FEATURED_RECIPES: &[FeaturedRecipe] = &[
    FeaturedRecipe {
        id: 1,
        title: "彩り野菜のヘルシーサラダ",
        image: "/recipe-salad.jpg",
        url: "https://cookpad.com/search/サラダ",
    },
    FeaturedRecipe {
        id: 2,
        title: "鶏むね肉と野菜のヘルシー蒸し料理",
        image: "/recipe-chicken.jpg",
        url: "https://cookpad.com/search/鶏むね蒸し",
    },
    FeaturedRecipe {
        id: 3,
        title: "栄養満点！具だくさん味噌汁",
        image: "/recipe-soup.jpg",
        url: "https://cookpad.com/search/具だくさん味噌汁",
    },
];

pub fn recipes_for(table: &RecipeTable, key: NutrientKey) -> &'static [Recipe] {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, recipes)| *recipes)
        .unwrap_or(&[])
}
