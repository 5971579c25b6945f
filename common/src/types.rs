//! レシピ・食事記録の型定義
//!
//! - Recipe: recipes.json の1要素（読み取り専用）
//! - LogRecord: 食事ログの1行（「食事を追加」1回につき1件）

use serde::{Deserialize, Deserializer, Serialize};

/// 国が未指定のレシピに使う値
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// 材料の区切り
pub const INGREDIENT_SEPARATOR: &str = ", ";

/// 作り方の区切り
pub const DIRECTION_SEPARATOR: &str = " ";

/// 日時フォーマット（chrono strftime 形式）
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// レシピ
///
/// 栄養値が欠けている・null の場合は 0 として扱う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,

    #[serde(rename = "Country", default = "default_country", deserialize_with = "string_or_unknown")]
    pub country: String,

    #[serde(rename = "Calories", default, deserialize_with = "number_or_zero")]
    pub calories: f64,

    #[serde(rename = "Protein", default, deserialize_with = "number_or_zero")]
    pub protein: f64,

    #[serde(rename = "Carbs", default, deserialize_with = "number_or_zero")]
    pub carbs: f64,

    #[serde(rename = "Fat", default, deserialize_with = "number_or_zero")]
    pub fat: f64,

    #[serde(rename = "Fiber", default, deserialize_with = "number_or_zero")]
    pub fiber: f64,

    #[serde(rename = "Sugar", default, deserialize_with = "number_or_zero")]
    pub sugar: f64,

    #[serde(rename = "Sodium", default, deserialize_with = "number_or_zero")]
    pub sodium: f64,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub directions: Vec<String>,
}

impl Recipe {
    /// タイトルのみのレシピ（他は既定値）
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            country: default_country(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: 0.0,
            sugar: 0.0,
            sodium: 0.0,
            ingredients: Vec::new(),
            directions: Vec::new(),
        }
    }
}

fn default_country() -> String {
    UNKNOWN_COUNTRY.to_string()
}

fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn string_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_country))
}

/// 食事ログの1行
///
/// serde のキー名はログ Excel の列名と同じ。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Meal")]
    pub meal: String,

    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Protein (g)")]
    pub protein: f64,

    #[serde(rename = "Carbs (g)")]
    pub carbs: f64,

    #[serde(rename = "Fat (g)")]
    pub fat: f64,

    #[serde(rename = "Fiber (g)")]
    pub fiber: f64,

    #[serde(rename = "Sugar (g)")]
    pub sugar: f64,

    #[serde(rename = "Sodium (mg)")]
    pub sodium: f64,

    #[serde(rename = "Ingredients")]
    pub ingredients: String,

    #[serde(rename = "Instructions")]
    pub instructions: String,

    #[serde(rename = "Image")]
    pub image: Option<String>,
}

impl LogRecord {
    /// レシピから記録を生成する
    ///
    /// 日時は呼び出し側で整形済みの文字列を渡す（`DATE_FORMAT`）。
    pub fn from_recipe(recipe: &Recipe, image: Option<String>, date: String) -> Self {
        Self {
            date,
            meal: recipe.title.clone(),
            country: recipe.country.clone(),
            calories: recipe.calories,
            protein: recipe.protein,
            carbs: recipe.carbs,
            fat: recipe.fat,
            fiber: recipe.fiber,
            sugar: recipe.sugar,
            sodium: recipe.sodium,
            ingredients: recipe.ingredients.join(INGREDIENT_SEPARATOR),
            instructions: recipe.directions.join(DIRECTION_SEPARATOR),
            image: image.filter(|name| !name.is_empty()),
        }
    }
}
