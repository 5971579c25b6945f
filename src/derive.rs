//! 食事記録の生成

use chrono::Local;
use meal_log_common::{LogRecord, Recipe, DATE_FORMAT};

/// 現在時刻の文字列（`YYYY-MM-DD HH:MM:SS`、ローカル時刻）
pub fn now_timestamp() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// 選択したレシピと添付画像名から記録を生成
pub fn add_meal(recipe: &Recipe, image_name: Option<String>) -> LogRecord {
    LogRecord::from_recipe(recipe, image_name, now_timestamp())
}
