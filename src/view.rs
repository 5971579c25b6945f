//! 表示用の整形（ログ一覧・レシピ詳細）

use meal_log_common::{LogRecord, Recipe};
use std::fmt::Write;

/// 数値表示（整数値は小数点なし）
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// ログ1件を1行に整形
pub fn format_log_line(index: usize, record: &LogRecord) -> String {
    let mut line = format!(
        "{:>3}. {}  {} ({})  {}kcal  P{}g C{}g F{}g 繊維{}g 糖{}g 塩{}mg",
        index,
        record.date,
        record.meal,
        record.country,
        format_number(record.calories),
        format_number(record.protein),
        format_number(record.carbs),
        format_number(record.fat),
        format_number(record.fiber),
        format_number(record.sugar),
        format_number(record.sodium),
    );
    if let Some(image) = &record.image {
        let _ = write!(line, "  📷 {}", image);
    }
    line
}

/// ログ一覧（番号は全体の通し番号）
pub fn format_log_table(records: &[LogRecord], first_index: usize) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let _ = writeln!(out, "{}", format_log_line(first_index + i, record));
    }
    out
}

/// レシピ詳細
pub fn format_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", recipe.title, recipe.country);
    let _ = writeln!(
        out,
        "  カロリー: {}kcal / たんぱく質: {}g / 炭水化物: {}g / 脂質: {}g",
        format_number(recipe.calories),
        format_number(recipe.protein),
        format_number(recipe.carbs),
        format_number(recipe.fat),
    );
    let _ = writeln!(
        out,
        "  食物繊維: {}g / 糖質: {}g / ナトリウム: {}mg",
        format_number(recipe.fiber),
        format_number(recipe.sugar),
        format_number(recipe.sodium),
    );

    if !recipe.ingredients.is_empty() {
        let _ = writeln!(out, "  材料:");
        for ingredient in &recipe.ingredients {
            let _ = writeln!(out, "    - {}", ingredient);
        }
    }

    if !recipe.directions.is_empty() {
        let _ = writeln!(out, "  作り方:");
        for (i, step) in recipe.directions.iter().enumerate() {
            let _ = writeln!(out, "    {}. {}", i + 1, step);
        }
    }

    out
}
