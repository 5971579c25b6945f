//! 対話式入力モジュール
//!
//! レシピ選択と画像パス入力（「食事を追加」画面の代わり）

use crate::error::{MealLogError, Result};
use crate::recipes::RecipeStore;
use dialoguer::{FuzzySelect, Input};
use std::path::PathBuf;

/// レシピを選択（Esc でキャンセル → None）
pub fn select_recipe(recipes: &RecipeStore) -> Result<Option<String>> {
    let titles = recipes.titles();

    let selected = FuzzySelect::new()
        .with_prompt("料理を選択")
        .items(&titles)
        .default(0)
        .interact_opt()
        .map_err(|e| MealLogError::Prompt(e.to_string()))?;

    Ok(selected.map(|i| titles[i].to_string()))
}

/// 画像パスを入力（空入力は画像なし）
pub fn prompt_image_path() -> Result<Option<PathBuf>> {
    let input: String = Input::new()
        .with_prompt("食事画像 (jpg/jpeg/png、Enterでスキップ)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| MealLogError::Prompt(e.to_string()))?;

    Ok(parse_image_input(&input))
}

/// 入力文字列を画像パスに変換
///
/// ドラッグ&ドロップで付く引用符は外す。
pub fn parse_image_input(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim().trim_matches(|c| c == '"' || c == '\'').trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_input() {
        assert_eq!(parse_image_input(""), None);
        assert_eq!(parse_image_input("   "), None);
        assert_eq!(parse_image_input("\"\""), None);
        assert_eq!(parse_image_input(" lunch.png "), Some(PathBuf::from("lunch.png")));
        assert_eq!(
            parse_image_input("'/home/me/My Photos/dinner.jpg'"),
            Some(PathBuf::from("/home/me/My Photos/dinner.jpg"))
        );
    }
}
