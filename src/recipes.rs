//! レシピ読み込みモジュール
//!
//! recipes.json（レシピオブジェクトの配列）を1回だけ読み込み、
//! セッション中は読み取り専用で保持する。

use crate::error::{MealLogError, Result};
use meal_log_common::Recipe;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// レシピ一覧（読み込み順を保持）
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// レシピファイルを読み込み
    ///
    /// ファイルがない場合は `RecipesNotFound`、JSONが不正な場合は `RecipesInvalid`。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MealLogError::RecipesNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let recipes: Vec<Recipe> = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                MealLogError::Io(e.into())
            } else {
                MealLogError::RecipesInvalid(format!("{} ({})", path.display(), e))
            }
        })?;

        tracing::debug!(path = %path.display(), count = recipes.len(), "recipes loaded");
        Ok(Self::new(recipes))
    }

    /// レシピファイルを読み込み、失敗時は空の一覧とエラーを返す
    pub fn load_or_empty(path: &Path) -> (Self, Option<MealLogError>) {
        match Self::load(path) {
            Ok(store) => (store, None),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "recipes unavailable");
                (Self::default(), Some(e))
            }
        }
    }

    /// タイトルで検索（重複時は先頭）
    pub fn find(&self, title: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.title == title)
    }

    /// 選択肢として表示するタイトル一覧
    pub fn titles(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.title.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
