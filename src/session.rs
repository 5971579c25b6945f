//! セッション状態
//!
//! レシピ一覧と食事ログを1セッション分だけ保持し、各操作に明示的に渡す。
//! 読み込み失敗は致命的エラーにせず、空の状態と通知（Notice）に落とす。

use crate::attachment::attach_image;
use crate::config::Settings;
use crate::derive;
use crate::error::{MealLogError, Result};
use crate::log_store::LogStore;
use crate::recipes::RecipeStore;
use meal_log_common::{health_tips, LogRecord, Tip};
use std::path::{Path, PathBuf};

/// 通知レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// ユーザーに表示する通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// 保存結果
#[derive(Debug)]
pub enum SaveStatus {
    Saved(PathBuf),
    Failed(MealLogError),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved(_))
    }
}

/// 「食事を追加」の結果
#[derive(Debug)]
pub struct AddOutcome {
    pub record: LogRecord,
    pub save: SaveStatus,
    pub tips: Vec<Tip>,
}

pub struct Session {
    settings: Settings,
    recipes: RecipeStore,
    log: LogStore,
    notices: Vec<Notice>,
}

impl Session {
    /// レシピとログを読み込んでセッションを開始
    pub fn open(settings: &Settings) -> Self {
        let mut notices = Vec::new();

        let (recipes, recipe_error) = RecipeStore::load_or_empty(&settings.recipes_path);
        if let Some(e) = recipe_error {
            notices.push(Notice::error(e.to_string()));
        }

        let (log, log_error) = LogStore::load_or_empty(&settings.log_path);
        if let Some(e) = log_error {
            notices.push(Notice::warning(format!(
                "{} を読み込めません。空のログで開始します。({})",
                settings.log_path.display(),
                e
            )));
        }

        Self {
            settings: settings.clone(),
            recipes,
            log,
            notices,
        }
    }

    pub fn with_stores(settings: &Settings, recipes: RecipeStore, log: LogStore) -> Self {
        Self {
            settings: settings.clone(),
            recipes,
            log,
            notices: Vec::new(),
        }
    }

    /// 食事を追加してログを保存
    ///
    /// レシピ未登録・画像不正は `Err`（何も追加しない）。
    /// 保存失敗は `Err` にせず `SaveStatus::Failed` で返し、メモリ上の記録は残す。
    pub fn add_meal(&mut self, title: &str, image: Option<&Path>) -> Result<AddOutcome> {
        if self.recipes.is_empty() {
            return Err(MealLogError::NoRecipes);
        }

        let recipe = self
            .recipes
            .find(title)
            .ok_or_else(|| MealLogError::RecipeNotFound(title.to_string()))?;

        let image_name = match image {
            Some(path) => Some(attach_image(path)?.file_name),
            None => None,
        };

        let record = derive::add_meal(recipe, image_name);
        self.log.append(record.clone());
        tracing::info!(meal = %record.meal, date = %record.date, "meal added");

        let save = match self.log.save(&self.settings.log_path) {
            Ok(()) => SaveStatus::Saved(self.settings.log_path.clone()),
            Err(e) => {
                tracing::error!(error = %e, "failed to save log");
                SaveStatus::Failed(e)
            }
        };

        let tips = health_tips(&record);
        Ok(AddOutcome { record, save, tips })
    }

    pub fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    pub fn log(&self) -> &LogStore {
        &self.log
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meal_log_common::Recipe;
    use tempfile::tempdir;

    fn settings_in(dir: &Path) -> Settings {
        Settings {
            recipes_path: dir.join("recipes.json"),
            log_path: dir.join("food_log.xlsx"),
        }
    }

    #[test]
    fn test_open_without_files() {
        let dir = tempdir().unwrap();
        let session = Session::open(&settings_in(dir.path()));

        assert!(session.recipes().is_empty());
        assert!(session.log().is_empty());
        // レシピファイルなしは通知、ログファイルなしは通知しない
        assert_eq!(session.notices().len(), 1);
        assert_eq!(session.notices()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_add_meal_without_recipes() {
        let dir = tempdir().unwrap();
        let mut session = Session::open(&settings_in(dir.path()));

        let result = session.add_meal("Anything", None);
        assert!(matches!(result, Err(MealLogError::NoRecipes)));
        assert!(session.log().is_empty());
    }

    #[test]
    fn test_add_unknown_recipe() {
        let dir = tempdir().unwrap();
        let settings = settings_in(dir.path());
        let recipes = RecipeStore::new(vec![Recipe::new("Paella")]);
        let mut session = Session::with_stores(&settings, recipes, LogStore::default());

        let result = session.add_meal("Pizza", None);
        assert!(matches!(result, Err(MealLogError::RecipeNotFound(_))));
        assert!(session.log().is_empty());
        assert!(!settings.log_path.exists());
    }

    #[test]
    fn test_add_meal_with_missing_image_appends_nothing() {
        let dir = tempdir().unwrap();
        let settings = settings_in(dir.path());
        let recipes = RecipeStore::new(vec![Recipe::new("Paella")]);
        let mut session = Session::with_stores(&settings, recipes, LogStore::default());

        let result = session.add_meal("Paella", Some(&dir.path().join("missing.png")));
        assert!(matches!(result, Err(MealLogError::FileNotFound(_))));
        assert!(session.log().is_empty());
    }

    #[test]
    fn test_save_failure_keeps_record_in_memory() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            recipes_path: dir.path().join("recipes.json"),
            log_path: dir.path().join("no_such_dir").join("food_log.xlsx"),
        };
        let recipes = RecipeStore::new(vec![Recipe::new("Paella")]);
        let mut session = Session::with_stores(&settings, recipes, LogStore::default());

        let outcome = session.add_meal("Paella", None).unwrap();
        assert!(matches!(outcome.save, SaveStatus::Failed(MealLogError::LogWrite(_))));
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log().records()[0], outcome.record);
    }
}
