use crate::error::{MealLogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// レシピファイルの既定パス
pub const DEFAULT_RECIPES_FILE: &str = "recipes.json";

/// ログファイルの既定パス
pub const DEFAULT_LOG_FILE: &str = "food_log.xlsx";

/// レシピファイルのパスを上書きする環境変数
pub const RECIPES_ENV: &str = "MEAL_LOG_RECIPES";

/// ログファイルのパスを上書きする環境変数
pub const LOG_FILE_ENV: &str = "MEAL_LOG_FILE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_recipes_path")]
    pub recipes_path: PathBuf,
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipes_path: default_recipes_path(),
            log_path: default_log_path(),
        }
    }
}

fn default_recipes_path() -> PathBuf {
    PathBuf::from(DEFAULT_RECIPES_FILE)
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 読み込みに失敗したら既定値とエラーを返す
    pub fn load_or_default() -> (Self, Option<MealLogError>) {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn load_from_or_default(config_path: &Path) -> (Self, Option<MealLogError>) {
        match Self::load_from(config_path) {
            Ok(config) => (config, None),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "config unreadable, using defaults");
                (Self::default(), Some(e))
            }
        }
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MealLogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("meal-log").join("config.json"))
    }

    pub fn set_recipes_path(&mut self, path: PathBuf) -> Result<()> {
        self.recipes_path = path;
        self.save()
    }

    pub fn set_log_path(&mut self, path: PathBuf) -> Result<()> {
        self.log_path = path;
        self.save()
    }

    /// 実際に使うパスを決定
    ///
    /// 優先順位: コマンドライン引数 > 環境変数 > 設定ファイル
    pub fn resolve(&self, recipes: Option<PathBuf>, log: Option<PathBuf>) -> Settings {
        self.resolve_with(recipes, log, env_path)
    }

    /// 環境変数の参照先を差し替えてパスを決定
    pub fn resolve_with<F>(&self, recipes: Option<PathBuf>, log: Option<PathBuf>, lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        Settings {
            recipes_path: recipes
                .or_else(|| lookup(RECIPES_ENV))
                .unwrap_or_else(|| self.recipes_path.clone()),
            log_path: log
                .or_else(|| lookup(LOG_FILE_ENV))
                .unwrap_or_else(|| self.log_path.clone()),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// セッションで使うファイルパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub recipes_path: PathBuf,
    pub log_path: PathBuf,
}
