use thiserror::Error;

#[derive(Error, Debug)]
pub enum MealLogError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("レシピファイルが見つかりません: {0}")]
    RecipesNotFound(String),

    #[error("レシピファイルが正しいJSONではありません: {0}")]
    RecipesInvalid(String),

    #[error("レシピが見つかりません: {0}")]
    RecipeNotFound(String),

    #[error("レシピが読み込まれていません。recipes.json を用意してください")]
    NoRecipes,

    #[error("ログ読み込みエラー: {0}")]
    LogRead(String),

    #[error("ログ保存エラー: {0}")]
    LogWrite(String),

    #[error("対応していない画像形式です (jpg/jpeg/png): {0}")]
    UnsupportedImage(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MealLogError>;
