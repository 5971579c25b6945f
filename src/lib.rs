//! meal-log
//!
//! レシピ一覧から料理を選んで食事ログ（Excel）に追記し、
//! 栄養値から簡単な健康アドバイスを表示する。

pub mod attachment;
pub mod cli;
pub mod config;
pub mod derive;
pub mod error;
pub mod log_store;
pub mod prompt;
pub mod recipes;
pub mod session;
pub mod view;

pub use meal_log_common::{health_tips, LogRecord, Recipe, Tip};
