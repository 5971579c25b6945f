//! Meal Log Common Library
//!
//! CLIと保存処理で共有される型とユーティリティ

pub mod types;
pub mod layout;
pub mod tips;
pub mod error;
pub mod export;

pub use types::{LogRecord, Recipe, DATE_FORMAT};
pub use layout::{LogColumn, ColumnKind, LOG_COLUMNS};
pub use tips::{health_tips, Tip};
pub use error::{Error, Result};
