//! 食事ログの読み込み・保存
//!
//! ログは1シートのExcel。起動時に全件読み込み、追加のたびに全体を書き直す。
//! 列はヘッダー名で対応付けるので、列順の違いや余分な列があっても読める。

use crate::error::{MealLogError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use meal_log_common::export::log_sheet;
use meal_log_common::layout::{find_column, set_number, set_text, ColumnKind, LogColumn};
use meal_log_common::LogRecord;
use std::path::Path;

/// 食事ログ（挿入順、重複可）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogStore {
    records: Vec<LogRecord>,
}

impl LogStore {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    /// ログファイルを読み込み
    ///
    /// ファイルがなければ空のログ。読めない場合は `LogRead`。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "log file not found, starting empty");
            return Ok(Self::default());
        }

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| MealLogError::LogRead(format!("{}: {}", path.display(), e)))?;

        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range
                .map_err(|e| MealLogError::LogRead(format!("{}: {}", path.display(), e)))?,
            None => return Ok(Self::default()),
        };

        let mut rows = range.rows();
        let columns: Vec<Option<&'static LogColumn>> = match rows.next() {
            Some(header) => header
                .iter()
                .map(|cell| find_column(&cell_text(cell)))
                .collect(),
            None => return Ok(Self::default()),
        };

        let records: Vec<LogRecord> = rows
            .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
            .map(|row| parse_row(row, &columns))
            .collect();

        tracing::debug!(path = %path.display(), count = records.len(), "log loaded");
        Ok(Self::new(records))
    }

    /// ログファイルを読み込み、失敗時は空のログとエラーを返す
    pub fn load_or_empty(path: &Path) -> (Self, Option<MealLogError>) {
        match Self::load(path) {
            Ok(store) => (store, None),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "log unreadable, starting empty");
                (Self::default(), Some(e))
            }
        }
    }

    /// ログ全体をファイルに書き出す
    ///
    /// 失敗してもメモリ上の記録はそのまま。
    pub fn save(&self, path: &Path) -> Result<()> {
        log_sheet::write_log_file(path, &self.records)
            .map_err(|e| MealLogError::LogWrite(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), count = self.records.len(), "log saved");
        Ok(())
    }

    pub fn append(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// 末尾 n 件
    pub fn last(&self, n: usize) -> &[LogRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_row(row: &[Data], columns: &[Option<&'static LogColumn>]) -> LogRecord {
    let mut record = LogRecord::default();

    for (cell, column) in row.iter().zip(columns.iter()) {
        let Some(column) = column else {
            continue;
        };
        match column.kind {
            ColumnKind::Number => set_number(&mut record, column.header, cell_number(cell)),
            ColumnKind::Text | ColumnKind::OptionalText => {
                set_text(&mut record, column.header, cell_text(cell))
            }
        }
    }

    record
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 数値セル（文字列の数値も許容、読めなければ 0）
fn cell_number(cell: &Data) -> f64 {
    match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
