//! 食事ログExcel生成（共通ライブラリ）
//!
//! layout.rs の列定義を使用して1シートの表形式Excelを生成

use crate::error::{Error, Result};
use crate::layout::{cell_value, CellValue, LOG_COLUMNS};
use crate::types::LogRecord;
use rust_xlsxwriter::*;
use std::borrow::Cow;
use std::path::Path;

/// ログシート名
pub const LOG_SHEET_NAME: &str = "Log";

/// xlsxのセルに入る最大文字数
pub const MAX_CELL_CHARS: usize = 32_767;

/// Excelをバッファに生成
///
/// 1行目がヘッダー、2行目以降が記録（挿入順）。
/// 空文字列と画像なしは空セルとして書く。
/// セル上限を超えるテキストは `MAX_CELL_CHARS` 文字で切り詰める。
pub fn generate_log_buffer(records: &[LogRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(LOG_SHEET_NAME)
        .map_err(|e| sheet_error(format!("シート名設定エラー: {}", e)))?;

    for (col, column) in LOG_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, column.width)
            .map_err(|e| sheet_error(format!("列幅設定エラー: {}", e)))?;
        worksheet.write_string_with_format(0, col, column.header, &header_format)
            .map_err(|e| sheet_error(format!("ヘッダー書き込みエラー: {}", e)))?;
    }
    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| sheet_error(format!("ウィンドウ枠固定エラー: {}", e)))?;

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, column) in LOG_COLUMNS.iter().enumerate() {
            let col = col as u16;
            match cell_value(record, column.header) {
                CellValue::Text(text) if !text.is_empty() => {
                    worksheet.write_string(row, col, fit_cell(text))
                        .map_err(|e| sheet_error(format!("値書き込みエラー ({}行目): {}", row + 1, e)))?;
                }
                CellValue::Number(value) => {
                    worksheet.write_number(row, col, value)
                        .map_err(|e| sheet_error(format!("値書き込みエラー ({}行目): {}", row + 1, e)))?;
                }
                CellValue::Text(_) | CellValue::Empty => {}
            }
        }
    }

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| sheet_error(format!("Excel保存エラー: {}", e)))
}

/// Excelを生成してファイルに書き出す（全体を上書き）
///
/// バッファ生成に失敗した場合はファイルに触れない。
pub fn write_log_file(path: &Path, records: &[LogRecord]) -> Result<()> {
    let buffer = generate_log_buffer(records)?;
    std::fs::write(path, buffer)?;
    Ok(())
}

/// セル上限に収まるよう文字単位で切り詰める
pub fn fit_cell(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => Cow::Owned(text[..end].to_string()),
        None => Cow::Borrowed(text),
    }
}

fn sheet_error(message: String) -> Error {
    Error::Sheet(message)
}
