//! ログExcelの列レイアウト
//!
//! 列名・列順・列幅の定義。読み込み（calamine）と書き出し
//! （rust_xlsxwriter）の両方がこの定義を参照する。

use crate::types::LogRecord;

/// 列の値の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    /// 空セルは None
    OptionalText,
}

/// 列定義
#[derive(Debug, Clone, Copy)]
pub struct LogColumn {
    pub header: &'static str,
    pub kind: ColumnKind,
    /// Excel列幅（文字数単位）
    pub width: f64,
}

const fn column(header: &'static str, kind: ColumnKind, width: f64) -> LogColumn {
    LogColumn { header, kind, width }
}

/// ログの列（この順で書き出す）
pub const LOG_COLUMNS: [LogColumn; 13] = [
    column("Date", ColumnKind::Text, 20.0),
    column("Meal", ColumnKind::Text, 28.0),
    column("Country", ColumnKind::Text, 14.0),
    column("Calories", ColumnKind::Number, 10.0),
    column("Protein (g)", ColumnKind::Number, 12.0),
    column("Carbs (g)", ColumnKind::Number, 10.0),
    column("Fat (g)", ColumnKind::Number, 9.0),
    column("Fiber (g)", ColumnKind::Number, 10.0),
    column("Sugar (g)", ColumnKind::Number, 10.0),
    column("Sodium (mg)", ColumnKind::Number, 12.0),
    column("Ingredients", ColumnKind::Text, 40.0),
    column("Instructions", ColumnKind::Text, 60.0),
    column("Image", ColumnKind::OptionalText, 20.0),
];

/// セル値
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
    Empty,
}

/// 列名に対応する値を取得
pub fn cell_value<'a>(record: &'a LogRecord, header: &str) -> CellValue<'a> {
    match header {
        "Date" => CellValue::Text(&record.date),
        "Meal" => CellValue::Text(&record.meal),
        "Country" => CellValue::Text(&record.country),
        "Calories" => CellValue::Number(record.calories),
        "Protein (g)" => CellValue::Number(record.protein),
        "Carbs (g)" => CellValue::Number(record.carbs),
        "Fat (g)" => CellValue::Number(record.fat),
        "Fiber (g)" => CellValue::Number(record.fiber),
        "Sugar (g)" => CellValue::Number(record.sugar),
        "Sodium (mg)" => CellValue::Number(record.sodium),
        "Ingredients" => CellValue::Text(&record.ingredients),
        "Instructions" => CellValue::Text(&record.instructions),
        "Image" => match record.image.as_deref() {
            Some(name) => CellValue::Text(name),
            None => CellValue::Empty,
        },
        _ => CellValue::Empty,
    }
}

/// 列名に対応するテキスト項目を設定（未知の列・数値列は無視）
pub fn set_text(record: &mut LogRecord, header: &str, value: String) {
    match header {
        "Date" => record.date = value,
        "Meal" => record.meal = value,
        "Country" => record.country = value,
        "Ingredients" => record.ingredients = value,
        "Instructions" => record.instructions = value,
        "Image" => record.image = Some(value).filter(|v| !v.is_empty()),
        _ => {}
    }
}

/// 列名に対応する数値項目を設定（未知の列・テキスト列は無視）
pub fn set_number(record: &mut LogRecord, header: &str, value: f64) {
    match header {
        "Calories" => record.calories = value,
        "Protein (g)" => record.protein = value,
        "Carbs (g)" => record.carbs = value,
        "Fat (g)" => record.fat = value,
        "Fiber (g)" => record.fiber = value,
        "Sugar (g)" => record.sugar = value,
        "Sodium (mg)" => record.sodium = value,
        _ => {}
    }
}

/// 列名から列定義を検索
pub fn find_column(header: &str) -> Option<&'static LogColumn> {
    LOG_COLUMNS.iter().find(|c| c.header == header.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_column_has_a_value() {
        let record = LogRecord {
            image: Some("a.png".into()),
            ..Default::default()
        };
        for col in LOG_COLUMNS.iter() {
            let value = cell_value(&record, col.header);
            assert_ne!(value, CellValue::Empty, "列 {} の値が取れない", col.header);
        }
    }

    #[test]
    fn test_kind_matches_value() {
        let record = LogRecord::default();
        for col in LOG_COLUMNS.iter() {
            match (col.kind, cell_value(&record, col.header)) {
                (ColumnKind::Number, CellValue::Number(_)) => {}
                (ColumnKind::Text, CellValue::Text(_)) => {}
                (ColumnKind::OptionalText, CellValue::Empty) => {}
                (kind, value) => panic!("{}: {:?} / {:?}", col.header, kind, value),
            }
        }
    }

    #[test]
    fn test_setters_round_trip() {
        let mut record = LogRecord::default();
        set_text(&mut record, "Meal", "Pho".into());
        set_text(&mut record, "Image", String::new());
        set_number(&mut record, "Sodium (mg)", 820.0);
        set_number(&mut record, "Unknown", 1.0);

        assert_eq!(cell_value(&record, "Meal"), CellValue::Text("Pho"));
        assert_eq!(cell_value(&record, "Image"), CellValue::Empty);
        assert_eq!(cell_value(&record, "Sodium (mg)"), CellValue::Number(820.0));
    }

    #[test]
    fn test_find_column_trims_header() {
        assert_eq!(find_column(" Fiber (g) ").map(|c| c.kind), Some(ColumnKind::Number));
        assert!(find_column("Notes").is_none());
    }
}
