use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

/// 清單抓取策略：完整資料或精簡清單加逐筆查詢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// 一次抓回完整欄位，不需逐筆查詢
    Bulk,
    /// 精簡清單 (view=genus)，每筆再查詳細資料
    ShortList,
}

/// 輸出表的一列，欄位宣告順序即 CSV 欄位順序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    pub name: String,
    pub diet: String,
    pub period: String,
    pub lived_in: String,
    pub r#type: String,
    pub length: String,
    pub taxonomy: String,
    pub named_by: String,
    pub species: String,
    pub link: String,
}

impl SheetRow {
    pub const HEADERS: [&'static str; 10] = [
        "name", "diet", "period", "lived_in", "type", "length", "taxonomy", "named_by", "species",
        "link",
    ];
}

/// 單次匯出執行結果摘要
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub output_path: String,
    pub rows_written: usize,
    pub skipped: Vec<String>,
    pub failed_rows: usize,
}
