//! # Capacity Report
//!
//! 儀表板資料與報表輸出（指標報表、情境表）

pub mod breakdown;
pub mod metric_report;
pub mod scenario_table;

// Re-export 主要類型
pub use breakdown::{BarEntry, PackagingBreakdown};
pub use metric_report::{MetricReport, DEFAULT_FILE_NAME, HEADER};
pub use scenario_table::ScenarioTable;

/// 報表輸出錯誤
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("CSV 輸出錯誤: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 輸出錯誤: {0}")]
    Json(#[from] serde_json::Error),

    #[error("檔案寫入錯誤: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// 取出 CSV writer 的緩衝內容
pub(crate) fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|err| ReportError::Io(err.into_error()))
}
