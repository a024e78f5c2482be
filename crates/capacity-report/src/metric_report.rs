//! 兩欄式指標報表（Metric, Value）

use capacity_core::{CapacityResult, MetricRow};
use std::path::Path;

use crate::{finish_csv, Result};

/// 預設報表檔名
pub const DEFAULT_FILE_NAME: &str = "capacity_report.csv";

/// 報表標題列
pub const HEADER: [&str; 2] = ["Metric", "Value"];

/// 單次計算結果的指標報表
#[derive(Debug, Clone)]
pub struct MetricReport {
    result: CapacityResult,
    rows: Vec<MetricRow>,
}

impl MetricReport {
    pub fn from_result(result: &CapacityResult) -> Self {
        Self {
            result: result.clone(),
            rows: result.metric_rows(),
        }
    }

    /// 報表列（依結果欄位順序）
    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    /// 輸出 CSV：標題列後每個欄位一列
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;
        for row in &self.rows {
            let value = row.value.to_string();
            writer.write_record([row.metric, value.as_str()])?;
        }
        finish_csv(writer)
    }

    /// 寫入 CSV 檔案
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_csv()?)?;
        tracing::info!("報表已輸出: {}", path.display());
        Ok(())
    }

    /// 輸出完整結果的 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.result)?)
    }

    /// 輸出指標列的 JSON（`[{"metric": ..., "value": ...}]`）
    pub fn rows_to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.rows)?)
    }
}
