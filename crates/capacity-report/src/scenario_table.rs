//! 情境比較表（每個情境一列、每個結果欄位一欄）

use capacity_core::{CapacityResult, MetricValue, ResultField};

use crate::{finish_csv, Result};

/// 情境比較表
#[derive(Debug, Clone)]
pub struct ScenarioTable {
    rows: Vec<Vec<MetricValue>>,
}

impl ScenarioTable {
    pub fn from_results(results: &[CapacityResult]) -> Self {
        let rows = results
            .iter()
            .map(|result| {
                ResultField::ALL
                    .iter()
                    .map(|&field| result.value(field))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// 欄位標題
    pub fn headers() -> Vec<&'static str> {
        ResultField::ALL.iter().map(|field| field.label()).collect()
    }

    pub fn rows(&self) -> &[Vec<MetricValue>] {
        &self.rows
    }

    /// 讀取單一欄（例如各情境的總包裝單位）
    pub fn column(&self, field: ResultField) -> Vec<MetricValue> {
        let Some(position) = ResultField::ALL.iter().position(|&f| f == field) else {
            return Vec::new();
        };
        self.rows.iter().map(|row| row[position]).collect()
    }

    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(Self::headers())?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|value| value.to_string()))?;
        }
        finish_csv(writer)
    }
}
