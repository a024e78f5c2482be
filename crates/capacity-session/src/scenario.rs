//! 情境清單

use capacity_core::CapacityResult;
use serde::Serialize;

/// 情境比較中的單一長條
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioTotal {
    /// 情境位置（從 0 開始）
    pub index: usize,
    pub total_packaging_units: u64,
}

/// 情境清單（只能追加）
///
/// 不去重、不設上限、不提供刪除；工作階段結束時隨之丟棄。
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioStore {
    scenarios: Vec<CapacityResult>,
}

impl ScenarioStore {
    /// 創建空的情境清單
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加情境，回傳其位置
    pub fn add_scenario(&mut self, result: CapacityResult) -> usize {
        self.scenarios.push(result);
        let index = self.scenarios.len() - 1;
        tracing::info!(
            "新增情境 #{}: 總包裝單位 {}",
            index,
            self.scenarios[index].total_packaging_units
        );
        index
    }

    /// 所有情境（依加入順序）
    pub fn all_scenarios(&self) -> &[CapacityResult] {
        &self.scenarios
    }

    pub fn get(&self, index: usize) -> Option<&CapacityResult> {
        self.scenarios.get(index)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// 各情境的總包裝單位（長條圖輸入）
    pub fn comparison(&self) -> Vec<ScenarioTotal> {
        self.scenarios
            .iter()
            .enumerate()
            .map(|(index, result)| ScenarioTotal {
                index,
                total_packaging_units: result.total_packaging_units,
            })
            .collect()
    }

    /// 至少兩個情境才值得比較
    pub fn comparison_ready(&self) -> bool {
        self.scenarios.len() > 1
    }
}
