//! 互動工作階段

use capacity_calc::{CapacityCalculator, SensitivityCurve, SensitivitySweep, SweepRange};
use capacity_core::{CapacityParameters, CapacityResult, DashboardConfig, ParameterField};

use crate::scenario::ScenarioStore;

/// 工作階段上下文
///
/// 持有配置與情境清單，由呼叫端建立並在工作階段結束時丟棄。
#[derive(Debug, Clone, Default)]
pub struct CapacitySession {
    config: DashboardConfig,
    scenarios: ScenarioStore,
}

impl CapacitySession {
    /// 創建新的工作階段
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            scenarios: ScenarioStore::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn scenarios(&self) -> &ScenarioStore {
        &self.scenarios
    }

    /// 以目前參數重新計算（不影響情境清單）
    pub fn evaluate(&self, params: &CapacityParameters) -> capacity_core::Result<CapacityResult> {
        CapacityCalculator::compute(params)
    }

    /// 計算並加入情境清單
    ///
    /// 參數無效時不加入任何情境。
    pub fn add_scenario(
        &mut self,
        params: &CapacityParameters,
    ) -> capacity_core::Result<&CapacityResult> {
        let result = CapacityCalculator::compute(params)?;
        let index = self.scenarios.add_scenario(result);
        Ok(&self.scenarios.all_scenarios()[index])
    }

    /// 指定欄位與範圍的敏感度分析
    pub fn sensitivity(
        &self,
        params: &CapacityParameters,
        field: ParameterField,
        range: &SweepRange,
    ) -> capacity_core::Result<SensitivityCurve> {
        SensitivitySweep::curve(params, field, range)
    }

    /// 使用配置中的預設欄位與範圍做敏感度分析
    pub fn default_sensitivity(
        &self,
        params: &CapacityParameters,
    ) -> capacity_core::Result<SensitivityCurve> {
        let defaults = &self.config.sweep;
        self.sensitivity(params, defaults.field, &SweepRange::from(defaults))
    }

    /// 結束工作階段，取出情境清單
    pub fn into_scenarios(self) -> ScenarioStore {
        self.scenarios
    }
}
