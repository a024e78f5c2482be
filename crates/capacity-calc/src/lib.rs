//! # Capacity Calculation Engine
//!
//! 包裝單位容量計算引擎：標準／替代包裝公式、成本比較與敏感度分析

pub mod calculator;
pub mod cost;
pub mod sweep;

// Re-export 主要類型
pub use calculator::CapacityCalculator;
pub use cost::CostAnalyzer;
pub use sweep::{SensitivityCurve, SensitivitySweep, SweepPoint, SweepRange, MAX_SWEEP_POINTS};

use capacity_core::{CapacityParameters, CapacityResult, ParameterField};
use rust_decimal::Decimal;

/// 計算單一參數組合的容量
pub fn compute(params: &CapacityParameters) -> capacity_core::Result<CapacityResult> {
    CapacityCalculator::compute(params)
}

/// 對單一欄位做敏感度分析，回傳每個取樣值的總包裝單位
pub fn sweep(
    base: &CapacityParameters,
    field: ParameterField,
    values: &[Decimal],
) -> capacity_core::Result<Vec<u64>> {
    SensitivitySweep::run(base, field, values)
}
