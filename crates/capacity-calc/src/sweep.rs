//! 敏感度分析
//!
//! 固定其他參數，逐一替換單一欄位的值並重新計算。

use capacity_core::{
    Applicability, CapacityError, CapacityParameters, CapacityResult, ParameterField,
    SweepDefaults,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculator::CapacityCalculator;

/// 單次分析最多的取樣點數
pub const MAX_SWEEP_POINTS: u64 = 10_000;

/// 分析範圍（含最小值與最大值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepRange {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

impl SweepRange {
    pub fn new(min: Decimal, max: Decimal, step: Decimal) -> Self {
        Self { min, max, step }
    }

    /// 展開為 `min, min + step, ...`，不超過 `max`
    ///
    /// `min > max` 時回傳空序列。
    pub fn values(&self) -> capacity_core::Result<Vec<Decimal>> {
        if self.step <= Decimal::ZERO {
            return Err(CapacityError::invalid("step", "步長必須為正數"));
        }
        if self.min > self.max {
            return Ok(Vec::new());
        }

        let count = self
            .max
            .checked_sub(self.min)
            .and_then(|span| span.checked_div(self.step))
            .and_then(|steps| steps.floor().to_u64())
            .map(|steps| steps.saturating_add(1))
            .filter(|&count| count <= MAX_SWEEP_POINTS)
            .ok_or_else(|| {
                CapacityError::invalid(
                    "step",
                    format!("取樣點數超過上限 {}", MAX_SWEEP_POINTS),
                )
            })?;

        Ok((0..count)
            .map(|index| self.min + self.step * Decimal::from(index))
            .collect())
    }
}

impl From<&SweepDefaults> for SweepRange {
    fn from(defaults: &SweepDefaults) -> Self {
        Self::new(defaults.min, defaults.max, defaults.step)
    }
}

/// 敏感度曲線上的一點
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepPoint {
    pub value: Decimal,
    pub total_packaging_units: u64,
}

/// 敏感度曲線（折線圖輸入）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensitivityCurve {
    pub field: ParameterField,
    pub points: Vec<SweepPoint>,
}

impl SensitivityCurve {
    pub fn values(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn totals(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.total_packaging_units).collect()
    }

    /// 總包裝單位最大的取樣點
    pub fn peak(&self) -> Option<&SweepPoint> {
        self.points.iter().max_by_key(|p| p.total_packaging_units)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// 敏感度分析器
pub struct SensitivitySweep;

impl SensitivitySweep {
    /// 對每個值重新計算總包裝單位（依輸入順序，保留重複值）
    ///
    /// `base` 不會被修改，每次計算使用獨立副本。
    pub fn run(
        base: &CapacityParameters,
        field: ParameterField,
        values: &[Decimal],
    ) -> capacity_core::Result<Vec<u64>> {
        tracing::info!("敏感度分析: 欄位 {}, 取樣 {} 點", field, values.len());

        values
            .iter()
            .map(|&value| {
                Self::evaluate_at(base, field, value).map(|result| result.total_packaging_units)
            })
            .collect()
    }

    /// 替代包裝總數的敏感度（未啟用替代包裝時每點皆為不適用）
    pub fn run_alternative(
        base: &CapacityParameters,
        field: ParameterField,
        values: &[Decimal],
    ) -> capacity_core::Result<Vec<Applicability<u64>>> {
        values
            .iter()
            .map(|&value| {
                Self::evaluate_at(base, field, value).map(|result| result.alt_total_packaging_units())
            })
            .collect()
    }

    /// 在單一取樣值上計算完整結果
    pub fn evaluate_at(
        base: &CapacityParameters,
        field: ParameterField,
        value: Decimal,
    ) -> capacity_core::Result<CapacityResult> {
        let mut params = base.clone();
        field.apply(&mut params, value)?;
        CapacityCalculator::compute(&params)
    }

    /// 依範圍展開並產生曲線
    pub fn curve(
        base: &CapacityParameters,
        field: ParameterField,
        range: &SweepRange,
    ) -> capacity_core::Result<SensitivityCurve> {
        let values = range.values()?;
        let totals = Self::run(base, field, &values)?;

        let points = values
            .into_iter()
            .zip(totals)
            .map(|(value, total_packaging_units)| SweepPoint {
                value,
                total_packaging_units,
            })
            .collect();

        Ok(SensitivityCurve { field, points })
    }
}
