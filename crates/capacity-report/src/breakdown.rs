//! 包裝單位組成（長條圖與圓餅圖資料）

use capacity_core::{CapacityResult, ResultField};
use rust_decimal::Decimal;
use serde::Serialize;

/// 長條圖的一根長條
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarEntry {
    pub metric: &'static str,
    pub value: u64,
}

/// 包裝單位組成
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackagingBreakdown {
    /// LUF 需求、安全庫存、總數
    pub bars: Vec<BarEntry>,

    /// LUF 需求佔比（%，一位小數）
    pub luf_share: Decimal,

    /// 安全庫存佔比（%，與 `luf_share` 合計 100）
    pub safety_share: Decimal,
}

impl PackagingBreakdown {
    pub fn from_result(result: &CapacityResult) -> Self {
        let bars = [
            (ResultField::LufNeedOfPu, result.luf_need_of_pu),
            (ResultField::SafetyStockPu, result.safety_stock_pu),
            (ResultField::TotalPackagingUnits, result.total_packaging_units),
        ]
        .into_iter()
        .map(|(field, value)| BarEntry {
            metric: field.label(),
            value,
        })
        .collect();

        let hundred = Decimal::from(100);
        let whole = Decimal::from(result.luf_need_of_pu) + Decimal::from(result.safety_stock_pu);
        let luf_share = if whole.is_zero() {
            Decimal::ZERO
        } else {
            (Decimal::from(result.luf_need_of_pu) * hundred / whole).round_dp(1)
        };

        Self {
            bars,
            luf_share,
            safety_share: hundred - luf_share,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capacity_calc::CapacityCalculator;
    use capacity_core::CapacityParameters;

    #[test]
    fn test_breakdown() {
        let params = CapacityParameters::new(Decimal::from(1000), 10, 5, 5);
        let result = CapacityCalculator::compute(&params).unwrap();
        let breakdown = PackagingBreakdown::from_result(&result);

        assert_eq!(
            breakdown.bars,
            vec![
                BarEntry { metric: "LUF need of PU", value: 100 },
                BarEntry { metric: "Safety Stock PU", value: 200 },
                BarEntry { metric: "Total Packaging Units", value: 300 },
            ]
        );
        assert_eq!(breakdown.luf_share, Decimal::new(333, 1));
        assert_eq!(breakdown.safety_share, Decimal::new(667, 1));
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let params = CapacityParameters::new(Decimal::from(700), 9, 6, 11);
        let result = CapacityCalculator::compute(&params).unwrap();
        let breakdown = PackagingBreakdown::from_result(&result);

        assert_eq!(breakdown.luf_share + breakdown.safety_share, Decimal::from(100));
    }
}
