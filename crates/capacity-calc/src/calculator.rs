//! 容量主計算器

use capacity_core::{Applicability, CapacityParameters, CapacityResult, PackagingRequirement};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::cost::CostAnalyzer;

/// 容量計算器
pub struct CapacityCalculator;

impl CapacityCalculator {
    /// 主計算入口
    ///
    /// 先驗證所有參數，任何運算之前即拒絕無效輸入。
    pub fn compute(params: &CapacityParameters) -> capacity_core::Result<CapacityResult> {
        if let Err(err) = params.validate() {
            tracing::warn!("參數驗證失敗: {}", err);
            return Err(err);
        }
        let alternative = params.alternative_packaging()?;

        let daily_production_rate =
            Self::daily_production_rate(params.lot_size, params.working_days_per_week);

        // 標準包裝（永遠計算）
        let standard = Self::packaging_requirement(
            params.lot_size,
            params.parts_per_pu,
            daily_production_rate,
            params.luf_days,
        );

        // 替代包裝（僅在啟用時計算）
        let alternative = match alternative {
            Some(packaging) => Applicability::Applicable(CostAnalyzer::analyze(
                params,
                daily_production_rate,
                &standard,
                packaging,
            )),
            None => Applicability::NotApplicable,
        };

        tracing::debug!(
            "容量計算完成: 批量 {}, 每PU零件 {}, 總包裝單位 {}",
            params.lot_size,
            params.parts_per_pu,
            standard.total_packaging_units
        );

        Ok(CapacityResult::new(
            params,
            daily_production_rate,
            standard,
            alternative,
        ))
    }

    /// 每日產量 = 批量 / 每週工作天數（不取整）
    pub fn daily_production_rate(lot_size: Decimal, working_days_per_week: u32) -> Decimal {
        (lot_size / Decimal::from(working_days_per_week)).normalize()
    }

    /// 單一包裝方案的包裝單位需求
    ///
    /// 呼叫前參數須已通過驗證，各計數在驗證上限內不會溢位。
    pub(crate) fn packaging_requirement(
        lot_size: Decimal,
        parts_per_pu: u32,
        daily_production_rate: Decimal,
        luf_days: u32,
    ) -> PackagingRequirement {
        let parts = Decimal::from(parts_per_pu);

        let pu_per_lot = ceil_div(lot_size, parts);
        let daily_pu_need_per_luf = ceil_div(daily_production_rate, parts);
        let luf_need_of_pu = daily_pu_need_per_luf * u64::from(luf_days);

        // 安全庫存固定為兩批
        let safety_stock_pu = pu_per_lot * 2;

        PackagingRequirement {
            pu_per_lot,
            daily_pu_need_per_luf,
            luf_need_of_pu,
            safety_stock_pu,
            total_packaging_units: luf_need_of_pu + safety_stock_pu,
        }
    }
}

/// 無條件進位的除法
///
/// Decimal 除法在 28 位有效數字處捨入，捨入後若商乘回除數仍小於被除數則再進一位。
fn ceil_div(numerator: Decimal, divisor: Decimal) -> u64 {
    let mut quotient = (numerator / divisor).ceil();
    if quotient * divisor < numerator {
        quotient += Decimal::ONE;
    }
    quotient.to_u64().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn base() -> CapacityParameters {
        CapacityParameters::new(Decimal::from(1000), 10, 5, 5)
    }

    #[test]
    fn test_standard_path() {
        let result = CapacityCalculator::compute(&base()).unwrap();

        assert_eq!(result.pu_per_lot, 100);
        assert_eq!(result.daily_production_rate, Decimal::new(2000, 1));
        assert_eq!(result.daily_pu_need_per_luf, 20);
        assert_eq!(result.luf_need_of_pu, 100);
        assert_eq!(result.safety_stock_pu, 200);
        assert_eq!(result.total_packaging_units, 300);
        assert!(!result.use_alternative);
        assert!(result.alternative.is_not_applicable());
        assert!(result.break_even_point().is_not_applicable());
    }

    #[test]
    fn test_echoes_inputs() {
        let result = CapacityCalculator::compute(&base()).unwrap();

        assert_eq!(result.lot_size, Decimal::from(1000));
        assert_eq!(result.parts_per_pu, 10);
        assert_eq!(result.working_days_per_week, 5);
        assert_eq!(result.luf_days, 5);
    }

    #[rstest]
    // 1000/3 = 333.33 → 34 個/日
    #[case(1000, 10, 3, 5, 100, 34, 170, 370)]
    #[case(999, 10, 5, 2, 100, 20, 40, 240)]
    #[case(100, 100, 7, 30, 1, 1, 30, 32)]
    #[case(10000, 1, 1, 1, 10000, 10000, 10000, 30000)]
    fn test_ceiling_cases(
        #[case] lot_size: i64,
        #[case] parts_per_pu: u32,
        #[case] working_days: u32,
        #[case] luf_days: u32,
        #[case] pu_per_lot: u64,
        #[case] daily_pu: u64,
        #[case] luf_need: u64,
        #[case] total: u64,
    ) {
        let params =
            CapacityParameters::new(Decimal::from(lot_size), parts_per_pu, working_days, luf_days);
        let result = CapacityCalculator::compute(&params).unwrap();

        assert_eq!(result.pu_per_lot, pu_per_lot);
        assert_eq!(result.daily_pu_need_per_luf, daily_pu);
        assert_eq!(result.luf_need_of_pu, luf_need);
        assert_eq!(result.total_packaging_units, total);
    }

    #[test]
    fn test_fractional_lot_size() {
        let params = CapacityParameters::new(Decimal::new(105, 1), 10, 5, 1);
        let result = CapacityCalculator::compute(&params).unwrap();

        // 10.5 個零件需要 2 個包裝單位
        assert_eq!(result.pu_per_lot, 2);
        assert_eq!(result.daily_production_rate, Decimal::new(21, 1));
        assert_eq!(result.daily_pu_need_per_luf, 1);
    }

    #[test]
    fn test_tiny_lot_size_still_needs_one_unit() {
        let params = CapacityParameters::new(Decimal::new(1, 28), 7, 3, 1);
        let result = CapacityCalculator::compute(&params).unwrap();

        assert_eq!(result.pu_per_lot, 1);
        assert_eq!(result.safety_stock_pu, 2);
    }

    #[test]
    fn test_zero_parts_per_pu_rejected() {
        let params = CapacityParameters::new(Decimal::from(1000), 0, 5, 5);
        let err = CapacityCalculator::compute(&params).unwrap_err();

        assert_eq!(err.field(), "parts_per_pu");
        assert!(err.to_string().contains("parts_per_pu"));
    }

    #[test]
    fn test_largest_inputs_do_not_overflow() {
        use capacity_core::limits;

        let params = CapacityParameters::new(
            Decimal::from(limits::MAX_LOT_SIZE),
            1,
            1,
            limits::MAX_LUF_DAYS,
        )
        .with_alternative(1, Decimal::from(limits::MAX_PRICE), Decimal::new(1, 4));
        let result = CapacityCalculator::compute(&params).unwrap();

        assert_eq!(
            result.total_packaging_units,
            limits::MAX_LOT_SIZE * u64::from(limits::MAX_LUF_DAYS) + limits::MAX_LOT_SIZE * 2
        );
        assert!(result.break_even_point().is_applicable());
    }

    proptest! {
        #[test]
        fn prop_pu_per_lot_is_ceiling(lot_size in 1u64..1_000_000, parts_per_pu in 1u32..10_000) {
            let params = CapacityParameters::new(Decimal::from(lot_size), parts_per_pu, 5, 5);
            let result = CapacityCalculator::compute(&params).unwrap();
            let parts = u64::from(parts_per_pu);

            prop_assert!(result.pu_per_lot * parts >= lot_size);
            prop_assert!((result.pu_per_lot - 1) * parts < lot_size);
        }

        #[test]
        fn prop_total_identity(
            lot_size in 1u64..1_000_000,
            parts_per_pu in 1u32..500,
            working_days in 1u32..=7,
            luf_days in 1u32..60,
        ) {
            let params = CapacityParameters::new(
                Decimal::from(lot_size),
                parts_per_pu,
                working_days,
                luf_days,
            );
            let result = CapacityCalculator::compute(&params).unwrap();

            prop_assert_eq!(
                result.total_packaging_units,
                result.luf_need_of_pu + 2 * result.pu_per_lot
            );
            prop_assert_eq!(
                result.luf_need_of_pu,
                result.daily_pu_need_per_luf * u64::from(luf_days)
            );
        }
    }
}
