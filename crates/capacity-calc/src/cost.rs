//! 替代包裝成本分析

use capacity_core::{AlternativeAnalysis, AlternativePackaging, CapacityParameters, PackagingRequirement};
use rust_decimal::Decimal;

use crate::calculator::CapacityCalculator;

/// 成本分析器
pub struct CostAnalyzer;

impl CostAnalyzer {
    /// 以替代包裝重算包裝需求，並比較兩方案成本
    pub fn analyze(
        params: &CapacityParameters,
        daily_production_rate: Decimal,
        standard: &PackagingRequirement,
        packaging: AlternativePackaging,
    ) -> AlternativeAnalysis {
        let alt = CapacityCalculator::packaging_requirement(
            params.lot_size,
            packaging.alt_parts_per_pu,
            daily_production_rate,
            params.luf_days,
        );

        let standard_cost = Self::cost(standard.total_packaging_units, packaging.standard_price);
        let alt_cost = Self::cost(alt.total_packaging_units, packaging.alt_price);
        let break_even_point = Self::break_even_point(standard_cost, packaging.alt_price);

        tracing::debug!(
            "替代包裝分析: 標準成本 {}, 替代成本 {}, 損益平衡點 {}",
            standard_cost,
            alt_cost,
            break_even_point
        );

        AlternativeAnalysis {
            alt_parts_per_pu: packaging.alt_parts_per_pu,
            standard_price: packaging.standard_price,
            alt_price: packaging.alt_price,
            alt_pu_per_lot: alt.pu_per_lot,
            alt_daily_pu_need_per_luf: alt.daily_pu_need_per_luf,
            alt_luf_need_of_pu: alt.luf_need_of_pu,
            alt_safety_stock_pu: alt.safety_stock_pu,
            alt_total_packaging_units: alt.total_packaging_units,
            standard_cost,
            alt_cost,
            break_even_point,
        }
    }

    /// 包裝單位數 × 單價
    pub fn cost(packaging_units: u64, unit_price: Decimal) -> Decimal {
        (Decimal::from(packaging_units) * unit_price).normalize()
    }

    /// 損益平衡點 = 標準成本 / 替代單價
    ///
    /// 沿用既有業務規則：只比較標準成本與替代單價，不考慮替代包裝總數。
    pub fn break_even_point(standard_cost: Decimal, alt_price: Decimal) -> Decimal {
        (standard_cost / alt_price).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capacity_core::Applicability;
    use rstest::rstest;

    fn with_alternative(alt_parts_per_pu: u32, standard_price: Decimal, alt_price: Decimal) -> CapacityParameters {
        CapacityParameters::new(Decimal::from(1000), 10, 5, 5).with_alternative(
            alt_parts_per_pu,
            standard_price,
            alt_price,
        )
    }

    #[test]
    fn test_alternative_path() {
        let params = with_alternative(15, Decimal::from(10), Decimal::from(8));
        let result = CapacityCalculator::compute(&params).unwrap();

        assert!(result.use_alternative);
        assert_eq!(result.alt_pu_per_lot(), Applicability::Applicable(67));
        assert_eq!(result.standard_cost(), Applicability::Applicable(Decimal::from(3000)));
        assert_eq!(result.break_even_point(), Applicability::Applicable(Decimal::from(375)));

        let alt = result.alternative.applicable().unwrap();
        // 200/15 = 13.33 → 14 個/日
        assert_eq!(alt.alt_daily_pu_need_per_luf, 14);
        assert_eq!(alt.alt_luf_need_of_pu, 70);
        assert_eq!(alt.alt_safety_stock_pu, 134);
        assert_eq!(alt.alt_total_packaging_units, 204);
        assert_eq!(alt.alt_cost, Decimal::from(1632));
    }

    #[test]
    fn test_standard_path_unchanged_by_alternative() {
        let plain = CapacityParameters::new(Decimal::from(1000), 10, 5, 5);
        let params = with_alternative(15, Decimal::from(10), Decimal::from(8));

        let plain = CapacityCalculator::compute(&plain).unwrap();
        let result = CapacityCalculator::compute(&params).unwrap();

        assert_eq!(plain.total_packaging_units, result.total_packaging_units);
        assert_eq!(result.total_standard_packaging_units(), 300);
    }

    #[rstest]
    #[case(Decimal::from(10), Decimal::from(8))]
    #[case(Decimal::new(25, 1), Decimal::new(3, 1))]
    #[case(Decimal::from(7), Decimal::from(7))]
    fn test_break_even_literal_formula(#[case] standard_price: Decimal, #[case] alt_price: Decimal) {
        let params = with_alternative(20, standard_price, alt_price);
        let result = CapacityCalculator::compute(&params).unwrap();

        let expected = Decimal::from(result.total_packaging_units) * standard_price / alt_price;
        assert_eq!(result.break_even_point(), Applicability::Applicable(expected));
    }

    #[test]
    fn test_break_even_ignores_alternative_total() {
        // 替代包裝容量不同，但損益平衡點只取決於標準成本與替代單價
        let small = CapacityCalculator::compute(&with_alternative(5, Decimal::from(10), Decimal::from(8))).unwrap();
        let large = CapacityCalculator::compute(&with_alternative(50, Decimal::from(10), Decimal::from(8))).unwrap();

        assert_ne!(small.alt_total_packaging_units(), large.alt_total_packaging_units());
        assert_eq!(small.break_even_point(), large.break_even_point());
    }

    #[test]
    fn test_zero_alt_price_rejected() {
        let params = with_alternative(15, Decimal::from(10), Decimal::ZERO);
        let err = CapacityCalculator::compute(&params).unwrap_err();
        assert_eq!(err.field(), "alt_price");
    }

    #[test]
    fn test_cost_helpers() {
        assert_eq!(CostAnalyzer::cost(300, Decimal::from(10)), Decimal::from(3000));
        assert_eq!(
            CostAnalyzer::break_even_point(Decimal::from(3000), Decimal::from(8)),
            Decimal::from(375)
        );
    }
}
