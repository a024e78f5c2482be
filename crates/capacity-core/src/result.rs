//! 容量計算結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::params::CapacityParameters;

/// 「不適用」標記
///
/// 與零值區分：`NotApplicable` 表示沒有設定替代包裝，而非替代包裝成本為零。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Applicability<T> {
    Applicable(T),
    NotApplicable,
}

impl<T> Applicability<T> {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Applicable(_))
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }

    pub fn as_ref(&self) -> Applicability<&T> {
        match self {
            Self::Applicable(value) => Applicability::Applicable(value),
            Self::NotApplicable => Applicability::NotApplicable,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Applicability<U> {
        match self {
            Self::Applicable(value) => Applicability::Applicable(f(value)),
            Self::NotApplicable => Applicability::NotApplicable,
        }
    }

    pub fn applicable(self) -> Option<T> {
        match self {
            Self::Applicable(value) => Some(value),
            Self::NotApplicable => None,
        }
    }
}

impl<T> From<Option<T>> for Applicability<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Applicable(value),
            None => Self::NotApplicable,
        }
    }
}

/// 單一包裝方案的包裝單位需求（公式 1-6）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingRequirement {
    /// 每批所需包裝單位
    pub pu_per_lot: u64,

    /// 每日包裝單位消耗
    pub daily_pu_need_per_luf: u64,

    /// 覆蓋 LUF 天數所需包裝單位
    pub luf_need_of_pu: u64,

    /// 安全庫存（兩批的包裝單位）
    pub safety_stock_pu: u64,

    /// 包裝單位總數
    pub total_packaging_units: u64,
}

/// 替代包裝分析結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeAnalysis {
    pub alt_parts_per_pu: u32,
    pub standard_price: Decimal,
    pub alt_price: Decimal,
    pub alt_pu_per_lot: u64,
    pub alt_daily_pu_need_per_luf: u64,
    pub alt_luf_need_of_pu: u64,
    pub alt_safety_stock_pu: u64,
    pub alt_total_packaging_units: u64,
    pub standard_cost: Decimal,
    pub alt_cost: Decimal,

    /// 損益平衡點 = 標準成本 / 替代單價
    ///
    /// 此公式沿用既有業務規則，並非兩條成本曲線的交點。
    pub break_even_point: Decimal,
}

/// 容量計算結果（產生後不可變）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityResult {
    pub lot_size: Decimal,
    pub parts_per_pu: u32,
    pub working_days_per_week: u32,
    pub luf_days: u32,
    pub pu_per_lot: u64,

    /// 每日產量（不取整）
    pub daily_production_rate: Decimal,

    pub daily_pu_need_per_luf: u64,
    pub luf_need_of_pu: u64,
    pub safety_stock_pu: u64,
    pub total_packaging_units: u64,
    pub use_alternative: bool,
    pub alternative: Applicability<AlternativeAnalysis>,
}

impl CapacityResult {
    /// 由參數、每日產量與標準包裝需求組成結果
    pub fn new(
        params: &CapacityParameters,
        daily_production_rate: Decimal,
        standard: PackagingRequirement,
        alternative: Applicability<AlternativeAnalysis>,
    ) -> Self {
        Self {
            lot_size: params.lot_size,
            parts_per_pu: params.parts_per_pu,
            working_days_per_week: params.working_days_per_week,
            luf_days: params.luf_days,
            pu_per_lot: standard.pu_per_lot,
            daily_production_rate,
            daily_pu_need_per_luf: standard.daily_pu_need_per_luf,
            luf_need_of_pu: standard.luf_need_of_pu,
            safety_stock_pu: standard.safety_stock_pu,
            total_packaging_units: standard.total_packaging_units,
            use_alternative: alternative.is_applicable(),
            alternative,
        }
    }

    /// 成本分析中的標準包裝總數（與 `total_packaging_units` 相同）
    pub fn total_standard_packaging_units(&self) -> u64 {
        self.total_packaging_units
    }

    pub fn alt_pu_per_lot(&self) -> Applicability<u64> {
        self.alternative.map(|alt| alt.alt_pu_per_lot)
    }

    pub fn alt_total_packaging_units(&self) -> Applicability<u64> {
        self.alternative.map(|alt| alt.alt_total_packaging_units)
    }

    pub fn standard_cost(&self) -> Applicability<Decimal> {
        self.alternative.map(|alt| alt.standard_cost)
    }

    pub fn alt_cost(&self) -> Applicability<Decimal> {
        self.alternative.map(|alt| alt.alt_cost)
    }

    pub fn break_even_point(&self) -> Applicability<Decimal> {
        self.alternative.map(|alt| alt.break_even_point)
    }

    /// 讀取單一欄位的值
    pub fn value(&self, field: ResultField) -> MetricValue {
        match field {
            ResultField::LotSize => MetricValue::Number(self.lot_size),
            ResultField::PartsPerPu => MetricValue::Count(u64::from(self.parts_per_pu)),
            ResultField::WorkingDaysPerWeek => {
                MetricValue::Count(u64::from(self.working_days_per_week))
            }
            ResultField::LufDays => MetricValue::Count(u64::from(self.luf_days)),
            ResultField::PuPerLot => MetricValue::Count(self.pu_per_lot),
            ResultField::DailyProductionRate => MetricValue::Number(self.daily_production_rate),
            ResultField::DailyPuNeedPerLuf => MetricValue::Count(self.daily_pu_need_per_luf),
            ResultField::LufNeedOfPu => MetricValue::Count(self.luf_need_of_pu),
            ResultField::SafetyStockPu => MetricValue::Count(self.safety_stock_pu),
            ResultField::TotalPackagingUnits => MetricValue::Count(self.total_packaging_units),
            ResultField::UseAlternative => MetricValue::Flag(self.use_alternative),
            ResultField::AltPartsPerPu => {
                self.alt_value(|a| MetricValue::Count(u64::from(a.alt_parts_per_pu)))
            }
            ResultField::StandardPrice => self.alt_value(|a| MetricValue::Number(a.standard_price)),
            ResultField::AltPrice => self.alt_value(|a| MetricValue::Number(a.alt_price)),
            ResultField::AltPuPerLot => self.alt_value(|a| MetricValue::Count(a.alt_pu_per_lot)),
            ResultField::AltDailyPuNeedPerLuf => {
                self.alt_value(|a| MetricValue::Count(a.alt_daily_pu_need_per_luf))
            }
            ResultField::AltLufNeedOfPu => self.alt_value(|a| MetricValue::Count(a.alt_luf_need_of_pu)),
            ResultField::AltSafetyStockPu => self.alt_value(|a| MetricValue::Count(a.alt_safety_stock_pu)),
            ResultField::AltTotalPackagingUnits => {
                self.alt_value(|a| MetricValue::Count(a.alt_total_packaging_units))
            }
            ResultField::StandardCost => self.alt_value(|a| MetricValue::Number(a.standard_cost)),
            ResultField::AltCost => self.alt_value(|a| MetricValue::Number(a.alt_cost)),
            ResultField::BreakEvenPoint => self.alt_value(|a| MetricValue::Number(a.break_even_point)),
        }
    }

    fn alt_value(&self, f: impl FnOnce(&AlternativeAnalysis) -> MetricValue) -> MetricValue {
        match &self.alternative {
            Applicability::Applicable(analysis) => f(analysis),
            Applicability::NotApplicable => MetricValue::NotApplicable,
        }
    }

    /// 扁平化為「指標 → 值」列表（依欄位順序）
    pub fn metric_rows(&self) -> Vec<MetricRow> {
        ResultField::ALL
            .iter()
            .map(|&field| MetricRow {
                field,
                metric: field.label(),
                value: self.value(field),
            })
            .collect()
    }
}

/// 結果欄位（順序即為輸出順序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultField {
    LotSize,
    PartsPerPu,
    WorkingDaysPerWeek,
    LufDays,
    PuPerLot,
    DailyProductionRate,
    DailyPuNeedPerLuf,
    LufNeedOfPu,
    SafetyStockPu,
    TotalPackagingUnits,
    UseAlternative,
    AltPartsPerPu,
    StandardPrice,
    AltPrice,
    AltPuPerLot,
    AltDailyPuNeedPerLuf,
    AltLufNeedOfPu,
    AltSafetyStockPu,
    AltTotalPackagingUnits,
    StandardCost,
    AltCost,
    BreakEvenPoint,
}

impl ResultField {
    pub const ALL: [ResultField; 22] = [
        ResultField::LotSize,
        ResultField::PartsPerPu,
        ResultField::WorkingDaysPerWeek,
        ResultField::LufDays,
        ResultField::PuPerLot,
        ResultField::DailyProductionRate,
        ResultField::DailyPuNeedPerLuf,
        ResultField::LufNeedOfPu,
        ResultField::SafetyStockPu,
        ResultField::TotalPackagingUnits,
        ResultField::UseAlternative,
        ResultField::AltPartsPerPu,
        ResultField::StandardPrice,
        ResultField::AltPrice,
        ResultField::AltPuPerLot,
        ResultField::AltDailyPuNeedPerLuf,
        ResultField::AltLufNeedOfPu,
        ResultField::AltSafetyStockPu,
        ResultField::AltTotalPackagingUnits,
        ResultField::StandardCost,
        ResultField::AltCost,
        ResultField::BreakEvenPoint,
    ];

    /// 報表顯示名稱
    pub fn label(&self) -> &'static str {
        match self {
            Self::LotSize => "Lot size",
            Self::PartsPerPu => "Parts per Packaging Unit",
            Self::WorkingDaysPerWeek => "Working days per week",
            Self::LufDays => "LUF days",
            Self::PuPerLot => "PU per lot",
            Self::DailyProductionRate => "Daily Production Rate",
            Self::DailyPuNeedPerLuf => "Daily PU need per LUF",
            Self::LufNeedOfPu => "LUF need of PU",
            Self::SafetyStockPu => "Safety Stock PU",
            Self::TotalPackagingUnits => "Total Packaging Units",
            Self::UseAlternative => "Use alternative",
            Self::AltPartsPerPu => "Alternative parts per PU",
            Self::StandardPrice => "Standard price",
            Self::AltPrice => "Alternative price",
            Self::AltPuPerLot => "Alternative PU per lot",
            Self::AltDailyPuNeedPerLuf => "Alternative daily PU need per LUF",
            Self::AltLufNeedOfPu => "Alternative LUF need of PU",
            Self::AltSafetyStockPu => "Alternative Safety Stock PU",
            Self::AltTotalPackagingUnits => "Alternative Total Packaging Units",
            Self::StandardCost => "Standard cost",
            Self::AltCost => "Alternative cost",
            Self::BreakEvenPoint => "Break-even point",
        }
    }

    /// 是否屬於替代包裝區塊
    pub fn is_alternative(&self) -> bool {
        ResultField::ALL
            .iter()
            .position(|field| field == self)
            .is_some_and(|index| index > 10)
    }
}

/// 報表中的單一值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// 包裝單位數或整數輸入
    Count(u64),
    /// 實數（批量、產量、價格、成本）
    Number(Decimal),
    Flag(bool),
    NotApplicable,
}

impl MetricValue {
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(value) => write!(f, "{}", value),
            Self::Number(value) => write!(f, "{}", value),
            Self::Flag(value) => write!(f, "{}", value),
            Self::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// 扁平報表列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    #[serde(skip)]
    pub field: ResultField,
    pub metric: &'static str,
    pub value: MetricValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(alternative: Applicability<AlternativeAnalysis>) -> CapacityResult {
        let params = CapacityParameters::new(Decimal::from(1000), 10, 5, 5);
        let standard = PackagingRequirement {
            pu_per_lot: 100,
            daily_pu_need_per_luf: 20,
            luf_need_of_pu: 100,
            safety_stock_pu: 200,
            total_packaging_units: 300,
        };
        CapacityResult::new(&params, Decimal::from(200), standard, alternative)
    }

    #[test]
    fn test_not_applicable_rows() {
        let result = sample_result(Applicability::NotApplicable);
        let rows = result.metric_rows();

        assert_eq!(rows.len(), ResultField::ALL.len());
        assert_eq!(rows[0].metric, "Lot size");
        assert_eq!(rows[9].value, MetricValue::Count(300));
        assert_eq!(rows[10].value, MetricValue::Flag(false));

        for row in rows.iter().filter(|row| row.field.is_alternative()) {
            assert!(row.value.is_not_applicable(), "{} 應為 N/A", row.metric);
            assert_eq!(row.value.to_string(), "N/A");
        }
        assert!(result.break_even_point().is_not_applicable());
    }

    #[test]
    fn test_applicable_is_not_zero() {
        let analysis = AlternativeAnalysis {
            alt_parts_per_pu: 15,
            standard_price: Decimal::from(10),
            alt_price: Decimal::ZERO,
            alt_pu_per_lot: 67,
            alt_daily_pu_need_per_luf: 14,
            alt_luf_need_of_pu: 70,
            alt_safety_stock_pu: 134,
            alt_total_packaging_units: 204,
            standard_cost: Decimal::from(3000),
            alt_cost: Decimal::ZERO,
            break_even_point: Decimal::ZERO,
        };
        let result = sample_result(Applicability::Applicable(analysis));

        assert!(result.use_alternative);
        assert_eq!(result.alt_cost(), Applicability::Applicable(Decimal::ZERO));
        assert_ne!(result.alt_cost(), Applicability::NotApplicable);
        assert_eq!(
            result.value(ResultField::AltPuPerLot),
            MetricValue::Count(67)
        );
    }

    #[test]
    fn test_applicability_serialization() {
        let none: Applicability<u64> = Applicability::NotApplicable;
        let some: Applicability<u64> = Applicability::Applicable(5);

        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
        assert_eq!(serde_json::to_string(&some).unwrap(), "5");
        assert_eq!(
            serde_json::from_str::<Applicability<u64>>("null").unwrap(),
            Applicability::NotApplicable
        );
    }

    #[test]
    fn test_alternative_block_boundary() {
        assert!(!ResultField::TotalPackagingUnits.is_alternative());
        assert!(!ResultField::UseAlternative.is_alternative());
        assert!(ResultField::AltPartsPerPu.is_alternative());
        assert!(ResultField::BreakEvenPoint.is_alternative());
    }
}
