//! # Capacity
//!
//! 包裝單位（容器）物流容量規劃計算器
//!
//! 輸入批量、每個包裝單位的零件數、每週工作天數與 LUF 天數，
//! 計算所需包裝單位、替代包裝成本比較、敏感度分析與情境比較。

pub mod logging;

pub use capacity_calc::{
    compute, sweep, CapacityCalculator, CostAnalyzer, SensitivityCurve, SensitivitySweep,
    SweepPoint, SweepRange,
};
pub use capacity_core::{
    Applicability, CapacityError, CapacityParameters, CapacityResult, DashboardConfig,
    MetricRow, MetricValue, ParameterField, ResultField,
};
pub use capacity_report::{MetricReport, PackagingBreakdown, ReportError, ScenarioTable};
pub use capacity_session::{CapacitySession, ScenarioStore, ScenarioTotal};
