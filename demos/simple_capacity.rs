//! 簡單容量計算示例

use capacity::{
    compute, CapacityParameters, DashboardConfig, MetricReport, PackagingBreakdown,
    SensitivitySweep, SweepRange,
};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    capacity::logging::init();

    println!("=== 包裝單位容量計算示例 ===\n");

    let config = DashboardConfig::default();
    let params = config
        .default_parameters()?
        .with_alternative(15, Decimal::from(10), Decimal::from(8));

    let result = compute(&params)?;

    println!("計算結果:");
    for row in result.metric_rows() {
        println!("  - {}: {}", row.metric, row.value);
    }

    let breakdown = PackagingBreakdown::from_result(&result);
    println!(
        "\nLUF 需求佔比 {}%, 安全庫存佔比 {}%",
        breakdown.luf_share, breakdown.safety_share
    );

    let range = SweepRange::from(&config.sweep);
    let curve = SensitivitySweep::curve(&params, config.sweep.field, &range)?;
    if let Some(peak) = curve.peak() {
        println!(
            "\n敏感度分析 ({}): {} 點, 最大總包裝單位 {} (值 {})",
            curve.field,
            curve.points.len(),
            peak.total_packaging_units,
            peak.value
        );
    }

    let report = MetricReport::from_result(&result);
    println!("\n{}", String::from_utf8(report.to_csv()?)?);

    Ok(())
}
