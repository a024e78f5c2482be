//! 情境比較示例

use capacity::{CapacityParameters, CapacitySession, DashboardConfig, ScenarioTable};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    capacity::logging::init();

    println!("=== 情境比較示例 ===\n");

    let mut session = CapacitySession::new(DashboardConfig::default());

    // 批量、每PU零件、每週工作天數、LUF 天數
    let scenarios = [
        (1000, 10, 5, 5),
        (2000, 10, 5, 5),
        (1000, 25, 6, 10),
        (5000, 50, 7, 3),
    ];

    for (lot_size, parts_per_pu, working_days, luf_days) in scenarios {
        let params =
            CapacityParameters::new(Decimal::from(lot_size), parts_per_pu, working_days, luf_days);
        session.add_scenario(&params)?;
    }

    println!("情境比較:");
    for total in session.scenarios().comparison() {
        println!(
            "  - 情境 {}: 總包裝單位 {}",
            total.index, total.total_packaging_units
        );
    }

    let table = ScenarioTable::from_results(session.scenarios().all_scenarios());
    println!("\n{}", String::from_utf8(table.to_csv()?)?);

    Ok(())
}
