//! # Capacity FFI
//!
//! Python 綁定層（PyO3），供儀表板直接呼叫計算核心

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn capacity_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyCapacityParameters>()?;
    m.add_class::<python::PyScenarioStore>()?;
    m.add_function(wrap_pyfunction!(python::compute, m)?)?;
    m.add_function(wrap_pyfunction!(python::sweep, m)?)?;
    m.add_function(wrap_pyfunction!(python::metric_rows, m)?)?;
    m.add_function(wrap_pyfunction!(python::csv_report, m)?)?;
    Ok(())
}
