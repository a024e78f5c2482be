//! Python 綁定實現

use capacity_calc::{CapacityCalculator, SensitivitySweep};
use capacity_core::{CapacityError, CapacityParameters, CapacityResult, ParameterField};
use capacity_report::{MetricReport, ScenarioTable};
use capacity_session::ScenarioStore;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;
use rust_decimal::Decimal;

/// 將核心錯誤轉為 Python ValueError（訊息原樣保留）
fn to_py_err(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_decimal(field: &'static str, value: f64) -> PyResult<Decimal> {
    Decimal::try_from(value)
        .map_err(|_| to_py_err(CapacityError::invalid(field, format!("無法轉換為數值: {}", value))))
}

/// Python 容量參數
#[pyclass(name = "CapacityParameters")]
#[derive(Debug, Clone)]
pub struct PyCapacityParameters {
    #[pyo3(get, set)]
    pub lot_size: f64,
    #[pyo3(get, set)]
    pub parts_per_pu: u32,
    #[pyo3(get, set)]
    pub working_days_per_week: u32,
    #[pyo3(get, set)]
    pub luf_days: u32,
    #[pyo3(get, set)]
    pub use_alternative: bool,
    #[pyo3(get, set)]
    pub alt_parts_per_pu: Option<u32>,
    #[pyo3(get, set)]
    pub standard_price: Option<f64>,
    #[pyo3(get, set)]
    pub alt_price: Option<f64>,
}

#[pymethods]
impl PyCapacityParameters {
    #[new]
    #[pyo3(signature = (
        lot_size,
        parts_per_pu,
        working_days_per_week,
        luf_days,
        use_alternative=false,
        alt_parts_per_pu=None,
        standard_price=None,
        alt_price=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        lot_size: f64,
        parts_per_pu: u32,
        working_days_per_week: u32,
        luf_days: u32,
        use_alternative: bool,
        alt_parts_per_pu: Option<u32>,
        standard_price: Option<f64>,
        alt_price: Option<f64>,
    ) -> Self {
        Self {
            lot_size,
            parts_per_pu,
            working_days_per_week,
            luf_days,
            use_alternative,
            alt_parts_per_pu,
            standard_price,
            alt_price,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CapacityParameters(lot_size={}, parts_per_pu={}, working_days_per_week={}, luf_days={}, use_alternative={})",
            self.lot_size,
            self.parts_per_pu,
            self.working_days_per_week,
            self.luf_days,
            self.use_alternative
        )
    }
}

/// 內部方法實現（不暴露給 Python）
impl PyCapacityParameters {
    /// 轉換為 Rust CapacityParameters（內部使用）
    pub(crate) fn to_rust_params(&self) -> PyResult<CapacityParameters> {
        let mut params = CapacityParameters::new(
            to_decimal("lot_size", self.lot_size)?,
            self.parts_per_pu,
            self.working_days_per_week,
            self.luf_days,
        )
        .with_use_alternative(self.use_alternative);

        params.alt_parts_per_pu = self.alt_parts_per_pu;
        if let Some(price) = self.standard_price {
            params.standard_price = Some(to_decimal("standard_price", price)?);
        }
        if let Some(price) = self.alt_price {
            params.alt_price = Some(to_decimal("alt_price", price)?);
        }
        Ok(params)
    }

    fn compute_result(&self) -> PyResult<CapacityResult> {
        CapacityCalculator::compute(&self.to_rust_params()?).map_err(to_py_err)
    }
}

/// 執行容量計算，回傳 JSON
#[pyfunction]
pub fn compute(params: PyRef<'_, PyCapacityParameters>) -> PyResult<String> {
    let result = params.compute_result()?;
    MetricReport::from_result(&result).to_json().map_err(to_py_err)
}

/// 敏感度分析：回傳每個取樣值的總包裝單位
#[pyfunction]
pub fn sweep(
    params: PyRef<'_, PyCapacityParameters>,
    field: &str,
    values: Vec<f64>,
) -> PyResult<Vec<u64>> {
    let field: ParameterField = field.parse().map_err(to_py_err)?;
    let values = values
        .into_iter()
        .map(|value| to_decimal(field.as_str(), value))
        .collect::<PyResult<Vec<_>>>()?;

    SensitivitySweep::run(&params.to_rust_params()?, field, &values).map_err(to_py_err)
}

/// 扁平化指標列 `[(metric, value), ...]`
#[pyfunction]
pub fn metric_rows(params: PyRef<'_, PyCapacityParameters>) -> PyResult<Vec<(String, String)>> {
    let result = params.compute_result()?;
    Ok(result
        .metric_rows()
        .into_iter()
        .map(|row| (row.metric.to_string(), row.value.to_string()))
        .collect())
}

/// 兩欄式 CSV 報表
#[pyfunction]
pub fn csv_report<'py>(
    py: Python<'py>,
    params: PyRef<'_, PyCapacityParameters>,
) -> PyResult<Bound<'py, PyBytes>> {
    let result = params.compute_result()?;
    let bytes = MetricReport::from_result(&result)
        .to_csv()
        .map_err(to_py_err)?;
    Ok(PyBytes::new(py, &bytes))
}

/// Python 情境清單（每個工作階段一個）
#[pyclass(name = "ScenarioStore")]
#[derive(Debug, Default)]
pub struct PyScenarioStore {
    inner: ScenarioStore,
}

#[pymethods]
impl PyScenarioStore {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// 計算並加入情境，回傳其位置
    fn add_scenario(&mut self, params: PyRef<'_, PyCapacityParameters>) -> PyResult<usize> {
        let result = params.compute_result()?;
        Ok(self.inner.add_scenario(result))
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    /// 各情境的總包裝單位
    fn totals(&self) -> Vec<u64> {
        self.inner
            .comparison()
            .into_iter()
            .map(|total| total.total_packaging_units)
            .collect()
    }

    fn comparison_ready(&self) -> bool {
        self.inner.comparison_ready()
    }

    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(self.inner.all_scenarios()).map_err(to_py_err)
    }

    fn to_csv<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = ScenarioTable::from_results(self.inner.all_scenarios())
            .to_csv()
            .map_err(to_py_err)?;
        Ok(PyBytes::new(py, &bytes))
    }
}
