//! 儀表板配置模型
//!
//! 輸入元件的範圍與預設值。範圍只供 UI 層使用，計算核心不強制。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::params::{CapacityParameters, ParameterField};

/// 配置錯誤
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("讀取配置檔失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置格式錯誤: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置值無效: {0}")]
    Invalid(String),
}

/// 滑桿範圍
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
    pub default: Decimal,
}

impl SliderBounds {
    pub fn new(min: Decimal, max: Decimal, step: Decimal, default: Decimal) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    fn integer(min: u32, max: u32, step: u32, default: u32) -> Self {
        Self::new(
            Decimal::from(min),
            Decimal::from(max),
            Decimal::from(step),
            Decimal::from(default),
        )
    }

    /// 值是否落在範圍內
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// 將值限制在範圍內
    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.max(self.min).min(self.max)
    }

    fn check(&self, name: &str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::Invalid(format!(
                "{}: 最小值 {} 大於最大值 {}",
                name, self.min, self.max
            )));
        }
        if self.step <= Decimal::ZERO {
            return Err(ConfigError::Invalid(format!("{}: 步長必須為正數", name)));
        }
        if !self.contains(self.default) {
            return Err(ConfigError::Invalid(format!(
                "{}: 預設值 {} 不在範圍內",
                name, self.default
            )));
        }
        Ok(())
    }
}

/// 替代包裝預設值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeDefaults {
    pub enabled: bool,
    pub alt_parts_per_pu: u32,
    pub standard_price: Decimal,
    pub alt_price: Decimal,
}

impl Default for AlternativeDefaults {
    fn default() -> Self {
        Self {
            enabled: false,
            alt_parts_per_pu: 15,
            standard_price: Decimal::from(10),
            alt_price: Decimal::from(8),
        }
    }
}

/// 敏感度分析預設值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepDefaults {
    pub field: ParameterField,
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

impl Default for SweepDefaults {
    fn default() -> Self {
        Self {
            field: ParameterField::LotSize,
            min: Decimal::ONE,
            max: Decimal::from(100),
            step: Decimal::ONE,
        }
    }
}

/// 儀表板配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub lot_size: SliderBounds,
    pub parts_per_pu: SliderBounds,
    pub working_days_per_week: SliderBounds,
    pub luf_days: SliderBounds,

    #[serde(default)]
    pub alternative: AlternativeDefaults,

    #[serde(default)]
    pub sweep: SweepDefaults,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            lot_size: SliderBounds::integer(100, 10_000, 100, 1000),
            parts_per_pu: SliderBounds::integer(1, 100, 1, 10),
            working_days_per_week: SliderBounds::integer(1, 7, 1, 5),
            luf_days: SliderBounds::integer(1, 30, 1, 5),
            alternative: AlternativeDefaults::default(),
            sweep: SweepDefaults::default(),
        }
    }
}

impl DashboardConfig {
    /// 從 JSON 字串載入配置
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 從 JSON 檔案載入配置
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 檢查各範圍是否自洽
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lot_size.check("lot_size")?;
        self.parts_per_pu.check("parts_per_pu")?;
        self.working_days_per_week.check("working_days_per_week")?;
        self.luf_days.check("luf_days")?;

        if self.sweep.step <= Decimal::ZERO {
            return Err(ConfigError::Invalid("sweep: 步長必須為正數".to_string()));
        }
        Ok(())
    }

    /// 取得滑桿欄位的範圍
    pub fn bounds(&self, field: ParameterField) -> Option<&SliderBounds> {
        match field {
            ParameterField::LotSize => Some(&self.lot_size),
            ParameterField::PartsPerPu => Some(&self.parts_per_pu),
            ParameterField::WorkingDaysPerWeek => Some(&self.working_days_per_week),
            ParameterField::LufDays => Some(&self.luf_days),
            _ => None,
        }
    }

    /// 以預設值建立參數
    pub fn default_parameters(&self) -> crate::Result<CapacityParameters> {
        let mut params = CapacityParameters::new(self.lot_size.default, 1, 1, 1);
        ParameterField::PartsPerPu.apply(&mut params, self.parts_per_pu.default)?;
        ParameterField::WorkingDaysPerWeek.apply(&mut params, self.working_days_per_week.default)?;
        ParameterField::LufDays.apply(&mut params, self.luf_days.default)?;

        let alt = &self.alternative;
        let params = params
            .with_alternative(alt.alt_parts_per_pu, alt.standard_price, alt.alt_price)
            .with_use_alternative(alt.enabled);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());

        let params = config.default_parameters().unwrap();
        assert_eq!(params.lot_size, Decimal::from(1000));
        assert_eq!(params.parts_per_pu, 10);
        assert_eq!(params.working_days_per_week, 5);
        assert_eq!(params.luf_days, 5);
        assert!(!params.use_alternative);
        assert_eq!(params.alt_parts_per_pu, Some(15));
    }

    #[test]
    fn test_slider_bounds() {
        let config = DashboardConfig::default();
        let bounds = config.bounds(ParameterField::WorkingDaysPerWeek).unwrap();

        assert!(bounds.contains(Decimal::from(7)));
        assert!(!bounds.contains(Decimal::from(8)));
        assert_eq!(bounds.clamp(Decimal::from(9)), Decimal::from(7));
        assert_eq!(bounds.clamp(Decimal::ZERO), Decimal::ONE);
        assert!(config.bounds(ParameterField::AltPrice).is_none());
    }

    #[test]
    fn test_from_json_round_trip() {
        let config = DashboardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let loaded = DashboardConfig::from_json_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_sections_default_when_missing() {
        let json = r#"{
            "lot_size": {"min": "100", "max": "5000", "step": "100", "default": "500"},
            "parts_per_pu": {"min": "1", "max": "50", "step": "1", "default": "5"},
            "working_days_per_week": {"min": "1", "max": "7", "step": "1", "default": "6"},
            "luf_days": {"min": "1", "max": "30", "step": "1", "default": "3"}
        }"#;
        let config = DashboardConfig::from_json_str(json).unwrap();

        assert_eq!(config.sweep, SweepDefaults::default());
        assert_eq!(config.alternative, AlternativeDefaults::default());
        assert_eq!(config.default_parameters().unwrap().working_days_per_week, 6);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = DashboardConfig::default();
        config.luf_days.default = Decimal::from(31);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        assert!(matches!(
            DashboardConfig::from_json_str("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
