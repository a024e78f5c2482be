//! # Capacity Core
//!
//! 包裝單位（PU）容量計算的核心資料模型與類型定義

pub mod config;
pub mod params;
pub mod result;

// Re-export 主要類型
pub use config::{AlternativeDefaults, ConfigError, DashboardConfig, SliderBounds, SweepDefaults};
pub use params::{limits, AlternativePackaging, CapacityParameters, ParameterField};
pub use result::{
    AlternativeAnalysis, Applicability, CapacityResult, MetricRow, MetricValue,
    PackagingRequirement, ResultField,
};

/// 容量計算錯誤類型
///
/// 計算核心只有一種錯誤：參數不合法。錯誤在任何運算之前產生，
/// 並指出違反約束的欄位。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapacityError {
    #[error("無效的參數 {field}: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },
}

impl CapacityError {
    /// 建立參數錯誤
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// 違反約束的欄位名稱
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidParameter { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, CapacityError>;
