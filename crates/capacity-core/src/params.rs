//! 容量計算輸入參數

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{CapacityError, Result};

/// 可計算範圍上限
///
/// 在這些範圍內，所有 Decimal 運算都不會溢位。
pub mod limits {
    /// 每批最大零件數
    pub const MAX_LOT_SIZE: u64 = 1_000_000_000_000;

    /// 每週最多工作天數
    pub const MAX_WORKING_DAYS_PER_WEEK: u32 = 7;

    /// LUF 天數上限（一百年）
    pub const MAX_LUF_DAYS: u32 = 36_500;

    /// 單價上限
    pub const MAX_PRICE: u64 = 1_000_000;

    /// 單價下限的小數位數（0.0001）
    pub const MIN_PRICE_SCALE: u32 = 4;
}

/// 容量計算參數
///
/// 每次評估都從目前的輸入重新建立，不修改既有實例。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityParameters {
    /// 批量（每個生產批次的零件數）
    pub lot_size: Decimal,

    /// 每個包裝單位可容納的零件數
    pub parts_per_pu: u32,

    /// 每週工作天數（1-7）
    pub working_days_per_week: u32,

    /// LUF 天數（補貨前置緩衝天數）
    pub luf_days: u32,

    /// 是否評估替代包裝
    #[serde(default)]
    pub use_alternative: bool,

    /// 替代包裝單位可容納的零件數
    #[serde(default)]
    pub alt_parts_per_pu: Option<u32>,

    /// 標準包裝單位單價
    #[serde(default)]
    pub standard_price: Option<Decimal>,

    /// 替代包裝單位單價
    #[serde(default)]
    pub alt_price: Option<Decimal>,
}

/// 已驗證的替代包裝參數
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternativePackaging {
    pub alt_parts_per_pu: u32,
    pub standard_price: Decimal,
    pub alt_price: Decimal,
}

impl CapacityParameters {
    /// 創建新的容量參數（不含替代包裝）
    pub fn new(
        lot_size: Decimal,
        parts_per_pu: u32,
        working_days_per_week: u32,
        luf_days: u32,
    ) -> Self {
        Self {
            lot_size,
            parts_per_pu,
            working_days_per_week,
            luf_days,
            use_alternative: false,
            alt_parts_per_pu: None,
            standard_price: None,
            alt_price: None,
        }
    }

    /// 建構器模式：啟用替代包裝並設置其參數
    pub fn with_alternative(
        mut self,
        alt_parts_per_pu: u32,
        standard_price: Decimal,
        alt_price: Decimal,
    ) -> Self {
        self.use_alternative = true;
        self.alt_parts_per_pu = Some(alt_parts_per_pu);
        self.standard_price = Some(standard_price);
        self.alt_price = Some(alt_price);
        self
    }

    /// 建構器模式：切換是否使用替代包裝（保留已填入的值）
    pub fn with_use_alternative(mut self, use_alternative: bool) -> Self {
        self.use_alternative = use_alternative;
        self
    }

    /// 驗證所有欄位
    ///
    /// 替代包裝欄位只在 `use_alternative` 為 true 時檢查。
    pub fn validate(&self) -> Result<()> {
        let field = ParameterField::LotSize.as_str();
        if self.lot_size <= Decimal::ZERO {
            return Err(CapacityError::invalid(field, "必須為正數"));
        }
        if self.lot_size > Decimal::from(limits::MAX_LOT_SIZE) {
            return Err(CapacityError::invalid(
                field,
                format!("不可超過 {}", limits::MAX_LOT_SIZE),
            ));
        }

        if self.parts_per_pu == 0 {
            return Err(CapacityError::invalid(
                ParameterField::PartsPerPu.as_str(),
                "必須為正整數",
            ));
        }

        if self.working_days_per_week == 0
            || self.working_days_per_week > limits::MAX_WORKING_DAYS_PER_WEEK
        {
            return Err(CapacityError::invalid(
                ParameterField::WorkingDaysPerWeek.as_str(),
                "必須介於 1 到 7 之間",
            ));
        }

        let field = ParameterField::LufDays.as_str();
        if self.luf_days == 0 {
            return Err(CapacityError::invalid(field, "必須為正整數"));
        }
        if self.luf_days > limits::MAX_LUF_DAYS {
            return Err(CapacityError::invalid(
                field,
                format!("不可超過 {}", limits::MAX_LUF_DAYS),
            ));
        }

        self.alternative_packaging()?;
        Ok(())
    }

    /// 取得已驗證的替代包裝參數
    ///
    /// 未啟用替代包裝時回傳 `None`，不檢查替代欄位。
    pub fn alternative_packaging(&self) -> Result<Option<AlternativePackaging>> {
        if !self.use_alternative {
            return Ok(None);
        }

        let alt_parts_per_pu = match self.alt_parts_per_pu {
            Some(parts) if parts > 0 => parts,
            Some(_) => {
                return Err(CapacityError::invalid(
                    ParameterField::AltPartsPerPu.as_str(),
                    "必須為正整數",
                ))
            }
            None => {
                return Err(CapacityError::invalid(
                    ParameterField::AltPartsPerPu.as_str(),
                    "啟用替代包裝時必須提供",
                ))
            }
        };

        let standard_price = Self::checked_price(ParameterField::StandardPrice, self.standard_price)?;
        let alt_price = Self::checked_price(ParameterField::AltPrice, self.alt_price)?;

        Ok(Some(AlternativePackaging {
            alt_parts_per_pu,
            standard_price,
            alt_price,
        }))
    }

    fn checked_price(field: ParameterField, price: Option<Decimal>) -> Result<Decimal> {
        let price = price
            .ok_or_else(|| CapacityError::invalid(field.as_str(), "啟用替代包裝時必須提供"))?;

        if price <= Decimal::ZERO {
            return Err(CapacityError::invalid(field.as_str(), "必須為正數"));
        }
        if price < Decimal::new(1, limits::MIN_PRICE_SCALE) {
            return Err(CapacityError::invalid(field.as_str(), "不可小於 0.0001"));
        }
        if price > Decimal::from(limits::MAX_PRICE) {
            return Err(CapacityError::invalid(
                field.as_str(),
                format!("不可超過 {}", limits::MAX_PRICE),
            ));
        }
        Ok(price)
    }
}

/// 可被敏感度分析替換的參數欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterField {
    LotSize,
    PartsPerPu,
    WorkingDaysPerWeek,
    LufDays,
    AltPartsPerPu,
    StandardPrice,
    AltPrice,
}

impl ParameterField {
    /// 所有欄位（依輸入順序）
    pub const ALL: [ParameterField; 7] = [
        ParameterField::LotSize,
        ParameterField::PartsPerPu,
        ParameterField::WorkingDaysPerWeek,
        ParameterField::LufDays,
        ParameterField::AltPartsPerPu,
        ParameterField::StandardPrice,
        ParameterField::AltPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LotSize => "lot_size",
            Self::PartsPerPu => "parts_per_pu",
            Self::WorkingDaysPerWeek => "working_days_per_week",
            Self::LufDays => "luf_days",
            Self::AltPartsPerPu => "alt_parts_per_pu",
            Self::StandardPrice => "standard_price",
            Self::AltPrice => "alt_price",
        }
    }

    /// 是否為整數欄位
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::PartsPerPu | Self::WorkingDaysPerWeek | Self::LufDays | Self::AltPartsPerPu
        )
    }

    /// 讀取參數中此欄位的目前值
    pub fn value_of(&self, params: &CapacityParameters) -> Option<Decimal> {
        match self {
            Self::LotSize => Some(params.lot_size),
            Self::PartsPerPu => Some(Decimal::from(params.parts_per_pu)),
            Self::WorkingDaysPerWeek => Some(Decimal::from(params.working_days_per_week)),
            Self::LufDays => Some(Decimal::from(params.luf_days)),
            Self::AltPartsPerPu => params.alt_parts_per_pu.map(Decimal::from),
            Self::StandardPrice => params.standard_price,
            Self::AltPrice => params.alt_price,
        }
    }

    /// 以新值替換參數中的此欄位
    ///
    /// 整數欄位拒絕帶小數、負數或超出 `u32` 的值；其餘約束交由 `validate` 檢查。
    pub fn apply(&self, params: &mut CapacityParameters, value: Decimal) -> Result<()> {
        match self {
            Self::LotSize => params.lot_size = value,
            Self::PartsPerPu => params.parts_per_pu = self.integer_value(value)?,
            Self::WorkingDaysPerWeek => params.working_days_per_week = self.integer_value(value)?,
            Self::LufDays => params.luf_days = self.integer_value(value)?,
            Self::AltPartsPerPu => params.alt_parts_per_pu = Some(self.integer_value(value)?),
            Self::StandardPrice => params.standard_price = Some(value),
            Self::AltPrice => params.alt_price = Some(value),
        }
        Ok(())
    }

    fn integer_value(&self, value: Decimal) -> Result<u32> {
        if !value.fract().is_zero() {
            return Err(CapacityError::invalid(
                self.as_str(),
                format!("必須為整數，收到 {}", value),
            ));
        }
        if value.is_sign_negative() && !value.is_zero() {
            return Err(CapacityError::invalid(
                self.as_str(),
                format!("必須為正整數，收到 {}", value),
            ));
        }
        value
            .to_u32()
            .ok_or_else(|| CapacityError::invalid(self.as_str(), format!("超出範圍: {}", value)))
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterField {
    type Err = CapacityError;

    fn from_str(s: &str) -> Result<Self> {
        ParameterField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CapacityError::invalid("field", format!("未知的參數欄位: {}", s)))
    }
}
