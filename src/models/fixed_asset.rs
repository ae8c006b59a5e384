//! Fixed asset register records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuationError};

/// Depreciation method of a fixed asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepreciationMethod {
    StraightLine,
    DecliningBalance,
    DoubleDecliningBalance,
}

impl DepreciationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "straight_line",
            DepreciationMethod::DecliningBalance => "declining_balance",
            DepreciationMethod::DoubleDecliningBalance => "double_declining_balance",
        }
    }
}

impl fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DepreciationMethod {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "straight_line" => Ok(DepreciationMethod::StraightLine),
            "declining_balance" => Ok(DepreciationMethod::DecliningBalance),
            "double_declining_balance" => Ok(DepreciationMethod::DoubleDecliningBalance),
            other => Err(ValuationError::validation(format!(
                "unknown depreciation method: {}",
                other
            ))),
        }
    }
}

/// Snapshot of a fixed asset at a point in time
///
/// Rolling an asset never mutates it; each period produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedAsset {
    pub id: u32,

    #[serde(default)]
    pub name: String,

    /// Net book value
    pub book_value: f64,

    pub accumulated_depreciation: f64,

    /// Residual value at the end of the useful life
    pub salvage_value: f64,

    /// Useful life in years (always > 0)
    pub useful_life: u32,

    pub depreciation_method: DepreciationMethod,

    /// Depreciation charged in the period this snapshot describes
    #[serde(default)]
    pub depreciation: f64,
}

impl FixedAsset {
    pub fn new(
        id: u32,
        book_value: f64,
        accumulated_depreciation: f64,
        salvage_value: f64,
        useful_life: u32,
        depreciation_method: DepreciationMethod,
    ) -> Result<Self> {
        let asset = Self {
            id,
            name: String::new(),
            book_value,
            accumulated_depreciation,
            salvage_value,
            useful_life,
            depreciation_method,
            depreciation: 0.0,
        };
        asset.validate()?;
        Ok(asset)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.useful_life == 0 {
            return Err(ValuationError::validation(format!(
                "fixed asset {}: useful_life must be positive",
                self.id
            )));
        }
        for (field, value) in [
            ("book_value", self.book_value),
            ("accumulated_depreciation", self.accumulated_depreciation),
            ("salvage_value", self.salvage_value),
            ("depreciation", self.depreciation),
        ] {
            if !value.is_finite() {
                return Err(ValuationError::validation(format!(
                    "fixed asset {}: {} must be finite, got {}",
                    self.id, field, value
                )));
            }
        }
        Ok(())
    }

    /// Gross cost less salvage: the amount spread over the useful life
    pub fn depreciable_base(&self) -> f64 {
        self.book_value + self.accumulated_depreciation - self.salvage_value
    }
}
