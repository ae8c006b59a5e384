//! MFV - Financial planning models for a manufacturing business
//!
//! This library provides:
//! - Canonical planning records (year ranges, inventory approaches, production flow, cost inputs)
//! - Index-rate compounding over a range of years
//! - Straight-line depreciation roll-forward for fixed assets and asset portfolios
//! - CSV loading of fixed-asset registers and CSV/JSON report writers

pub mod error;
pub mod models;
pub mod rate;
pub mod valuation;
pub mod output;

// Re-export commonly used types
pub use error::{Result, ValuationError};
pub use models::{
    YearRange, FinancialYear, FixedAsset, DepreciationMethod, InventoryManagementApproach,
    ProductionFlow, Input,
};
pub use rate::{compute_rate_series, change_factor, RateSeries, RateRow};
pub use valuation::{
    roll_depreciation, FixedAssetRoller, DepreciationSchedule, DepreciationRow, Valuation,
    YearTotals,
};
