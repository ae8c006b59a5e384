//! Fixed-asset valuation
//!
//! Straight-line depreciation is computed once from an asset's starting state
//! and carried forward year by year:
//!
//! ```text
//! charge       = (book_value + accumulated_depreciation - salvage_value) / useful_life
//! book_value'  = book_value - charge
//! accumulated' = accumulated_depreciation + charge
//! ```
//!
//! # Example
//!
//! ```rust
//! use mfv::{roll_depreciation, DepreciationMethod, FixedAsset};
//!
//! let asset = FixedAsset::new(1, 1100.0, 100.0, 100.0, 10, DepreciationMethod::StraightLine)?;
//! let schedule = roll_depreciation(&asset, 2024, 2)?;
//! assert_eq!(schedule.depreciation_per_period, 110.0);
//! assert_eq!(schedule.final_book_value(), Some(880.0));
//! # Ok::<(), mfv::ValuationError>(())
//! ```

mod depreciation;
mod portfolio;

pub use depreciation::{roll_depreciation, DepreciationRow, DepreciationSchedule, FixedAssetRoller};
pub use portfolio::{aggregate, Valuation, YearTotals};
