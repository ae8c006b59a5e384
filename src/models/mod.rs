//! Canonical planning records and fixed-asset register loading

mod meta;
mod production;
mod hypothesis;
mod fixed_asset;
pub mod loader;

pub use meta::{YearRange, FinancialYear, InventoryManagementApproach};
pub use production::{ProductionFlow, Input};
pub use hypothesis::{CostingMethod, InputOutputRate, Weight, MainAssumption, FinancialRatio};
pub use fixed_asset::{FixedAsset, DepreciationMethod};
pub use loader::{load_fixed_assets, load_fixed_assets_from_reader, load_default_fixed_assets};
