//! Load fixed-asset registers from CSV

use super::{DepreciationMethod, FixedAsset};
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Default location of the fixed-asset register
pub const DEFAULT_FIXED_ASSETS_PATH: &str = "data/fixed_assets.csv";

/// Raw CSV row of the fixed-asset register
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: u32,
    #[serde(default)]
    name: String,
    book_value: f64,
    accumulated_depreciation: f64,
    salvage_value: f64,
    useful_life: u32,
    depreciation_method: String,
    #[serde(default)]
    depreciation: Option<f64>,
}

impl CsvRow {
    fn to_fixed_asset(self) -> Result<FixedAsset> {
        let depreciation_method: DepreciationMethod = self.depreciation_method.parse()?;

        let asset = FixedAsset {
            id: self.id,
            name: self.name,
            book_value: self.book_value,
            accumulated_depreciation: self.accumulated_depreciation,
            salvage_value: self.salvage_value,
            useful_life: self.useful_life,
            depreciation_method,
            depreciation: self.depreciation.unwrap_or(0.0),
        };
        asset.validate()?;
        Ok(asset)
    }
}

/// Load all fixed assets from a CSV file
pub fn load_fixed_assets<P: AsRef<Path>>(path: P) -> Result<Vec<FixedAsset>> {
    let reader = Reader::from_path(path)?;
    collect_assets(reader)
}

/// Load fixed assets from any reader (e.g., string buffer, stdin)
pub fn load_fixed_assets_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<FixedAsset>> {
    collect_assets(Reader::from_reader(reader))
}

/// Load fixed assets from the default register location
pub fn load_default_fixed_assets() -> Result<Vec<FixedAsset>> {
    load_fixed_assets(DEFAULT_FIXED_ASSETS_PATH)
}

fn collect_assets<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<FixedAsset>> {
    let mut assets = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        assets.push(row.to_fixed_asset()?);
    }

    log::debug!("loaded {} fixed assets", assets.len());
    Ok(assets)
}
