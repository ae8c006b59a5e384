//! Depreciation of a single fixed asset and its year-by-year roll-forward

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuationError};
use crate::models::{DepreciationMethod, FixedAsset, YearRange};

/// One financial year of a depreciation schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationRow {
    pub year: i32,
    /// Asset state at the end of `year`, with `depreciation` set to the year's charge
    pub asset: FixedAsset,
}

/// Depreciation schedule of one asset over a range of financial years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationSchedule {
    pub asset_id: u32,
    /// Charge per year, fixed from the asset state at the start of the roll
    pub depreciation_per_period: f64,
    pub rows: Vec<DepreciationRow>,
}

impl DepreciationSchedule {
    /// Book value at the end of the last year
    pub fn final_book_value(&self) -> Option<f64> {
        self.rows.last().map(|r| r.asset.book_value)
    }

    /// Depreciation charged over the whole schedule
    pub fn total_depreciation(&self) -> f64 {
        self.rows.iter().map(|r| r.asset.depreciation).sum()
    }

    pub fn row(&self, year: i32) -> Option<&DepreciationRow> {
        self.rows.iter().find(|r| r.year == year)
    }
}

/// Depreciation calculator for one fixed asset
#[derive(Debug, Clone)]
pub struct FixedAssetRoller {
    asset: FixedAsset,
}

impl FixedAssetRoller {
    pub fn new(asset: FixedAsset) -> Result<Self> {
        asset.validate()?;
        Ok(Self { asset })
    }

    pub fn asset(&self) -> &FixedAsset {
        &self.asset
    }

    /// Per-period charge for the asset's current state
    ///
    /// Straight line spreads `book_value + accumulated_depreciation - salvage_value`
    /// evenly over `useful_life`. The declining-balance methods are not computed.
    pub fn depreciation(&self) -> Result<f64> {
        match self.asset.depreciation_method {
            DepreciationMethod::StraightLine => {
                Ok(self.asset.depreciable_base() / self.asset.useful_life as f64)
            }
            method @ (DepreciationMethod::DecliningBalance
            | DepreciationMethod::DoubleDecliningBalance) => {
                Err(ValuationError::UnsupportedMethod(method))
            }
        }
    }

    /// Book value after charging the snapshot's recorded `depreciation`
    pub fn book_value(&self) -> f64 {
        self.asset.book_value - self.asset.depreciation
    }

    /// Accumulated depreciation after charging the snapshot's recorded `depreciation`
    pub fn accumulated_depreciation(&self) -> f64 {
        self.asset.accumulated_depreciation + self.asset.depreciation
    }

    /// Snapshot after one period: the computed charge applied once
    pub fn fixed_asset(&self) -> Result<FixedAsset> {
        let charge = self.depreciation()?;
        Ok(step(&self.asset, charge))
    }

    /// Roll the asset forward across every year of `financial_year`
    ///
    /// The charge is computed once from the starting state and applied to each
    /// year in turn. Book value is not floored at salvage value.
    pub fn roll(&self, financial_year: &YearRange) -> Result<DepreciationSchedule> {
        let charge = self.depreciation()?;

        let mut current = self.asset.clone();
        let mut warned = false;
        let mut rows = Vec::with_capacity(financial_year.length() as usize);

        for year in financial_year.years() {
            current = step(&current, charge);

            if !warned && current.book_value < current.salvage_value {
                log::warn!(
                    "fixed asset {} book value {:.2} falls below salvage value {:.2} in {}",
                    current.id,
                    current.book_value,
                    current.salvage_value,
                    year
                );
                warned = true;
            }

            rows.push(DepreciationRow {
                year,
                asset: current.clone(),
            });
        }

        log::debug!(
            "rolled fixed asset {} over {}..={} at {:.4} per year",
            self.asset.id,
            financial_year.start(),
            financial_year.end(),
            charge
        );

        Ok(DepreciationSchedule {
            asset_id: self.asset.id,
            depreciation_per_period: charge,
            rows,
        })
    }
}

fn step(asset: &FixedAsset, charge: f64) -> FixedAsset {
    FixedAsset {
        depreciation: charge,
        book_value: asset.book_value - charge,
        accumulated_depreciation: asset.accumulated_depreciation + charge,
        ..asset.clone()
    }
}

/// Roll `fixed_asset` over `length` financial years starting at `start_year`
pub fn roll_depreciation(
    fixed_asset: &FixedAsset,
    start_year: i32,
    length: u32,
) -> Result<DepreciationSchedule> {
    let range = YearRange::new(start_year, length)?;
    FixedAssetRoller::new(fixed_asset.clone())?.roll(&range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn press_line() -> FixedAsset {
        FixedAsset::new(1, 1100.0, 100.0, 100.0, 10, DepreciationMethod::StraightLine).unwrap()
    }

    #[test]
    fn test_two_year_roll() {
        let schedule = roll_depreciation(&press_line(), 2024, 2).unwrap();

        assert_relative_eq!(schedule.depreciation_per_period, 110.0, epsilon = 1e-9);
        assert_eq!(schedule.rows.len(), 2);

        let y1 = &schedule.rows[0];
        assert_eq!(y1.year, 2024);
        assert_relative_eq!(y1.asset.depreciation, 110.0, epsilon = 1e-9);
        assert_relative_eq!(y1.asset.book_value, 990.0, epsilon = 1e-9);
        assert_relative_eq!(y1.asset.accumulated_depreciation, 210.0, epsilon = 1e-9);

        let y2 = &schedule.rows[1];
        assert_eq!(y2.year, 2025);
        assert_relative_eq!(y2.asset.book_value, 880.0, epsilon = 1e-9);
        assert_relative_eq!(y2.asset.accumulated_depreciation, 320.0, epsilon = 1e-9);
    }

    #[test]
    fn test_charge_constant_and_additive() {
        let asset = FixedAsset::new(9, 84000.0, 36000.0, 12000.0, 8, DepreciationMethod::StraightLine)
            .unwrap();
        let schedule = roll_depreciation(&asset, 2020, 6).unwrap();
        let charge = schedule.depreciation_per_period;
        assert_relative_eq!(charge, 13500.0, epsilon = 1e-9);

        for (n, row) in schedule.rows.iter().enumerate() {
            assert_eq!(row.asset.depreciation, charge);
            assert_relative_eq!(
                row.asset.accumulated_depreciation,
                asset.accumulated_depreciation + (n as f64 + 1.0) * charge,
                epsilon = 1e-6
            );
        }
        assert_relative_eq!(schedule.total_depreciation(), 6.0 * charge, epsilon = 1e-6);
    }

    #[test]
    fn test_single_year_matches_one_step() {
        let roller = FixedAssetRoller::new(press_line()).unwrap();
        let schedule = roller.roll(&YearRange::new(2024, 1).unwrap()).unwrap();
        assert_eq!(schedule.rows.len(), 1);
        assert_eq!(schedule.rows[0].asset, roller.fixed_asset().unwrap());
    }

    #[test]
    fn test_no_floor_at_salvage_value() {
        let schedule = roll_depreciation(&press_line(), 2024, 15).unwrap();
        let values: Vec<f64> = schedule.rows.iter().map(|r| r.asset.book_value).collect();

        assert!(values.windows(2).all(|w| w[1] < w[0]));
        assert!(schedule.final_book_value().unwrap() < 100.0);
        assert_relative_eq!(schedule.final_book_value().unwrap(), 1100.0 - 15.0 * 110.0, epsilon = 1e-6);
        assert!(schedule.final_book_value().unwrap() < 0.0);
    }

    #[test]
    fn test_declining_balance_unsupported() {
        for method in [
            DepreciationMethod::DecliningBalance,
            DepreciationMethod::DoubleDecliningBalance,
        ] {
            let asset = FixedAsset::new(2, 1000.0, 0.0, 0.0, 5, method).unwrap();
            let result = roll_depreciation(&asset, 2024, 3);
            assert!(matches!(result, Err(ValuationError::UnsupportedMethod(m)) if m == method));
        }
    }

    #[test]
    fn test_recorded_depreciation_step() {
        let mut asset = press_line();
        asset.depreciation = 50.0;
        let roller = FixedAssetRoller::new(asset).unwrap();
        assert_relative_eq!(roller.book_value(), 1050.0);
        assert_relative_eq!(roller.accumulated_depreciation(), 150.0);
    }

    #[test]
    fn test_input_not_mutated() {
        let asset = press_line();
        let _ = roll_depreciation(&asset, 2024, 4).unwrap();
        assert_eq!(asset, press_line());
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            roll_depreciation(&press_line(), 2024, 0),
            Err(ValuationError::Validation(_))
        ));
    }

    #[test]
    fn test_schedule_row_lookup() {
        let schedule = roll_depreciation(&press_line(), 2024, 3).unwrap();
        assert_relative_eq!(schedule.row(2026).unwrap().asset.book_value, 770.0, epsilon = 1e-9);
        assert!(schedule.row(2027).is_none());
    }
}
