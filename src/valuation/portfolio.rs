//! Portfolio valuation: roll every fixed asset over the financial years

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::depreciation::{DepreciationSchedule, FixedAssetRoller};
use crate::error::Result;
use crate::models::{FinancialYear, FixedAsset};

/// Aggregated depreciation figures for one financial year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearTotals {
    pub year: i32,
    pub depreciation: f64,
    pub book_value: f64,
    pub accumulated_depreciation: f64,
}

/// Fixed-asset register valued over a range of financial years
#[derive(Debug, Clone)]
pub struct Valuation {
    financial_year: FinancialYear,
    fixed_assets: Vec<FixedAsset>,
}

impl Valuation {
    pub fn new(financial_year: FinancialYear, fixed_assets: Vec<FixedAsset>) -> Result<Self> {
        for asset in &fixed_assets {
            asset.validate()?;
        }
        Ok(Self {
            financial_year,
            fixed_assets,
        })
    }

    pub fn financial_year(&self) -> &FinancialYear {
        &self.financial_year
    }

    /// Financial years in ascending order
    pub fn financial_years(&self) -> Vec<i32> {
        self.financial_year.years().collect()
    }

    pub fn fixed_assets(&self) -> &[FixedAsset] {
        &self.fixed_assets
    }

    /// Roll every asset in parallel, preserving register order
    ///
    /// Any failing asset fails the whole valuation.
    pub fn roll_all(&self) -> Result<Vec<DepreciationSchedule>> {
        let schedules = self
            .fixed_assets
            .par_iter()
            .map(|asset| FixedAssetRoller::new(asset.clone())?.roll(&self.financial_year))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "valued {} fixed assets over {} financial years",
            schedules.len(),
            self.financial_year.length()
        );
        Ok(schedules)
    }

    /// Register totals per financial year
    pub fn summary(&self) -> Result<Vec<YearTotals>> {
        let schedules = self.roll_all()?;
        Ok(aggregate(&self.financial_year, &schedules))
    }
}

/// Sum schedules into one row per financial year
///
/// Rows for years outside `financial_year` are skipped with a warning.
pub fn aggregate(financial_year: &FinancialYear, schedules: &[DepreciationSchedule]) -> Vec<YearTotals> {
    let start = financial_year.start();
    let mut totals: Vec<YearTotals> = financial_year
        .years()
        .map(|year| YearTotals { year, ..Default::default() })
        .collect();

    for schedule in schedules {
        for row in &schedule.rows {
            let slot = usize::try_from(row.year as i64 - start as i64)
                .ok()
                .and_then(|idx| totals.get_mut(idx));
            match slot {
                Some(agg) => {
                    agg.depreciation += row.asset.depreciation;
                    agg.book_value += row.asset.book_value;
                    agg.accumulated_depreciation += row.asset.accumulated_depreciation;
                }
                None => log::warn!(
                    "fixed asset {} row for {} is outside {}..={}, not aggregated",
                    schedule.asset_id,
                    row.year,
                    start,
                    financial_year.end()
                ),
            }
        }
    }

    totals
}
