//! Index-rate compounding over a range of planning years
//!
//! Each year's growth factor is `1 + normal_rate + extra_rate`; the cumulative
//! rate is the running product of those factors, so year `i` carries the
//! compounded change from the start of the range through the end of year `i`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValuationError};
use crate::models::YearRange;

/// One year of a compounded rate series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRow {
    pub year: i32,
    pub normal_rate: f64,
    pub extra_rate: f64,
    /// Product of `1 + normal_rate + extra_rate` over this and all earlier years
    pub cumulative_rate: f64,
}

/// Year-indexed table of cumulative compounding factors, in ascending year order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSeries {
    pub rows: Vec<RateRow>,
}

impl RateSeries {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RateRow> {
        self.rows.iter()
    }

    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.year).collect()
    }

    /// Cumulative factor for a given year, if it is in the series
    pub fn cumulative_rate(&self, year: i32) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.year == year)
            .map(|r| r.cumulative_rate)
    }

    /// Cumulative factor at the end of the range
    pub fn final_rate(&self) -> Option<f64> {
        self.rows.last().map(|r| r.cumulative_rate)
    }

    /// Project a base value (a cost input, a market rate) through the series
    pub fn apply(&self, base: f64) -> Vec<(i32, f64)> {
        self.rows
            .iter()
            .map(|r| (r.year, base * r.cumulative_rate))
            .collect()
    }
}

impl<'a> IntoIterator for &'a RateSeries {
    type Item = &'a RateRow;
    type IntoIter = std::slice::Iter<'a, RateRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Compound `normal_rate` plus per-year `extra_rates` across `year`
///
/// `extra_rates`, when given, must hold exactly one rate per year in the range;
/// `None` is equivalent to all zeros.
pub fn compute_rate_series(
    year: &YearRange,
    normal_rate: f64,
    extra_rates: Option<&[f64]>,
) -> Result<RateSeries> {
    if !normal_rate.is_finite() {
        return Err(ValuationError::validation(format!(
            "normal rate must be finite, got {}",
            normal_rate
        )));
    }

    if let Some(extra) = extra_rates {
        if extra.len() != year.length() as usize {
            return Err(ValuationError::validation(format!(
                "expected {} extra rates for {}..={}, got {}",
                year.length(),
                year.start(),
                year.end(),
                extra.len()
            )));
        }
        if let Some(bad) = extra.iter().find(|r| !r.is_finite()) {
            return Err(ValuationError::validation(format!(
                "extra rates must be finite, got {}",
                bad
            )));
        }
    }

    let mut cumulative = 1.0;
    let rows: Vec<RateRow> = year
        .years()
        .enumerate()
        .map(|(i, y)| {
            let extra_rate = extra_rates.map_or(0.0, |extra| extra[i]);
            cumulative *= normal_rate + extra_rate + 1.0;
            RateRow {
                year: y,
                normal_rate,
                extra_rate,
                cumulative_rate: cumulative,
            }
        })
        .collect();

    log::debug!(
        "compounded {} years from {} at normal rate {}: final factor {}",
        rows.len(),
        year.start(),
        normal_rate,
        cumulative
    );

    Ok(RateSeries { rows })
}

/// Alias for [`compute_rate_series`] under the planning-sheet name
pub fn change_factor(
    year: &YearRange,
    normal_rate: f64,
    extra_rates: Option<&[f64]>,
) -> Result<RateSeries> {
    compute_rate_series(year, normal_rate, extra_rates)
}
