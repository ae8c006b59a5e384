//! CSV and JSON report writers

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::rate::RateSeries;
use crate::valuation::{DepreciationSchedule, YearTotals};

/// Write a rate series as `year,normal_rate,extra_rate,cumulative_rate`
pub fn write_rate_series_csv<W: Write>(writer: W, series: &RateSeries) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in series {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write schedules in long format, one line per asset and year
pub fn write_schedules_csv<W: Write>(writer: W, schedules: &[DepreciationSchedule]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "asset_id",
        "year",
        "depreciation",
        "book_value",
        "accumulated_depreciation",
    ])?;

    for schedule in schedules {
        for row in &schedule.rows {
            csv_writer.write_record([
                schedule.asset_id.to_string(),
                row.year.to_string(),
                format!("{:.2}", row.asset.depreciation),
                format!("{:.2}", row.asset.book_value),
                format!("{:.2}", row.asset.accumulated_depreciation),
            ])?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write per-year register totals
pub fn write_totals_csv<W: Write>(writer: W, totals: &[YearTotals]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in totals {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Pretty-printed JSON for any report value
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
