//! MFV CLI
//!
//! Command-line interface for rate compounding and depreciation schedules

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use mfv::models::loader::{load_fixed_assets, DEFAULT_FIXED_ASSETS_PATH};
use mfv::output::{write_json, write_rate_series_csv, write_schedules_csv, write_totals_csv};
use mfv::{compute_rate_series, Valuation, YearRange};

#[derive(Debug, Parser)]
#[command(name = "mfv", version, about = "Factory financial planning calculations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compound a normal rate plus optional per-year extra rates
    Rate {
        /// First year (defaults to the current year)
        #[arg(long)]
        start: Option<i32>,

        /// Number of years
        #[arg(long)]
        length: u32,

        /// Normal rate per year, as a fraction (0.1 = 10%)
        #[arg(long, allow_negative_numbers = true)]
        normal_rate: f64,

        /// Extra rate per year, one per year, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        extra_rates: Option<Vec<f64>>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Roll a fixed-asset register forward over the financial years
    Depreciate {
        /// Fixed-asset register CSV
        #[arg(long, default_value = DEFAULT_FIXED_ASSETS_PATH)]
        assets: PathBuf,

        /// First financial year (defaults to the current year)
        #[arg(long)]
        start: Option<i32>,

        /// Number of financial years
        #[arg(long)]
        length: u32,

        /// Print register totals per year instead of per-asset schedules
        #[arg(long)]
        summary: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, clap::Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn year_range(start: Option<i32>, length: u32) -> Result<YearRange> {
    let range = match start {
        Some(start) => YearRange::new(start, length),
        None => YearRange::starting_this_year(length),
    };
    range.context("invalid year range")
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("unable to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    Ok(writer)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Rate {
            start,
            length,
            normal_rate,
            extra_rates,
            output,
        } => {
            let range = year_range(start, length)?;
            let series = compute_rate_series(&range, normal_rate, extra_rates.as_deref())
                .context("rate compounding failed")?;

            let writer = open_output(output.output.as_ref())?;
            match output.format {
                Format::Csv => write_rate_series_csv(writer, &series)?,
                Format::Json => write_json(writer, &series)?,
            }
        }
        Command::Depreciate {
            assets,
            start,
            length,
            summary,
            output,
        } => {
            let range = year_range(start, length)?;
            let register = load_fixed_assets(&assets)
                .with_context(|| format!("failed to load fixed assets from {}", assets.display()))?;
            log::info!("loaded {} fixed assets from {}", register.len(), assets.display());

            let valuation = Valuation::new(range, register)?;
            let writer = open_output(output.output.as_ref())?;

            if summary {
                let totals = valuation.summary().context("depreciation roll failed")?;
                match output.format {
                    Format::Csv => write_totals_csv(writer, &totals)?,
                    Format::Json => write_json(writer, &totals)?,
                }
            } else {
                let schedules = valuation.roll_all().context("depreciation roll failed")?;
                match output.format {
                    Format::Csv => write_schedules_csv(writer, &schedules)?,
                    Format::Json => write_json(writer, &schedules)?,
                }
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}
