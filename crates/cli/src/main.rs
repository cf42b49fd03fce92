use anyhow::{anyhow, Context};
use config::{Config, File};
use hexen::{timed, Grid, GridConfig, GridPoint, Path, PathConfig};
use log::LevelFilter;
use serde::Deserialize;
use simple_logger::SimpleLogger;
use std::{path::PathBuf, process};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for building hexagon terrain grids and walking paths across them.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexen")]
struct Opt {
    /// Path to a config file that defines the grid and the path to walk.
    /// Supported formats: JSON, TOML
    #[structopt(short, long)]
    config: PathBuf,

    /// How much to print once the path is walked. Supported values:
    ///
    /// summary - One line with the cost, step count and final status
    ///
    /// steps - The summary, plus every tile along the path
    ///
    /// grid - Everything in steps, plus every tile in the grid
    #[structopt(short, long, default_value = "steps")]
    report: Report,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different levels of output detail
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum Report {
    Summary,
    Steps,
    Grid,
}

/// Everything a config file holds
#[derive(Clone, Debug, Deserialize)]
struct RunConfig {
    grid: GridConfig,
    path: PathQuery,
}

/// The path to walk, in logical grid coordinates
#[derive(Copy, Clone, Debug, Deserialize)]
struct PathQuery {
    from: GridPoint,
    to: GridPoint,
    #[serde(default = "default_max_steps")]
    max_steps: usize,
}

fn default_max_steps() -> usize {
    PathConfig::default().max_steps
}

fn load_config(config_path: &std::path::Path) -> anyhow::Result<RunConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = load_config(&opt.config)?;
    let grid = timed!(
        "Grid build",
        log::Level::Info,
        Grid::from_config(&config.grid)
    )?;
    let path = Path::with_config(
        &grid,
        config.path.from,
        config.path.to,
        &PathConfig {
            max_steps: config.path.max_steps,
        },
    )?;

    match opt.report {
        Report::Summary => {
            // Only the header line of the full report
            let report = path.to_string();
            println!("{}", report.lines().next().unwrap_or_default());
        }
        Report::Steps => print!("{}", path),
        Report::Grid => {
            print!("{}", path);
            print!("{}", grid);
        }
    }
    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
