use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexlattice::{timed, Cell, Grid, GridConfig, Point};
use log::{info, warn, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for generating hex grids and mapping them onto pixel space.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexlattice")]
struct Opt {
    /// Path to a config file that defines the grid to be generated. Supported
    /// formats: JSON, TOML. If omitted, the default config is used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// If given, the generated grid will be saved to this directory. The
    /// exact files that appear in the directory are defined by the output
    /// formats. See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the grid in. Supported formats:
    ///
    /// cfg - The full config object used for the grid, in TOML format
    ///
    /// json - JSON representation of the grid, which can be reloaded later
    ///
    /// points - JSON list of every cell with its pixel center and corners
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// Pixel position(s) to hit-test against the grid, formatted as `x,y`.
    /// The cell containing each point is logged.
    #[structopt(long)]
    pick: Vec<PointArg>,

    /// The logging level to use during grid generation. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the grid's full config in a human-readable file
    Cfg,
    /// Export the grid in a serialized JSON format, which can be deserialized
    /// later to recover the grid
    Json,
    /// Export the pixel geometry of every cell
    Points,
}

impl OutputFormat {
    fn file_name(self) -> &'static str {
        match self {
            Self::Cfg => "grid.toml",
            Self::Json => "grid.json",
            Self::Points => "points.json",
        }
    }
}

/// A pixel position passed on the command line, as `x,y`
#[derive(Copy, Clone, Debug, PartialEq)]
struct PointArg(Point);

impl FromStr for PointArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected x,y but got {:?}", s))?;
        let x = x.trim().parse::<f64>().context("invalid x coordinate")?;
        let y = y.trim().parse::<f64>().context("invalid y coordinate")?;
        Ok(Self(Point::new(x, y)))
    }
}

/// Pixel geometry for a single cell, used by the `points` output format
#[derive(Serialize)]
struct CellGeometry {
    cell: Cell,
    center: Point,
    corners: [Point; 6],
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Generate an output form of the grid in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    grid: &Grid,
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        grid: &Grid,
    ) -> anyhow::Result<Vec<u8>> {
        let bytes = match output_format {
            OutputFormat::Cfg => toml::to_string_pretty(grid.config())
                .context("error serializing config")?
                .into_bytes(),
            OutputFormat::Json => grid.to_json().into_bytes(),
            OutputFormat::Points => {
                let geometry: Vec<CellGeometry> = grid
                    .cells()
                    .iter()
                    .map(|cell| CellGeometry {
                        cell,
                        center: grid.center(cell),
                        corners: grid.corners(cell),
                    })
                    .collect();
                serde_json::to_vec(&geometry)
                    .context("error serializing points")?
            }
        };
        Ok(bytes)
    }

    let output_file_path = output_dir.join(output_format.file_name());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes = generate_bytes(output_format, grid)?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => {
            info!("No config file given, using defaults");
            GridConfig::default()
        }
    };
    let grid = Grid::generate(config)?;
    info!("Generated grid with {} cells", grid.len());

    for PointArg(point) in opt.pick {
        match grid.pick(point) {
            Some(cell) => info!("{} => {}", point, cell),
            None => warn!("{} is outside the grid", point),
        }
    }

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(&output_dir)?;

        for output_format in opt.output_formats {
            gen_output(&output_dir, output_format, &grid)?;
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
