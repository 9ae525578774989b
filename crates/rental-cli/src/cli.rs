//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rental_model::{
    City, DEFAULT_HEIGHT, DEFAULT_WIDTH, HEIGHT_BOUNDS, PriceRange, Variable, WIDTH_BOUNDS,
};

#[derive(Parser)]
#[command(
    name = "rental-dashboard",
    version,
    about = "Compare short-term rental listings across Rio de Janeiro, Naples, Berlin and Mexico",
    long_about = "Compare short-term rental listings across four cities.\n\n\
                  Prices are normalized to Mexican pesos (MXN). Each interaction\n\
                  selects one variable and writes its chart as SVG; the price\n\
                  variable also writes a per-city map."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML file with data/output directories and per-city file names.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every selectable variable and the chart it produces.
    Variables,

    /// Run one interaction and write its outputs.
    Render(RenderArgs),

    /// Read interactions from stdin, one `key=value` line at a time.
    Session(SessionArgs),
}

/// Where the listings are read from and charts written to.
#[derive(Args)]
pub struct DirArgs {
    /// Directory holding the four city CSV files.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory for generated SVG and JSON files.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub dirs: DirArgs,

    /// Variable to chart (see `variables`).
    #[arg(long = "variable", value_name = "NAME")]
    pub variable: Variable,

    /// Chart width in figure units.
    #[arg(
        long = "width",
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(*WIDTH_BOUNDS.start() as i64..=*WIDTH_BOUNDS.end() as i64)
    )]
    pub width: u32,

    /// Chart height in figure units.
    #[arg(
        long = "height",
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(*HEIGHT_BOUNDS.start() as i64..=*HEIGHT_BOUNDS.end() as i64)
    )]
    pub height: u32,

    /// City shown on the price map.
    #[arg(long = "map-city", value_name = "CITY")]
    pub map_city: Option<City>,

    /// Inclusive MXN price filter for the map, e.g. 500..2500.
    #[arg(long = "price-range", value_name = "LO..HI")]
    pub price_range: Option<PriceRange>,

    /// Print the frequency table for the selected variable.
    #[arg(long = "table")]
    pub table: bool,

    /// City whose frequency table is printed.
    #[arg(long = "table-city", value_name = "CITY")]
    pub table_city: Option<City>,
}

#[derive(Args)]
pub struct SessionArgs {
    #[command(flatten)]
    pub dirs: DirArgs,

    /// Variable selected before the first line is read.
    #[arg(long = "variable", value_name = "NAME")]
    pub variable: Option<Variable>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
