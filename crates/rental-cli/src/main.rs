//! Rental listings dashboard CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use rental_cli::commands::{run_render, run_session, run_variables};
use rental_cli::config::DashboardConfig;
use rental_cli::logging::{LogConfig, LogFormat, init_logging};
use rental_model::{City, Selection, Variable};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, DirArgs, LogFormatArg, LogLevelArg, RenderArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Variables => {
            run_variables();
            Ok(())
        }
        Command::Render(args) => {
            let selection = render_selection(&args)?;
            let config = load_config(cli.config.as_deref(), args.dirs)?;
            run_render(&config, &selection)
        }
        Command::Session(args) => {
            let config = load_config(cli.config.as_deref(), args.dirs)?;
            // First entry of the selector.
            let variable = args.variable.unwrap_or(Variable::Accommodates);
            run_session(
                &config,
                Selection::new(variable),
                io::stdin().lock(),
                io::stderr(),
            )?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>, dirs: DirArgs) -> Result<DashboardConfig> {
    Ok(DashboardConfig::load(path)?.with_overrides(dirs.data_dir, dirs.output_dir))
}

fn render_selection(args: &RenderArgs) -> Result<Selection> {
    let mut selection = Selection::new(args.variable)
        .with_show_table(args.table)
        .with_map_city(args.map_city.unwrap_or(City::ALL[0]))
        .with_table_city(args.table_city.unwrap_or(City::ALL[0]))
        .with_price_range(args.price_range);
    selection.set_width(args.width)?;
    selection.set_height(args.height)?;
    Ok(selection)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_command_writes_outputs() {
        let data = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        for city in City::ALL {
            std::fs::write(
                data.path().join(city.default_file_name()),
                "price,latitude,longitude,beds\n80,19.43,-99.13,1\n120,19.44,-99.14,2\n",
            )
            .unwrap();
        }
        let mut args: Vec<std::ffi::OsString> = [
            "rental-dashboard",
            "render",
            "--variable",
            "price_mxn",
            "--width",
            "12",
            "--map-city",
            "berlin",
        ]
        .into_iter()
        .map(Into::into)
        .collect();
        args.extend([
            "--data-dir".into(),
            data.path().as_os_str().to_owned(),
            "--output-dir".into(),
            output.path().as_os_str().to_owned(),
        ]);
        let cli = Cli::try_parse_from(args).unwrap();

        run(cli).unwrap();
        for name in ["price_mxn.svg", "map_berlin.svg", "map_berlin.json"] {
            assert!(output.path().join(name).is_file(), "{name} missing");
        }
    }
}
