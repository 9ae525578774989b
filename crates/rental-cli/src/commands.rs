//! Subcommand bodies.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use rental_ingest::DatasetCache;
use rental_model::Selection;
use rental_report::write_view_outputs;
use rental_transform::{DashboardView, build_view};

use crate::config::DashboardConfig;
use crate::session::{SessionLine, apply_updates, parse_line};
use crate::summary::{print_view, variables_table};

pub fn run_variables() {
    println!("{}", variables_table());
}

/// Renders `selection` against the cached datasets and writes its files.
pub fn render_selection(
    cache: &DatasetCache,
    selection: &Selection,
    output_dir: &Path,
) -> Result<(DashboardView, Vec<PathBuf>)> {
    let span = info_span!("render", variable = %selection.variable);
    let _guard = span.enter();
    let datasets = cache.get().context("load listings")?;
    let view = build_view(datasets, selection)
        .with_context(|| format!("build view for {}", selection.variable))?;
    for notice in &view.notices {
        warn!(%notice, "no chart output");
    }
    let written = write_view_outputs(output_dir, &view)?;
    Ok((view, written))
}

pub fn run_render(config: &DashboardConfig, selection: &Selection) -> Result<()> {
    let cache = DatasetCache::new(config.sources()?);
    let (view, written) = render_selection(&cache, selection, &config.output_dir)?;
    print_view(&view, &written);
    Ok(())
}

/// Reads interactions from `input` until `quit` or end of input.
///
/// The initial selection is rendered before the first line. A line that
/// fails to parse or apply is reported on `errors` and leaves the
/// selection unchanged; a failed render keeps the new selection so the next
/// line retries against it. Returns the number of successful renders.
pub fn run_session<R: BufRead, W: Write>(
    config: &DashboardConfig,
    initial: Selection,
    input: R,
    mut errors: W,
) -> Result<usize> {
    let cache = DatasetCache::new(config.sources()?);
    let mut selection = initial;
    let mut renders = 0;
    let mut render = |selection: &Selection, errors: &mut W| -> Result<()> {
        match render_selection(&cache, selection, &config.output_dir) {
            Ok((view, written)) => {
                print_view(&view, &written);
                renders += 1;
            }
            Err(err) => {
                error!("{err:#}");
                writeln!(errors, "error: {err:#}")?;
            }
        }
        Ok(())
    };

    render(&selection, &mut errors)?;
    for line in input.lines() {
        let line = line.context("read session input")?;
        let updates = match parse_line(&line) {
            Ok(SessionLine::Quit) => break,
            Ok(SessionLine::Blank) => continue,
            Ok(SessionLine::Updates(updates)) => updates,
            Err(err) => {
                writeln!(errors, "error: {err:#}")?;
                continue;
            }
        };
        match apply_updates(&selection, &updates) {
            Ok(next) => selection = next,
            Err(err) => {
                writeln!(errors, "error: {err:#}")?;
                continue;
            }
        }
        render(&selection, &mut errors)?;
    }
    info!(renders, "session ended");
    Ok(renders)
}
