//! Writes a dashboard view to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rental_model::City;
use rental_transform::{DashboardView, MapOutcome, MapView};
use tracing::{debug, info};

use crate::charts::render_chart;
use crate::map::{deck_json, render_map};

/// Writes the chart as `<variable>.svg` and, when a map was rendered,
/// `map_<city>.svg` plus `map_<city>.json`. A map notice removes that
/// city's map files left by an earlier interaction. Returns the written
/// paths.
pub fn write_view_outputs(output_dir: &Path, view: &DashboardView) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let mut outputs = Vec::new();
    let chart_path = output_dir.join(format!("{}.svg", view.variable.column()));
    svg::save(&chart_path, &render_chart(&view.chart))
        .with_context(|| format!("write {}", chart_path.display()))?;
    debug!(path = %chart_path.display(), kind = %view.kind, "chart written");
    outputs.push(chart_path);

    match &view.map {
        Some(MapOutcome::Rendered(map)) => outputs.extend(write_map(output_dir, map)?),
        Some(MapOutcome::Notice(notice)) => remove_map(output_dir, notice.city())?,
        None => {}
    }

    info!(
        variable = %view.variable,
        files = outputs.len(),
        "dashboard outputs written"
    );
    Ok(outputs)
}

fn map_paths(output_dir: &Path, city: City) -> [PathBuf; 2] {
    let slug = city.slug();
    [
        output_dir.join(format!("map_{slug}.svg")),
        output_dir.join(format!("map_{slug}.json")),
    ]
}

fn write_map(output_dir: &Path, map: &MapView) -> Result<Vec<PathBuf>> {
    let [svg_path, json_path] = map_paths(output_dir, map.city);
    svg::save(&svg_path, &render_map(map))
        .with_context(|| format!("write {}", svg_path.display()))?;

    let deck = serde_json::to_string_pretty(&deck_json(map))?;
    std::fs::write(&json_path, deck).with_context(|| format!("write {}", json_path.display()))?;
    debug!(path = %json_path.display(), points = map.points.len(), "map written");
    Ok(vec![svg_path, json_path])
}

fn remove_map(output_dir: &Path, city: City) -> Result<()> {
    for path in map_paths(output_dir, city) {
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("remove {}", path.display()))?;
            debug!(path = %path.display(), "stale map removed");
        }
    }
    Ok(())
}
