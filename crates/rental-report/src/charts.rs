//! Drawing of chart plans as SVG documents.

use std::f64::consts::TAU;

use rental_transform::{
    BarGrid, BarPanel, ChartPlan, DensityPlot, PieGrid, PiePanel, StripPlot,
};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path, Rectangle};

use crate::figure::{
    Area, Margins, Scale, figure, rotated_label, text, title, x_axis_label, x_ticks, y_axis,
};

/// Draws any chart plan as one SVG document.
pub fn render_chart(plan: &ChartPlan) -> Document {
    match plan {
        ChartPlan::Strip(plot) => render_strip(plot),
        ChartPlan::CategoryGrid(grid) | ChartPlan::PriceTiers(grid) => render_bar_grid(grid),
        ChartPlan::Density(plot) => render_density(plot),
        ChartPlan::Pies(grid) => render_pies(grid),
    }
}

fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let pad = ((hi - lo) * 0.05).max(0.5);
    (lo - pad, hi + pad)
}

pub fn render_strip(plot: &StripPlot) -> Document {
    let (document, area) = figure(plot.size.width, plot.size.height);
    let chart = area.inset(Margins::DEFAULT);
    let (lo, hi) = plot
        .series
        .iter()
        .flat_map(|series| series.points.iter().map(|p| p.y))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });
    let (lo, hi) = if lo.is_finite() { padded(lo, hi) } else { (0.0, 1.0) };
    let slots = plot.series.len().max(1) as f64;
    let x_scale = Scale::new((-0.5, slots - 0.5), (chart.x, chart.right()));
    let y_scale = Scale::new((lo, hi), (chart.bottom(), chart.y));

    let mut points = Group::new().set("class", "strip");
    let mut labels = Group::new().set("class", "x-axis");
    for (slot, series) in plot.series.iter().enumerate() {
        let fill = series.color.hex();
        for point in &series.points {
            points = points.add(
                Circle::new()
                    .set("cx", x_scale.map(point.x))
                    .set("cy", y_scale.map(point.y))
                    .set("r", 3)
                    .set("fill", fill.clone())
                    .set("fill-opacity", 0.5),
            );
        }
        labels = labels.add(
            text(
                series.city.name(),
                x_scale.map(slot as f64),
                chart.bottom() + 18.0,
                11.0,
            )
            .set("text-anchor", "middle"),
        );
    }
    document
        .add(title(&plot.title, &area))
        .add(y_axis(&chart, &y_scale, ""))
        .add(points)
        .add(labels)
}

/// One bar chart inside `cell`.
pub fn bar_panel(panel: &BarPanel, cell: Area, rotation: f64) -> Group {
    let chart = cell.inset(Margins::ROTATED_LABELS);
    let max = panel.bars.iter().map(|bar| bar.count).max().unwrap_or(0) as f64;
    let y_scale = Scale::new((0.0, (max * 1.05).max(1.0)), (chart.bottom(), chart.y));
    let band = chart.width / panel.bars.len().max(1) as f64;
    let fill = panel.color.hex();

    let mut group = Group::new()
        .set("class", "bar-panel")
        .add(title(&panel.title, &cell))
        .add(y_axis(&chart, &y_scale, &panel.y_label));
    for (idx, bar) in panel.bars.iter().enumerate() {
        let x = chart.x + band * idx as f64;
        let top = y_scale.map(bar.count as f64);
        let center = x + band / 2.0;
        group = group
            .add(
                Rectangle::new()
                    .set("class", "bar")
                    .set("x", x + band * 0.1)
                    .set("y", top)
                    .set("width", band * 0.8)
                    .set("height", chart.bottom() - top)
                    .set("fill", fill.clone()),
            )
            .add(rotated_label(&bar.label, center, chart.bottom() + 14.0, rotation));
    }
    if !panel.x_label.is_empty() {
        group = group.add(x_axis_label(&chart, &panel.x_label, 95.0));
    }
    group
}

/// Four bar panels in a 2x2 grid.
pub fn render_bar_grid(grid: &BarGrid) -> Document {
    let (width, height) = if grid.separate_figures {
        (grid.size.width * 2.0, grid.size.height * 2.0)
    } else {
        (grid.size.width, grid.size.height)
    };
    let (mut document, area) = figure(width, height);
    for (panel, cell) in grid.panels.iter().zip(area.grid(2, 2)) {
        document = document.add(bar_panel(panel, cell, grid.label_rotation));
    }
    document
}

pub fn render_density(plot: &DensityPlot) -> Document {
    let (document, area) = figure(plot.size.width, plot.size.height);
    let chart = area.inset(Margins::DEFAULT);
    let all_points = || plot.series.iter().flat_map(|s| s.curve.points.iter());
    let (x_lo, x_hi) = all_points().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (x, _)| {
        (lo.min(*x), hi.max(*x))
    });
    let (x_lo, x_hi) = if x_lo.is_finite() { (x_lo, x_hi) } else { (0.0, 1.0) };
    let y_max = all_points().map(|(_, y)| *y).fold(0.0, f64::max);
    let x_scale = Scale::new((x_lo, x_hi), (chart.x, chart.right()));
    let y_scale = Scale::new((0.0, (y_max * 1.05).max(f64::EPSILON)), (chart.bottom(), chart.y));

    let mut curves = Group::new().set("class", "density");
    let mut legend = Group::new().set("class", "legend");
    for (idx, series) in plot.series.iter().enumerate() {
        let mut data = Data::new();
        for (i, (x, y)) in series.curve.points.iter().enumerate() {
            let point = (x_scale.map(*x) as f32, y_scale.map(*y) as f32);
            data = if i == 0 { data.move_to(point) } else { data.line_to(point) };
        }
        let stroke = series.color.hex();
        curves = curves.add(
            Path::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", stroke.clone())
                .set("stroke-width", 2),
        );
        let y = chart.y + 14.0 + 18.0 * idx as f64;
        let x = chart.right() - 130.0;
        legend = legend
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y - 8.0)
                    .set("width", 18)
                    .set("height", 3)
                    .set("fill", stroke),
            )
            .add(text(series.city.name(), x + 24.0, y, 11.0));
    }
    document
        .add(title(&plot.title, &area))
        .add(y_axis(&chart, &y_scale, "Density"))
        .add(x_ticks(&chart, &x_scale))
        .add(curves)
        .add(legend)
}

/// Polygon approximating the wedge between two angles (radians,
/// counter-clockwise from 3 o'clock).
fn wedge(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> Data {
    let steps = (((end - start) / TAU) * 120.0).ceil().max(2.0) as usize;
    let mut data = Data::new().move_to((cx as f32, cy as f32));
    for step in 0..=steps {
        let angle = start + (end - start) * step as f64 / steps as f64;
        let x = cx + radius * angle.cos();
        let y = cy - radius * angle.sin();
        data = data.line_to((x as f32, y as f32));
    }
    data.close()
}

/// One city's two-slice pie inside `cell`.
pub fn pie_panel(panel: &PiePanel, cell: Area) -> Group {
    let cx = cell.center_x();
    let cy = cell.y + cell.height / 2.0 + 10.0;
    let radius = cell.width.min(cell.height) * 0.33;
    let total = (panel.shares.truthy.count + panel.shares.other.count).max(1) as f64;
    let mut group = Group::new()
        .set("class", "pie")
        .add(title(panel.city.name(), &cell));
    let mut start = 0.0;
    for (slice, color) in panel.shares.slices().into_iter().zip(panel.colors) {
        let end = start + TAU * slice.count as f64 / total;
        let middle = (start + end) / 2.0;
        group = group
            .add(
                Path::new()
                    .set("class", "slice")
                    .set("d", wedge(cx, cy, radius, start, end))
                    .set("fill", color.hex()),
            )
            .add(
                text(
                    format!("{:.1}%", slice.percent),
                    cx + radius * 0.6 * middle.cos(),
                    cy - radius * 0.6 * middle.sin(),
                    11.0,
                )
                .set("text-anchor", "middle"),
            )
            .add(
                text(
                    slice.label.clone(),
                    cx + radius * 1.15 * middle.cos(),
                    cy - radius * 1.15 * middle.sin(),
                    11.0,
                )
                .set("text-anchor", "middle"),
            );
        start = end;
    }
    group
}

/// Pies two per row, in city order.
pub fn render_pies(grid: &PieGrid) -> Document {
    let rows: Vec<_> = grid.rows().collect();
    let row_count = rows.len().max(1);
    let (mut document, area) = figure(grid.size.width * 2.0, grid.size.height * row_count as f64);
    let cells = area.grid(row_count, 2);
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, panel) in row.iter().enumerate() {
            document = document.add(pie_panel(panel, cells[row_idx * 2 + col_idx]));
        }
    }
    document
}
