//! Shared SVG building blocks: figures, scales, axes and labels.

use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Text};

/// Pixels per figure unit (inch).
pub const PX_PER_UNIT: f64 = 80.0;
pub const FONT: &str = "sans-serif";
const AXIS_COLOR: &str = "#333333";
const GRID_COLOR: &str = "#e5e5e5";

/// Plot area margins in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const DEFAULT: Margins = Margins {
        top: 40.0,
        right: 20.0,
        bottom: 50.0,
        left: 60.0,
    };
    /// Extra room below the axis for rotated category labels.
    pub const ROTATED_LABELS: Margins = Margins {
        top: 40.0,
        right: 20.0,
        bottom: 110.0,
        left: 60.0,
    };
}

/// A rectangular drawing region in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The plot region left after `margins`.
    pub fn inset(self, margins: Margins) -> Area {
        Area {
            x: self.x + margins.left,
            y: self.y + margins.top,
            width: (self.width - margins.left - margins.right).max(1.0),
            height: (self.height - margins.top - margins.bottom).max(1.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Splits into `rows` x `cols` equal cells, row-major.
    pub fn grid(self, rows: usize, cols: usize) -> Vec<Area> {
        let cell_width = self.width / cols as f64;
        let cell_height = self.height / rows as f64;
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                Area::new(
                    self.x + col as f64 * cell_width,
                    self.y + row as f64 * cell_height,
                    cell_width,
                    cell_height,
                )
            })
            .collect()
    }
}

/// Linear map from a data interval onto a pixel interval.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    /// A zero-width domain is widened by one unit each side.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (lo, hi) = domain;
        let domain = if (hi - lo).abs() < f64::EPSILON {
            (lo - 1.0, hi + 1.0)
        } else {
            domain
        };
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Roughly `target` round-numbered ticks covering `lo..=hi`.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || hi <= lo || target == 0 {
        return vec![lo];
    }
    let raw_step = (hi - lo) / target as f64;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw_step * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude);
    let start = (lo / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut tick = start;
    while tick <= hi + step * 1e-9 {
        ticks.push(if tick.abs() < step * 1e-9 { 0.0 } else { tick });
        tick += step;
    }
    ticks
}

/// Tick label without float noise.
pub fn tick_label(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    let s = format!("{rounded}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Empty white figure of `width` x `height` units.
pub fn figure(width: f64, height: f64) -> (Document, Area) {
    let px_width = (width * PX_PER_UNIT).round();
    let px_height = (height * PX_PER_UNIT).round();
    let document = Document::new()
        .set("width", px_width)
        .set("height", px_height)
        .set("viewBox", format!("0 0 {px_width} {px_height}"))
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", "white"),
        );
    (document, Area::new(0.0, 0.0, px_width, px_height))
}

pub fn text(content: impl Into<String>, x: f64, y: f64, size: f64) -> Text {
    Text::new(content.into())
        .set("x", x)
        .set("y", y)
        .set("font-family", FONT)
        .set("font-size", size)
        .set("fill", AXIS_COLOR)
}

pub fn title(content: &str, area: &Area) -> Text {
    text(content, area.center_x(), area.y + 22.0, 15.0)
        .set("text-anchor", "middle")
        .set("font-weight", "bold")
}

/// Label anchored at its end and rotated counter-clockwise by `degrees`.
pub fn rotated_label(content: &str, x: f64, y: f64, degrees: f64) -> Text {
    text(content, x, y, 11.0)
        .set("text-anchor", "end")
        .set("transform", format!("rotate({} {x} {y})", -degrees))
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", stroke)
        .set("stroke-width", 1)
}

/// Left and bottom axis lines plus y ticks and horizontal grid lines.
pub fn y_axis(plot: &Area, scale: &Scale, label: &str) -> Group {
    let (lo, hi) = scale.domain();
    let mut group = Group::new().set("class", "y-axis");
    for tick in nice_ticks(lo, hi, 5) {
        let y = scale.map(tick);
        group = group
            .add(line(plot.x, y, plot.right(), y, GRID_COLOR))
            .add(line(plot.x - 4.0, y, plot.x, y, AXIS_COLOR))
            .add(text(tick_label(tick), plot.x - 7.0, y + 4.0, 11.0).set("text-anchor", "end"));
    }
    group = group
        .add(line(plot.x, plot.y, plot.x, plot.bottom(), AXIS_COLOR))
        .add(line(plot.x, plot.bottom(), plot.right(), plot.bottom(), AXIS_COLOR));
    if !label.is_empty() {
        let x = plot.x - 45.0;
        let y = plot.y + plot.height / 2.0;
        group = group.add(
            text(label, x, y, 12.0)
                .set("text-anchor", "middle")
                .set("transform", format!("rotate(-90 {x} {y})")),
        );
    }
    group
}

/// X ticks for a numeric horizontal scale.
pub fn x_ticks(plot: &Area, scale: &Scale) -> Group {
    let (lo, hi) = scale.domain();
    let mut group = Group::new().set("class", "x-axis");
    for tick in nice_ticks(lo, hi, 6) {
        let x = scale.map(tick);
        group = group
            .add(line(x, plot.bottom(), x, plot.bottom() + 4.0, AXIS_COLOR))
            .add(text(tick_label(tick), x, plot.bottom() + 18.0, 11.0).set("text-anchor", "middle"));
    }
    group
}

pub fn x_axis_label(plot: &Area, label: &str, offset: f64) -> Text {
    text(label, plot.center_x(), plot.bottom() + offset, 12.0).set("text-anchor", "middle")
}
