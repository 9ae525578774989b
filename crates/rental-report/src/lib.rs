//! Chart and map rendering for the listings dashboard.
//!
//! Charts are written as standalone SVG documents. The price map is written
//! both as an SVG scatter and as a JSON deck description that a web map
//! client can load directly.

mod charts;
mod figure;
mod map;
mod writer;

pub use charts::{render_bar_grid, render_chart, render_density, render_pies, render_strip};
pub use map::{deck_json, render_map};
pub use writer::write_view_outputs;
