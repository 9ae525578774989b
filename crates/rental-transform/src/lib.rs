pub mod binary;
pub mod counts;
pub mod density;
pub mod error;
pub mod map;
pub mod plan;
pub mod quantile;
pub mod strip;

pub use binary::{BinaryShares, Slice, is_truthy};
pub use counts::{FrequencyRow, FrequencyTable, MISSING_LABEL, top_counts};
pub use density::{DensityCurve, gaussian_kde};
pub use error::{Result, TransformError};
pub use map::{
    MapOutcome, MapPoint, MapView, Notice, PriceBounds, build_map, geolocated_prices,
    price_bounds, price_color,
};
pub use plan::{
    Bar, BarGrid, BarPanel, ChartPlan, DashboardView, DensityPlot, DensitySeries, FigureSize,
    PieGrid, PiePanel, StripPlot, StripSeries, build_view, frequency_table,
};
pub use quantile::{QuantileBin, quantile_bins};
pub use strip::StripPoint;
