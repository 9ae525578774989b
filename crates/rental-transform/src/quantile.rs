//! Quantile binning with duplicate edges collapsed.
//!
//! Edges are the `0, 1/q, ..., 1` quantiles of the input (linear
//! interpolation between order statistics). Equal edges are merged, so a
//! skewed column can produce fewer than `q` bins. Bins are right-closed and
//! the first bin also includes its lower edge, so every input value lands in
//! exactly one bin.

use rental_ingest::format_numeric;
use serde::Serialize;

/// Bin count used by the dashboard.
pub const DEFAULT_QUANTILES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantileBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl QuantileBin {
    /// Interval notation, `[lo, hi]` for the first bin and `(lo, hi]` after.
    pub fn label(&self, first: bool) -> String {
        let open = if first { '[' } else { '(' };
        format!(
            "{open}{}, {}]",
            format_numeric(round3(self.lower)),
            format_numeric(round3(self.upper))
        )
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let position = q.clamp(0.0, 1.0) * last as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * fraction
}

/// Distinct quantile edges of `sorted` for `quantiles` bins.
pub fn quantile_edges(sorted: &[f64], quantiles: usize) -> Vec<f64> {
    if sorted.is_empty() || quantiles == 0 {
        return Vec::new();
    }
    let mut edges: Vec<f64> = (0..=quantiles)
        .map(|step| quantile(sorted, step as f64 / quantiles as f64))
        .collect();
    edges.dedup();
    edges
}

/// Buckets `values` into at most `quantiles` bins and counts each bin.
///
/// Never fails: no input gives no bins; a single distinct value gives one
/// bin holding everything. NaN values are ignored.
pub fn quantile_bins(values: &[f64], quantiles: usize) -> Vec<QuantileBin> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    let edges = quantile_edges(&sorted, quantiles);
    match edges.len() {
        0 => Vec::new(),
        1 => vec![QuantileBin {
            lower: edges[0],
            upper: edges[0],
            count: sorted.len(),
        }],
        _ => {
            let mut bins: Vec<QuantileBin> = edges
                .windows(2)
                .map(|pair| QuantileBin {
                    lower: pair[0],
                    upper: pair[1],
                    count: 0,
                })
                .collect();
            let uppers = &edges[1..];
            let last = bins.len() - 1;
            for value in &sorted {
                let idx = uppers.partition_point(|edge| edge < value).min(last);
                bins[idx].count += 1;
            }
            bins
        }
    }
}
