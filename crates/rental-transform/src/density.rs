//! Gaussian kernel density estimation for score curves.

use std::f64::consts::PI;

use serde::Serialize;

/// Evaluation points per curve.
pub const GRID_POINTS: usize = 200;
/// How many bandwidths the grid extends past the data on each side.
pub const GRID_CUT: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityCurve {
    pub bandwidth: f64,
    /// `(x, density)` pairs in ascending `x`.
    pub points: Vec<(f64, f64)>,
}

/// Scott's rule bandwidth: `n^(-1/5) * sample std`.
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std = variance.sqrt();
    if std <= 0.0 || !std.is_finite() {
        return None;
    }
    Some(std * (n as f64).powf(-0.2))
}

/// Density curve over `values`, or `None` when the data has no spread.
pub fn gaussian_kde(values: &[f64]) -> Option<DensityCurve> {
    let bandwidth = scott_bandwidth(values)?;
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    let start = min - GRID_CUT * bandwidth;
    let end = max + GRID_CUT * bandwidth;
    let step = (end - start) / (GRID_POINTS - 1) as f64;
    let norm = 1.0 / (values.len() as f64 * bandwidth * (2.0 * PI).sqrt());
    let points = (0..GRID_POINTS)
        .map(|i| {
            let x = start + step * i as f64;
            let sum: f64 = values
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum();
            (x, sum * norm)
        })
        .collect();
    Some(DensityCurve { bandwidth, points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_values_have_no_curve() {
        assert!(gaussian_kde(&[4.5, 4.5, 4.5]).is_none());
        assert!(gaussian_kde(&[4.5]).is_none());
        assert!(gaussian_kde(&[]).is_none());
    }

    #[test]
    fn curve_integrates_to_about_one() {
        let values = [4.2, 4.5, 4.7, 4.8, 4.9, 5.0, 4.95, 4.6];
        let curve = gaussian_kde(&values).unwrap();
        assert_eq!(curve.points.len(), GRID_POINTS);
        let step = curve.points[1].0 - curve.points[0].0;
        let area: f64 = curve.points.iter().map(|(_, y)| y * step).sum();
        assert!((area - 1.0).abs() < 0.02, "area = {area}");
    }
}
