//! Jittered one-dimensional point distributions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Maximum horizontal offset from the category center.
pub const JITTER: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripPoint {
    /// Category slot plus jitter.
    pub x: f64,
    pub y: f64,
}

/// Places `values` around slot `slot` with deterministic jitter.
///
/// The same `slot` and values always produce the same points, so repeated
/// renders of one selection are identical.
pub fn strip_points(slot: usize, values: &[f64]) -> Vec<StripPoint> {
    let mut rng = StdRng::seed_from_u64(slot as u64);
    values
        .iter()
        .map(|&y| StripPoint {
            x: slot as f64 + rng.gen_range(-JITTER..=JITTER),
            y,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_stay_in_their_slot() {
        let points = strip_points(2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(points.len(), 4);
        for point in &points {
            assert!((point.x - 2.0).abs() <= JITTER);
        }
        assert_eq!(points.iter().map(|p| p.y).collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn jitter_is_deterministic() {
        assert_eq!(strip_points(1, &[5.0, 6.0]), strip_points(1, &[5.0, 6.0]));
    }
}
