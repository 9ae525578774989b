//! Two-slice proportions for boolean-like flags.

use serde::Serialize;

/// Values read as "true" (case-insensitive).
const TRUTHY: [&str; 5] = ["t", "true", "1", "yes", "y"];

pub fn is_truthy(value: &str) -> bool {
    let trimmed = value.trim();
    TRUTHY.iter().any(|t| trimmed.eq_ignore_ascii_case(t))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    /// Percentage rounded to one decimal place.
    pub percent: f64,
}

/// A flag split into its truthy share and everything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryShares {
    pub truthy: Slice,
    pub other: Slice,
}

impl BinaryShares {
    /// Splits `values`; missing values count toward the complement.
    ///
    /// Returns `None` when there are no rows at all.
    pub fn from_values(values: &[Option<String>]) -> Option<Self> {
        let total = values.len();
        if total == 0 {
            return None;
        }
        let truthy = values
            .iter()
            .filter(|value| value.as_deref().is_some_and(is_truthy))
            .count();
        let other = total - truthy;
        Some(Self {
            truthy: slice("True", truthy, total),
            other: slice("False", other, total),
        })
    }

    pub fn slices(&self) -> [&Slice; 2] {
        [&self.truthy, &self.other]
    }
}

fn slice(label: &str, count: usize, total: usize) -> Slice {
    let percent = (count as f64 / total as f64 * 1000.0).round() / 10.0;
    Slice {
        label: label.to_string(),
        count,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_listing_flags() {
        assert!(is_truthy("t"));
        assert!(is_truthy("True"));
        assert!(is_truthy(" 1 "));
        assert!(!is_truthy("f"));
        assert!(!is_truthy("False"));
        assert!(!is_truthy(""));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let values: Vec<Option<String>> = ["t", "f", "f"]
            .iter()
            .map(|v| Some((*v).to_string()))
            .chain(std::iter::once(None))
            .collect();
        let shares = BinaryShares::from_values(&values).unwrap();
        assert_eq!(shares.truthy.count, 1);
        assert_eq!(shares.other.count, 3);
        assert_eq!(shares.truthy.percent, 25.0);
        assert_eq!(shares.other.percent, 75.0);
    }

    #[test]
    fn thirds_round_to_one_decimal() {
        let values: Vec<Option<String>> = ["t", "f", "f"]
            .iter()
            .map(|v| Some((*v).to_string()))
            .collect();
        let shares = BinaryShares::from_values(&values).unwrap();
        assert_eq!(shares.truthy.percent, 33.3);
        assert_eq!(shares.other.percent, 66.7);
        let sum = shares.truthy.percent + shares.other.percent;
        assert!((sum - 100.0).abs() <= 0.1 + 1e-9);
    }

    #[test]
    fn empty_column_has_no_pie() {
        assert!(BinaryShares::from_values(&[]).is_none());
    }
}
