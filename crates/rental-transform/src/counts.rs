//! Value counting for categorical bars and the summary table.

use std::collections::HashMap;

use serde::Serialize;

/// Label shown for missing values in the summary table.
pub const MISSING_LABEL: &str = "NaN";

/// Counts occurrences, ordered by descending count. Ties keep the order in
/// which values first appeared.
fn count_in_order<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Clone + Eq + std::hash::Hash,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for value in values {
        match index.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The `limit` most frequent non-missing values, most frequent first.
pub fn top_counts(values: &[Option<String>], limit: usize) -> Vec<(String, usize)> {
    let mut counts = count_in_order(values.iter().flatten().cloned());
    counts.truncate(limit);
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    /// `None` for the missing-value row.
    pub value: Option<String>,
    pub count: usize,
}

impl FrequencyRow {
    pub fn label(&self) -> &str {
        self.value.as_deref().unwrap_or(MISSING_LABEL)
    }
}

/// Distinct values of one variable in one city, missing values included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    pub variable: String,
    pub city: String,
    pub rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    pub const COUNT_HEADER: &'static str = "Frequency";

    pub fn build(variable: &str, city: &str, values: &[Option<String>]) -> Self {
        let rows = count_in_order(values.iter().cloned())
            .into_iter()
            .map(|(value, count)| FrequencyRow { value, count })
            .collect();
        Self {
            variable: variable.to_string(),
            city: city.to_string(),
            rows,
        }
    }

    /// Column headers: the variable name and `Frequency`.
    pub fn headers(&self) -> [&str; 2] {
        [self.variable.as_str(), Self::COUNT_HEADER]
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }
}
