//! Group-by/sum aggregation and top-N truncation.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;
use vgsales_common::{SalesRecord, ValueColumn};

/// Per-group sums for a set of value columns.
///
/// `sums[i]` corresponds to the `i`-th requested column. `None` means no
/// row in the group carried a value for that column, which is distinct
/// from a group summing to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSums<K> {
    /// The group key.
    pub key: K,
    /// One sum per requested column, in request order.
    pub sums: Vec<Option<f64>>,
}

impl<K> GroupSums<K> {
    /// Sum across all columns of this group.
    ///
    /// Missing column sums are skipped; `None` when every column is
    /// missing, so the group drops out of single-value views entirely.
    pub fn combined(&self) -> Option<f64> {
        let mut total = None;
        for sum in self.sums.iter().flatten() {
            total = Some(total.unwrap_or(0.0) + sum);
        }
        total
    }
}

/// Groups rows by key and sums each value column independently.
///
/// Rows for which `key_fn` returns `None` are excluded. Missing values
/// are excluded from their column's sum rather than counted as zero.
/// The result carries one entry per distinct key, stably ordered by key
/// for reproducibility.
pub fn aggregate_by<K, F>(
    rows: &[&SalesRecord],
    key_fn: F,
    columns: &[ValueColumn],
) -> Vec<GroupSums<K>>
where
    K: Clone + Eq + Hash + Ord,
    F: Fn(&SalesRecord) -> Option<K>,
{
    let mut groups: HashMap<K, Vec<Option<f64>>> = HashMap::new();

    for row in rows {
        let Some(key) = key_fn(row) else {
            continue;
        };
        let sums = groups.entry(key).or_insert_with(|| vec![None; columns.len()]);
        for (slot, column) in sums.iter_mut().zip(columns) {
            if let Some(value) = column.value_of(row) {
                *slot = Some(slot.unwrap_or(0.0) + value);
            }
        }
    }

    let mut result: Vec<GroupSums<K>> = groups
        .into_iter()
        .map(|(key, sums)| GroupSums { key, sums })
        .collect();
    result.sort_by(|a, b| a.key.cmp(&b.key));

    debug!("Aggregated {} rows into {} groups", rows.len(), result.len());
    result
}

/// Sorts `(key, value)` pairs by value and keeps the first `n`.
///
/// The sort is stable, so ties keep the incoming (key-ordered) group
/// order.
pub fn top_n<K>(mut entries: Vec<(K, f64)>, n: usize, descending: bool) -> Vec<(K, f64)> {
    entries.sort_by(|a, b| {
        let ordering = a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgsales_common::Region;

    fn record(name: &str, genre: &str, na: Option<f64>, jp: Option<f64>) -> SalesRecord {
        SalesRecord {
            name: name.to_string(),
            platform: "PS2".to_string(),
            year_of_release: Some(2005),
            genre: Some(genre.to_string()),
            publisher: Some("EA".to_string()),
            na_sales: na,
            eu_sales: None,
            jp_sales: jp,
            other_sales: None,
            global_sales: None,
            critic_score: None,
            user_score: None,
            user_count: None,
        }
    }

    #[test]
    fn test_aggregate_sums_per_column() {
        let records = vec![
            record("A", "Action", Some(1.0), Some(0.5)),
            record("B", "Action", Some(2.0), None),
            record("C", "Sports", None, Some(0.25)),
        ];
        let rows: Vec<&SalesRecord> = records.iter().collect();
        let columns = [
            ValueColumn::Sales(Region::Na),
            ValueColumn::Sales(Region::Jp),
        ];

        let groups = aggregate_by(&rows, |r| r.genre.clone(), &columns);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "Action");
        assert_eq!(groups[0].sums, vec![Some(3.0), Some(0.5)]);
        assert_eq!(groups[1].key, "Sports");
        assert_eq!(groups[1].sums, vec![None, Some(0.25)]);
    }

    #[test]
    fn test_aggregate_ordered_by_key() {
        let records = vec![
            record("A", "Sports", Some(1.0), None),
            record("B", "Action", Some(1.0), None),
            record("C", "Racing", Some(1.0), None),
        ];
        let rows: Vec<&SalesRecord> = records.iter().collect();
        let groups = aggregate_by(&rows, |r| r.genre.clone(), &[ValueColumn::Sales(Region::Na)]);
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Action", "Racing", "Sports"]);
    }

    #[test]
    fn test_aggregate_skips_keyless_rows() {
        let mut undated = record("A", "Action", Some(1.0), None);
        undated.year_of_release = None;
        let records = vec![undated, record("B", "Action", Some(2.0), None)];
        let rows: Vec<&SalesRecord> = records.iter().collect();

        let groups = aggregate_by(&rows, |r| r.year_of_release, &[ValueColumn::Sales(Region::Na)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, 2005);
        assert_eq!(groups[0].sums, vec![Some(2.0)]);
    }

    #[test]
    fn test_combined_skips_missing_columns() {
        let group = GroupSums {
            key: "Action",
            sums: vec![Some(1.0), None, Some(2.5)],
        };
        assert_eq!(group.combined(), Some(3.5));

        let empty = GroupSums {
            key: "Sports",
            sums: vec![None, None],
        };
        assert_eq!(empty.combined(), None);
    }

    #[test]
    fn test_top_n_sorts_and_truncates() {
        let entries = vec![
            ("A".to_string(), 1.0),
            ("B".to_string(), 5.0),
            ("C".to_string(), 3.0),
            ("D".to_string(), 4.0),
        ];
        let top = top_n(entries, 2, true);
        assert_eq!(top, vec![("B".to_string(), 5.0), ("D".to_string(), 4.0)]);
    }

    #[test]
    fn test_top_n_stable_on_ties() {
        let entries = vec![
            ("A".to_string(), 2.0),
            ("B".to_string(), 2.0),
            ("C".to_string(), 2.0),
        ];
        let top = top_n(entries, 2, true);
        assert_eq!(top, vec![("A".to_string(), 2.0), ("B".to_string(), 2.0)]);
    }

    #[test]
    fn test_top_n_ascending() {
        let entries = vec![("A".to_string(), 2.0), ("B".to_string(), 1.0)];
        let bottom = top_n(entries, 1, false);
        assert_eq!(bottom, vec![("B".to_string(), 1.0)]);
    }

    #[test]
    fn test_top_n_shorter_than_n() {
        let entries = vec![("A".to_string(), 2.0)];
        let top = top_n(entries, 10, true);
        assert_eq!(top.len(), 1);
    }
}
