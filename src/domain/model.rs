use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Expected number of columns in a customer record.
pub const COLUMN_COUNT: usize = 5;

/// Sentinel written to the invalid-row sink for missing or empty fields.
pub const MISSING_FIELD: &str = "null!";

/// Report ordering: ascending by domain name, or descending by count
/// with ties broken by ascending domain name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Domain,
    Count,
}

/// One attempted row from the input CSV, stamped with its 1-based row
/// number. Row 1 is the header and is never emitted. The `Err` arm carries
/// the parse error text for diagnostics only; control flow matches on the
/// variant, not the text.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub number: u64,
    pub fields: Result<Vec<String>, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

/// Mapping from email domain (case-sensitive) to occurrence count.
/// Grows monotonically during a pass; read-only afterwards.
#[derive(Debug, Default)]
pub struct DomainAggregate {
    counts: HashMap<String, u64>,
}

impl DomainAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty domains are never counted.
    pub fn increment(&mut self, domain: &str) {
        if domain.is_empty() {
            return;
        }
        *self.counts.entry(domain.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, domain: &str) -> u64 {
        self.counts.get(domain).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(domain, &count)| (domain.as_str(), count))
    }
}

/// One entry of the invalid-row sink: the row number plus the five raw
/// field values, sentinel-filled for whatever was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRow {
    pub number: u64,
    pub fields: [String; COLUMN_COUNT],
}

impl InvalidRow {
    /// Best-effort capture of a failing row. Fields beyond the expected
    /// five are dropped; missing or empty ones become the sentinel.
    pub fn from_partial(number: u64, fields: &[String]) -> Self {
        let mut padded: [String; COLUMN_COUNT] =
            std::array::from_fn(|_| MISSING_FIELD.to_string());
        for (slot, value) in padded.iter_mut().zip(fields) {
            if !value.is_empty() {
                *slot = value.clone();
            }
        }
        Self {
            number,
            fields: padded,
        }
    }
}

/// Output of one validation-and-aggregation pass.
#[derive(Debug)]
pub struct ImportResult {
    pub aggregate: DomainAggregate,
    pub invalid_rows: Vec<InvalidRow>,
    pub valid_rows: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_counts_per_domain() {
        let mut aggregate = DomainAggregate::new();
        aggregate.increment("github.io");
        aggregate.increment("github.io");
        aggregate.increment("360.cn");

        assert_eq!(aggregate.count("github.io"), 2);
        assert_eq!(aggregate.count("360.cn"), 1);
        assert_eq!(aggregate.count("unknown.org"), 0);
        assert_eq!(aggregate.len(), 2);
    }

    #[test]
    fn test_aggregate_ignores_empty_domain() {
        let mut aggregate = DomainAggregate::new();
        aggregate.increment("");
        assert!(aggregate.is_empty());
    }

    #[test]
    fn test_invalid_row_pads_missing_fields() {
        let row = InvalidRow::from_partial(7, &["Ann".to_string(), String::new()]);
        assert_eq!(row.number, 7);
        assert_eq!(
            row.fields,
            ["Ann", "null!", "null!", "null!", "null!"].map(String::from)
        );
    }

    #[test]
    fn test_invalid_row_drops_extra_fields() {
        let fields: Vec<String> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let row = InvalidRow::from_partial(2, &fields);
        assert_eq!(row.fields, ["a", "b", "c", "d", "e"].map(String::from));
    }
}
