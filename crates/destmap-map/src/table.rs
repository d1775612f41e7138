//! Exact-match key-to-country lookup tables.

use std::collections::HashMap;

use tracing::debug;

/// Immutable name-to-country mapping built once per run.
///
/// Lookups are exact string equality: no case folding, no trimming, no partial
/// matching. Duplicate keys in the source resolve last-occurrence-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryTable {
    entries: HashMap<String, String>,
}

impl CountryTable {
    /// Build a table from `(key, country)` pairs in source order.
    ///
    /// A key appearing more than once keeps the country of its last occurrence.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries = HashMap::new();
        let mut total = 0usize;
        for (key, country) in pairs {
            total += 1;
            entries.insert(key, country);
        }
        debug!(
            pairs = total,
            keys = entries.len(),
            "built country lookup table"
        );
        Self { entries }
    }

    /// Look up a key, exact match only.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(key, country)| ((*key).to_string(), (*country).to_string()))
            .collect()
    }

    #[test]
    fn builds_from_pairs() {
        let table = CountryTable::from_pairs(pairs(&[("Paris", "France"), ("Rome", "Italy")]));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Paris"), Some("France"));
        assert_eq!(table.get("Rome"), Some("Italy"));
    }

    #[test]
    fn duplicate_keys_last_occurrence_wins() {
        let table = CountryTable::from_pairs(pairs(&[
            ("Springfield", "USA"),
            ("Springfield", "Canada"),
        ]));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Springfield"), Some("Canada"));
    }

    #[test]
    fn lookup_is_exact() {
        let table = CountryTable::from_pairs(pairs(&[("Paris", "France")]));
        assert_eq!(table.get("paris"), None);
        assert_eq!(table.get("Paris "), None);
        assert_eq!(table.get(" Paris"), None);
        assert_eq!(table.get("Par"), None);
    }

    #[test]
    fn empty_table() {
        let table = CountryTable::from_pairs(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.get("anything"), None);
    }
}
