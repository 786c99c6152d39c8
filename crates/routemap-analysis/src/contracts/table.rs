//! Route table: last-writer-wins deduplication keyed by (method, path),
//! iterated in ascending key order.

use std::collections::BTreeMap;

use routemap_core::types::RouteRecord;

/// Deduplicated, sorted collection of discovered routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeMap<(&'static str, String), RouteRecord>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier one with the same method and
    /// path. Returns the replaced record.
    pub fn insert(&mut self, record: RouteRecord) -> Option<RouteRecord> {
        let key = (record.method.as_str(), record.path.clone());
        self.routes.insert(key, record)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Records sorted by method name, then path.
    pub fn records(&self) -> impl Iterator<Item = &RouteRecord> {
        self.routes.values()
    }

    /// Single-line JSON array of `{method, path, source}` objects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records().collect::<Vec<_>>())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records().collect::<Vec<_>>())
    }
}

impl Extend<RouteRecord> for RouteTable {
    fn extend<I: IntoIterator<Item = RouteRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<RouteRecord> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RouteRecord>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        table.extend(iter);
        table
    }
}
