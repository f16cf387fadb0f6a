//! The class registry: ordered records, deduplicated by name.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One class and the raw dependency tokens it declared.
///
/// `dependencies` is empty for placeholder records (names referenced on a
/// declaration line but never found as a scanned file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub dependencies: Vec<String>,
}

/// Ordered collection of ClassRecords with name-level deduplication.
///
/// Invariant: no two records share a name. The first record created for a
/// name wins; later inserts for the same name are dropped. Record order is
/// insertion order until `sort_by_name` runs, after which it is ordinal
/// (byte-wise) ascending, the order the matrix builder depends on.
pub struct Registry {
    records: Vec<ClassRecord>,
    /// O(1) name presence check alongside the ordered list.
    names: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Insert a record unless its name is already taken.
    ///
    /// Returns whether the record was inserted.
    pub fn insert(&mut self, record: ClassRecord) -> bool {
        if self.names.contains(&record.name) {
            log::debug!("dropping duplicate class record for {}", record.name);
            return false;
        }
        self.names.insert(record.name.clone());
        self.records.push(record);
        true
    }

    /// Insert an empty placeholder record for `name` if absent.
    ///
    /// Returns whether a new record was created.
    pub fn ensure_placeholder(&mut self, name: &str) -> bool {
        self.insert(ClassRecord {
            name: name.to_string(),
            dependencies: Vec::new(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Sort records by name, ordinal ascending.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn records(&self) -> &[ClassRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
