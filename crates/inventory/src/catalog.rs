//! Catalog store: the fixed, ordered set of part records.

use std::collections::HashMap;

use partdash_core::{DomainError, DomainResult, Entity, PartNumber};

use crate::part::{PartRecord, PartRow, PartSummary};

/// Ordered, read-only collection of [`PartRecord`]s keyed by part number.
///
/// Built once at startup; there is no mutation API, so a shared reference
/// (or `Arc<Catalog>`) can be read from any number of threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PartRecord>,
    index: HashMap<PartNumber, usize>,
}

impl Catalog {
    /// Build a catalog from source rows, keeping their order.
    ///
    /// Fails on the first invalid row or duplicate part number.
    pub fn from_rows(rows: impl IntoIterator<Item = PartRow>) -> DomainResult<Self> {
        let mut records = Vec::new();
        let mut index = HashMap::new();

        for row in rows {
            let record = PartRecord::from_row(row)?;
            let key = record.id().clone();
            if index.contains_key(&key) {
                return Err(DomainError::conflict(format!("duplicate part number {key}")));
            }
            index.insert(key, records.len());
            records.push(record);
        }

        tracing::debug!(records = records.len(), "part catalog loaded");

        Ok(Self { records, index })
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, part_number: &str) -> DomainResult<&PartRecord> {
        self.index
            .get(part_number)
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| DomainError::not_found(part_number))
    }

    pub fn contains(&self, part_number: &str) -> bool {
        self.index.contains_key(part_number)
    }

    /// Selection-list entries, ascending by part number.
    pub fn list_sorted_by_key(&self) -> Vec<PartSummary> {
        let mut out: Vec<PartSummary> = self.records.iter().map(PartRecord::summary).collect();
        out.sort_by(|a, b| a.part_number.cmp(&b.part_number));
        out
    }

    /// All records from `supplier`, in insertion order. Empty when none match.
    pub fn find_by_supplier(&self, supplier: &str) -> Vec<&PartRecord> {
        self.records
            .iter()
            .filter(|r| r.supplier() == supplier)
            .collect()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PartRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
