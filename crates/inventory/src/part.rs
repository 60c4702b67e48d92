use serde::{Deserialize, Serialize};

use partdash_core::{DomainError, DomainResult, Entity, PartNumber};

/// One source row, as found in the fixed dataset.
///
/// `inventory_oem` may be absent; it is normalised to zero when the row is
/// turned into a [`PartRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRow {
    pub part_number: String,
    pub description: String,
    pub supplier: String,
    pub yield_pct: f64,
    pub inventory_cm1: u32,
    pub inventory_cm2: u32,
    pub inventory_oem: Option<u32>,
}

/// Immutable part record: one per physical part number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartRecord {
    part_number: PartNumber,
    description: String,
    supplier: String,
    yield_pct: f64,
    inventory_cm1: u32,
    inventory_cm2: u32,
    inventory_oem: u32,
    total_inventory: u64,
}

impl PartRecord {
    /// Validate a source row and derive the stored totals.
    pub fn from_row(row: PartRow) -> DomainResult<Self> {
        let part_number = PartNumber::new(row.part_number)?;

        if row.description.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "{part_number}: description cannot be empty"
            )));
        }
        if row.supplier.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "{part_number}: supplier cannot be empty"
            )));
        }
        if !row.yield_pct.is_finite() || !(0.0..=100.0).contains(&row.yield_pct) {
            return Err(DomainError::validation(format!(
                "{part_number}: yield {} outside 0..=100",
                row.yield_pct
            )));
        }

        let inventory_oem = row.inventory_oem.unwrap_or(0);
        let total_inventory =
            u64::from(row.inventory_cm1) + u64::from(row.inventory_cm2) + u64::from(inventory_oem);

        Ok(Self {
            part_number,
            description: row.description,
            supplier: row.supplier,
            yield_pct: row.yield_pct,
            inventory_cm1: row.inventory_cm1,
            inventory_cm2: row.inventory_cm2,
            inventory_oem,
            total_inventory,
        })
    }

    pub fn part_number(&self) -> &PartNumber {
        &self.part_number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn yield_pct(&self) -> f64 {
        self.yield_pct
    }

    pub fn inventory_cm1(&self) -> u32 {
        self.inventory_cm1
    }

    pub fn inventory_cm2(&self) -> u32 {
        self.inventory_cm2
    }

    /// OEM stock; zero when the source row had no value.
    pub fn inventory_oem(&self) -> u32 {
        self.inventory_oem
    }

    /// `inventory_cm1 + inventory_cm2 + inventory_oem`, fixed at construction.
    pub fn total_inventory(&self) -> u64 {
        self.total_inventory
    }

    pub fn summary(&self) -> PartSummary {
        PartSummary {
            part_number: self.part_number.clone(),
            description: self.description.clone(),
        }
    }
}

impl Entity for PartRecord {
    type Id = PartNumber;

    fn id(&self) -> &Self::Id {
        &self.part_number
    }
}

/// `(part_number, description)` pair used for selection lists and peer rosters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSummary {
    pub part_number: PartNumber,
    pub description: String,
}

impl PartSummary {
    /// Option text shown in a selection list: `"{part_number} - {description}"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.part_number, self.description)
    }
}
