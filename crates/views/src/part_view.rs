use serde::Serialize;

use partdash_core::PartNumber;
use partdash_inventory::PartSummary;

use crate::tier::Tier;

pub const CM1_LABEL: &str = "CM #1";
pub const CM2_LABEL: &str = "CM #2";
pub const OEM_LABEL: &str = "OEM";

/// One inventory source and its stock; a chart series point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySlice {
    pub label: &'static str,
    pub value: u32,
}

/// Fully derived, rendering-agnostic display values for one selected part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartView {
    pub part_number: PartNumber,
    pub description: String,
    /// `"{part_number} - {description}"`.
    pub title: String,
    pub yield_label: String,
    pub yield_tier: Tier,
    pub total_inventory_label: String,
    pub inventory_tier: Tier,
    /// Always `[CM #1, CM #2, OEM]`, in that order.
    pub inventory_breakdown: [InventorySlice; 3],
    pub supplier: String,
    /// Parts from `supplier`, the selected one included.
    pub supplier_peer_count: usize,
    /// Other parts from `supplier`, in catalog order; never the selected part.
    pub supplier_peers: Vec<PartSummary>,
}

impl PartView {
    /// Percentage of the total held by each breakdown slice.
    ///
    /// All shares are zero when the part has no stock at all.
    pub fn breakdown_shares(&self) -> Vec<(&'static str, f64)> {
        let total: u64 = self
            .inventory_breakdown
            .iter()
            .map(|s| u64::from(s.value))
            .sum();

        self.inventory_breakdown
            .iter()
            .map(|s| {
                let share = if total == 0 {
                    0.0
                } else {
                    f64::from(s.value) * 100.0 / total as f64
                };
                (s.label, share)
            })
            .collect()
    }
}
