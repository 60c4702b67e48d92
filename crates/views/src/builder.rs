//! One-shot derivation of a [`PartView`] from the catalog.

use std::sync::Arc;

use partdash_core::DomainResult;
use partdash_inventory::{Catalog, PartRecord};

use crate::part_view::{CM1_LABEL, CM2_LABEL, InventorySlice, OEM_LABEL, PartView};
use crate::tier::{classify_inventory, classify_yield, format_yield};

/// Build the view model for `part_number`.
///
/// Pure function of the catalog and the key. A missing key fails with the
/// catalog's `NotFound` unchanged; otherwise every field is populated.
pub fn build_view(catalog: &Catalog, part_number: &str) -> DomainResult<PartView> {
    let record = catalog.get(part_number)?;

    let same_supplier = catalog.find_by_supplier(record.supplier());
    let supplier_peer_count = same_supplier.len();
    let supplier_peers = same_supplier
        .into_iter()
        .filter(|r| r.part_number() != record.part_number())
        .map(PartRecord::summary)
        .collect();

    tracing::debug!(
        part_number,
        supplier = record.supplier(),
        supplier_peer_count,
        "part view built"
    );

    Ok(PartView {
        part_number: record.part_number().clone(),
        description: record.description().to_string(),
        title: record.summary().label(),
        yield_label: format_yield(record.yield_pct()),
        yield_tier: classify_yield(record.yield_pct()),
        total_inventory_label: record.total_inventory().to_string(),
        inventory_tier: classify_inventory(record.total_inventory()),
        inventory_breakdown: breakdown(record),
        supplier: record.supplier().to_string(),
        supplier_peer_count,
        supplier_peers,
    })
}

fn breakdown(record: &PartRecord) -> [InventorySlice; 3] {
    [
        InventorySlice {
            label: CM1_LABEL,
            value: record.inventory_cm1(),
        },
        InventorySlice {
            label: CM2_LABEL,
            value: record.inventory_cm2(),
        },
        InventorySlice {
            label: OEM_LABEL,
            value: record.inventory_oem(),
        },
    ]
}

/// Shared, read-only handle for building views from many callers at once.
#[derive(Debug, Clone)]
pub struct PartViewBuilder {
    catalog: Arc<Catalog>,
}

impl PartViewBuilder {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn build_view(&self, part_number: &str) -> DomainResult<PartView> {
        build_view(&self.catalog, part_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;
    use partdash_core::DomainError;
    use partdash_inventory::standard_catalog;
    use proptest::prelude::*;

    fn test_builder() -> PartViewBuilder {
        PartViewBuilder::new(Arc::new(standard_catalog().unwrap()))
    }

    #[test]
    fn flipper_view_end_to_end() {
        let view = test_builder().build_view("E2084-66501").unwrap();

        assert_eq!(view.title, "E2084-66501 - Motorized Flipper");
        assert_eq!(view.yield_label, "99.7%");
        assert_eq!(view.yield_tier, Tier::Good);
        assert_eq!(view.total_inventory_label, "3325");
        assert_eq!(view.inventory_tier, Tier::Good);
        assert_eq!(
            view.inventory_breakdown,
            [
                InventorySlice { label: "CM #1", value: 1379 },
                InventorySlice { label: "CM #2", value: 1694 },
                InventorySlice { label: "OEM", value: 252 },
            ]
        );
        assert_eq!(view.supplier, "McDonalds");
        assert_eq!(view.supplier_peer_count, 7);
    }

    #[test]
    fn missing_oem_presents_as_zero() {
        let view = test_builder().build_view("E2085-66520").unwrap();

        assert_eq!(view.total_inventory_label, "0");
        assert_eq!(view.inventory_tier, Tier::Bad);
        assert_eq!(view.inventory_breakdown[2], InventorySlice { label: "OEM", value: 0 });
        assert_eq!(view.yield_label, "100.0%");
    }

    #[test]
    fn quiznos_peers_exclude_selected_part() {
        let view = test_builder().build_view("E2084-67600").unwrap();

        assert_eq!(view.supplier_peer_count, 5);
        let peers: Vec<_> = view
            .supplier_peers
            .iter()
            .map(|p| p.part_number.as_str())
            .collect();
        assert_eq!(
            peers,
            vec!["E2081-61116", "E2081-61120", "E2084-61101", "E2084-67920"]
        );
    }

    #[test]
    fn sole_supplier_part_has_no_peers() {
        let view = test_builder().build_view("E2084-64400").unwrap();
        assert_eq!(view.supplier, "Subway");
        assert_eq!(view.supplier_peer_count, 1);
        assert!(view.supplier_peers.is_empty());
    }

    #[test]
    fn warn_tiers_from_dataset() {
        let actuator = test_builder().build_view("E2084-61101").unwrap();
        assert_eq!(actuator.yield_label, "98.0%");
        assert_eq!(actuator.yield_tier, Tier::Warn);

        let card = test_builder().build_view("E2084-67960").unwrap();
        assert_eq!(card.yield_tier, Tier::Bad);

        // 30 + 8 + 2
        let pump = test_builder().build_view("E2084-64400").unwrap();
        assert_eq!(pump.total_inventory_label, "40");
        assert_eq!(pump.inventory_tier, Tier::Warn);
    }

    #[test]
    fn unknown_part_propagates_not_found() {
        let err = test_builder().build_view("E0000-00000").unwrap_err();
        assert_eq!(err, DomainError::NotFound("E0000-00000".to_string()));
    }

    #[test]
    fn builder_is_shareable_across_threads() {
        let builder = test_builder();
        let handles: Vec<_> = ["E2081-66555", "E3065-66504", "E2084-67927"]
            .into_iter()
            .map(|pn| {
                let builder = builder.clone();
                std::thread::spawn(move || builder.build_view(pn).map(|v| v.title))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    }

    #[test]
    fn every_catalog_part_builds_consistently() {
        let builder = test_builder();
        for record in builder.catalog().iter() {
            let view = builder.build_view(record.part_number().as_str()).unwrap();
            assert_eq!(view.supplier_peer_count, view.supplier_peers.len() + 1);
            assert!(
                view.supplier_peers
                    .iter()
                    .all(|p| &p.part_number != record.part_number())
            );
            let sum: u64 = view
                .inventory_breakdown
                .iter()
                .map(|s| u64::from(s.value))
                .sum();
            assert_eq!(view.total_inventory_label, sum.to_string());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: keys outside the catalog always fail with NotFound.
        #[test]
        fn unknown_keys_are_not_found(key in "[A-Za-z0-9 -]{0,16}") {
            let builder = test_builder();
            prop_assume!(!builder.catalog().contains(&key));
            let err = builder.build_view(&key).unwrap_err();
            prop_assert!(err.is_not_found());
        }
    }
}
