//! Part view model builder.
//!
//! Turns a selected part number into every derived display value: title,
//! yield/inventory tiers, chart series and supplier roster. Rendering (icons,
//! colours, charts, lists) is left to the caller; nothing here depends on a
//! UI or HTTP type.

pub mod builder;
pub mod part_view;
pub mod tier;

pub use builder::{PartViewBuilder, build_view};
pub use part_view::{InventorySlice, PartView};
pub use tier::{
    INVENTORY_GOOD_ABOVE, INVENTORY_WARN_ABOVE, Tier, YIELD_GOOD_MIN_PCT, YIELD_WARN_MIN_PCT,
    classify_inventory, classify_yield, format_yield,
};
