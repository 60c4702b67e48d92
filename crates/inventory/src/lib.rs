//! Part catalog (read-only inventory store).
//!
//! This crate owns the fixed set of part records and answers lookups,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod dataset;
pub mod part;

pub use catalog::Catalog;
pub use dataset::standard_catalog;
pub use part::{PartRecord, PartRow, PartSummary};
