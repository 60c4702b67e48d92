use serde::Serialize;

use partdash_core::PartNumber;
use partdash_inventory::PartSummary;
use partdash_views::PartView;

// -------------------------
// Response DTOs
// -------------------------

/// Selection-list entry.
#[derive(Debug, Serialize)]
pub struct PartOptionResponse {
    pub part_number: PartNumber,
    pub description: String,
    pub label: String,
}

impl From<PartSummary> for PartOptionResponse {
    fn from(summary: PartSummary) -> Self {
        let label = summary.label();
        Self {
            part_number: summary.part_number,
            description: summary.description,
            label,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BreakdownShare {
    pub label: &'static str,
    pub percent: f64,
}

/// The view model plus chart percentages.
#[derive(Debug, Serialize)]
pub struct PartViewResponse {
    #[serde(flatten)]
    pub view: PartView,
    pub breakdown_shares: Vec<BreakdownShare>,
}

impl From<PartView> for PartViewResponse {
    fn from(view: PartView) -> Self {
        let breakdown_shares = view
            .breakdown_shares()
            .into_iter()
            .map(|(label, percent)| BreakdownShare { label, percent })
            .collect();
        Self {
            view,
            breakdown_shares,
        }
    }
}
