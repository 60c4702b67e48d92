use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use partdash_inventory::{PartRecord, PartSummary};
use partdash_views::PartViewBuilder;

pub fn router() -> Router {
    Router::new().route("/:supplier/parts", get(list_supplier_parts))
}

/// Parts from one supplier in catalog order; `[]` for an unknown supplier.
pub async fn list_supplier_parts(
    Extension(builder): Extension<PartViewBuilder>,
    Path(supplier): Path<String>,
) -> impl IntoResponse {
    let parts: Vec<PartSummary> = builder
        .catalog()
        .find_by_supplier(&supplier)
        .into_iter()
        .map(PartRecord::summary)
        .collect();
    Json(parts)
}
