use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use partdash_views::PartViewBuilder;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_parts))
        .route("/:part_number", get(get_part_view))
}

/// Selection-list options, ascending by part number.
pub async fn list_parts(Extension(builder): Extension<PartViewBuilder>) -> impl IntoResponse {
    let options: Vec<dto::PartOptionResponse> = builder
        .catalog()
        .list_sorted_by_key()
        .into_iter()
        .map(dto::PartOptionResponse::from)
        .collect();
    Json(options)
}

pub async fn get_part_view(
    Extension(builder): Extension<PartViewBuilder>,
    Path(part_number): Path<String>,
) -> axum::response::Response {
    match builder.build_view(&part_number) {
        Ok(view) => Json(dto::PartViewResponse::from(view)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
