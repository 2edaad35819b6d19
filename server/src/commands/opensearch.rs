//! OpenSearch descriptor endpoint

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::state::AppState;

/// `GET /opensearch.xml`
pub async fn descriptor(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/opensearchdescription+xml"),
            (header::CACHE_CONTROL, "public, max-age=0, must-revalidate"),
        ],
        state.unduck.opensearch_descriptor(),
    )
}
