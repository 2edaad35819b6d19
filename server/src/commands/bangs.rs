//! Engine search for the default-engine picker

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::{reject, respond, CommandResponse};
use crate::state::AppState;

/// Most engines returned by one search.
const MAX_RESULTS: usize = 250;

#[derive(Debug, Deserialize)]
pub struct BangSearchParams {
    #[serde(default)]
    pub search: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BangInfo {
    pub token: String,
    pub name: String,
    pub domain: String,
    pub category: Option<String>,
}

impl From<&unduck_core::BangRecord> for BangInfo {
    fn from(record: &unduck_core::BangRecord) -> Self {
        Self {
            token: record.token.clone(),
            name: record.short_name.clone(),
            domain: record.domain.clone(),
            category: record.category.clone(),
        }
    }
}

/// `GET /api/bangs?search=...&limit=...`
pub async fn search_bangs(
    State(state): State<AppState>,
    params: Result<Query<BangSearchParams>, QueryRejection>,
) -> CommandResponse<Vec<BangInfo>> {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return reject(rejection),
    };
    let limit = params.limit.unwrap_or(MAX_RESULTS).min(MAX_RESULTS);
    let results = state
        .unduck
        .search_bangs(params.search.trim(), limit)
        .into_iter()
        .map(BangInfo::from)
        .collect();

    respond(Ok(results))
}
