use crate::{dto::ZoneResultResponse, errors::ApiError, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, instrument, warn};

#[instrument(skip(state), name = "api_query_ip")]
pub async fn query_ip(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<Vec<ZoneResultResponse>>, ApiError> {
    debug!(zones = state.query_zones.zones().len(), "Checking address against RBL zones");

    let results = state.query_zones.execute(&ip).await.map_err(|e| {
        warn!(error = %e, "Rejected RBL query");
        e
    })?;

    Ok(Json(
        results.into_iter().map(ZoneResultResponse::from).collect(),
    ))
}
