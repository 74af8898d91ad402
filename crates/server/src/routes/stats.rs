use axum::{extract::State, Json};

use service::stats::{compute_dashboard_stats, DashboardStats};

use crate::errors::JsonApiError;
use crate::metrics::STATS_REQUESTS_TOTAL;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/stats", tag = "stats",
    responses(
        (status = 200, description = "Dashboard snapshot", body = crate::openapi::DashboardStatsDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardStats>, JsonApiError> {
    STATS_REQUESTS_TOTAL.inc();
    let stats = compute_dashboard_stats(&state.db).await?;
    Ok(Json(stats))
}
