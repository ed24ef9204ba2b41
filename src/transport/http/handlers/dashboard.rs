use crate::app::entity_store::DashboardStats;
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses((status = 200, description = "Dashboard counters", body = DashboardStats))
)]
pub async fn dashboard_stats_handler(State(state): State<AppState>) -> Json<DashboardStats> {
    let store = state.store.read().await;
    Json(store.dashboard_stats())
}
