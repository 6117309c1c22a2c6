use axum::Json;
use chrono::Utc;
use content::HealthStatus;

/// GET /health
/// Always succeeds; reports the current server time.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::ok_at(Utc::now()))
}
