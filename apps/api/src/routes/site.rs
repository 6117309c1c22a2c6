use axum::Json;
use content::{Profile, Project};

/// GET /api/about
pub async fn handle_about() -> Json<Profile> {
    Json(content::profile())
}

/// GET /api/projects
pub async fn handle_projects() -> Json<Vec<Project>> {
    Json(content::projects())
}
