use actix_web::{get, web, Responder};
use tracing::error;

use crate::content::application::domain::entities::Project;
use crate::content::application::ports::incoming::use_cases::LoadContentError;
use crate::shared::api::{ApiFailure, ApiResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    responses(
        (status = 200, description = "Portfolio projects", body = inline(ApiResponse<Vec<Project>>)),
        (status = 500, description = "Content failed validation", body = ApiFailure)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.load_content.execute().await {
        Ok(snapshot) => ApiResponse::success(snapshot.projects),

        Err(LoadContentError::ValidationFailed(msg)) => {
            error!(error = %msg, "Projects response failed validation");
            ApiFailure::internal_error()
        }
    }
}
