use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::content::application::ports::incoming::use_cases::LoadContentError;
use crate::shared::api::{ApiFailure, ApiResponse};
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ReloadResponse {
    /// Always "reloaded" on success
    #[schema(example = "reloaded")]
    pub status: &'static str,
    pub data_counts: ReloadCounts,
}

#[derive(Serialize, ToSchema)]
pub struct ReloadCounts {
    pub experience: usize,
    pub projects: usize,
}

/// Development helper: forces a reload and reports what was loaded. Only
/// registered when DEBUG is on.
#[utoipa::path(
    post,
    path = "/api/reload",
    tag = "content",
    responses(
        (status = 200, description = "Content reloaded from the source", body = inline(ApiResponse<ReloadResponse>)),
        (status = 500, description = "Content failed validation", body = ApiFailure)
    )
)]
#[post("/api/reload")]
pub async fn reload_content_handler(data: web::Data<AppState>) -> impl Responder {
    match data.load_content.execute().await {
        Ok(snapshot) => {
            info!(
                experience = snapshot.experience.len(),
                projects = snapshot.projects.len(),
                "Content reloaded"
            );
            ApiResponse::success(ReloadResponse {
                status: "reloaded",
                data_counts: ReloadCounts {
                    experience: snapshot.experience.len(),
                    projects: snapshot.projects.len(),
                },
            })
        }

        Err(LoadContentError::ValidationFailed(msg)) => {
            error!(error = %msg, "Reload failed validation");
            ApiFailure::internal_error()
        }
    }
}
