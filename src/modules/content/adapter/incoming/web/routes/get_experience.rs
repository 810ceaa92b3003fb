use actix_web::{get, web, Responder};
use tracing::error;

use crate::content::application::domain::entities::Experience;
use crate::content::application::ports::incoming::use_cases::LoadContentError;
use crate::shared::api::{ApiFailure, ApiResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "content",
    responses(
        (status = 200, description = "Work experience, in narrative order", body = inline(ApiResponse<Vec<Experience>>)),
        (status = 500, description = "Content failed validation", body = ApiFailure)
    )
)]
#[get("/api/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> impl Responder {
    match data.load_content.execute().await {
        Ok(snapshot) => ApiResponse::success(snapshot.experience),

        Err(LoadContentError::ValidationFailed(msg)) => {
            error!(error = %msg, "Experience response failed validation");
            ApiFailure::internal_error()
        }
    }
}
