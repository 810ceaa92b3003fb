use actix_web::{get, web, Responder};
use tracing::error;

use crate::content::application::domain::entities::Profile;
use crate::content::application::ports::incoming::use_cases::LoadContentError;
use crate::shared::api::{ApiFailure, ApiResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "content",
    responses(
        (status = 200, description = "Current profile record", body = inline(ApiResponse<Profile>)),
        (status = 500, description = "Content failed validation", body = ApiFailure)
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.load_content.execute().await {
        Ok(snapshot) => ApiResponse::success(snapshot.profile),

        Err(LoadContentError::ValidationFailed(msg)) => {
            error!(error = %msg, "Profile response failed validation");
            ApiFailure::internal_error()
        }
    }
}
