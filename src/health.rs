use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::content::application::ports::incoming::use_cases::LoadContentError;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    status: &'static str,
    /// RFC 3339 timestamp of this probe
    timestamp: String,
    data_counts: DataCounts,
    /// Whether the contact transport has credentials
    email_configured: bool,
}

#[derive(Serialize, ToSchema)]
pub struct DataCounts {
    experience: usize,
    projects: usize,
}

#[derive(Serialize, ToSchema)]
pub struct UnhealthyResponse {
    #[schema(example = "unhealthy")]
    status: &'static str,
}

/// HEALTH PROBE
/// - Proves a full content reload works
/// - Counts come from that same reload, never a second one
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Content reload failing", body = UnhealthyResponse)
    )
)]
#[get("/api/health")]
pub async fn health(data: web::Data<AppState>) -> impl Responder {
    match data.load_content.execute().await {
        Ok(snapshot) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy",
            timestamp: Utc::now().to_rfc3339(),
            data_counts: DataCounts {
                experience: snapshot.experience.len(),
                projects: snapshot.projects.len(),
            },
            email_configured: data.email_configured,
        }),

        Err(LoadContentError::ValidationFailed(msg)) => {
            error!(error = %msg, "Health check could not load content");
            HttpResponse::ServiceUnavailable().json(UnhealthyResponse {
                status: "unhealthy",
            })
        }
    }
}
