use utoipa::OpenApi;

use crate::contact::adapter::incoming::web::routes::{ContactRequest, ContactResponse};
use crate::content::adapter::incoming::web::routes::{ReloadCounts, ReloadResponse};
use crate::content::application::domain::entities::{
    About, ContentSnapshot, Education, Experience, Profile, Project,
};
use crate::health::{DataCounts, HealthResponse, UnhealthyResponse};
use crate::shared::api::{ApiError, ApiFailure};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content and contact API for the personal portfolio site",
        contact(
            name = "Arjun Bojja",
            email = "arjunbojja1@gmail.com"
        )
    ),
    paths(
        // Content endpoints
        crate::content::adapter::incoming::web::routes::get_profile::get_profile_handler,
        crate::content::adapter::incoming::web::routes::get_experience::get_experience_handler,
        crate::content::adapter::incoming::web::routes::get_projects::get_projects_handler,
        crate::content::adapter::incoming::web::routes::reload_content::reload_content_handler,

        // Contact endpoint
        crate::contact::adapter::incoming::web::routes::submit_contact::submit_contact_handler,

        // Health
        crate::health::health,
    ),
    components(schemas(
        Profile,
        About,
        Education,
        Experience,
        Project,
        ContentSnapshot,
        ReloadResponse,
        ReloadCounts,
        ContactRequest,
        ContactResponse,
        HealthResponse,
        DataCounts,
        UnhealthyResponse,
        ApiFailure,
        ApiError,
    )),
    tags(
        (name = "content", description = "Portfolio content endpoints"),
        (name = "contact", description = "Contact form endpoint"),
        (name = "health", description = "Service health probe")
    )
)]
pub struct ApiDoc;
