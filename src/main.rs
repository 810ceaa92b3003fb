pub mod modules;
pub use modules::contact;
pub use modules::content;
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::config::AppConfig;
use crate::contact::adapter::outgoing::smtp_sender::{MailConfig, SmtpEmailSender};
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::contact::application::ports::outgoing::email_sender::EmailSender;
use crate::contact::application::service::submit_contact_service::SubmitContactService;
use crate::content::adapter::outgoing::json_file_source::JsonFileContentSource;
use crate::content::application::ports::incoming::use_cases::LoadContentUseCase;
use crate::content::application::service::load_content_service::LoadContentService;
use crate::shared::api::custom_json_config;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub load_content: Arc<dyn LoadContentUseCase + Send + Sync>,
    pub submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    /// Mirrors whether the SMTP adapter was built; reported by /api/health.
    pub email_configured: bool,
    /// When true, a failed delivery is reported to the submitter as a
    /// soft-success instead of a 500.
    pub suppress_delivery_failure: bool,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env();

    let default_filter = if config.debug {
        "debug,actix_web=info"
    } else {
        "info,actix_web=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API...");

    // Content store: re-reads the file on every request, so edits to the
    // content document go live without a restart.
    let load_content = LoadContentService::new(JsonFileContentSource::new(&config.content_path));

    // SMTP SETUP
    let mail_config = MailConfig::from_env();
    let email_configured = mail_config.is_some();

    let submit_contact = match &mail_config {
        Some(mail) => {
            let sender: Arc<dyn EmailSender + Send + Sync> =
                Arc::new(SmtpEmailSender::new(mail).expect("Invalid SMTP relay host"));
            SubmitContactService::new(sender, &mail.to_email)
        }
        None => {
            warn!("SMTP credentials not set, contact form delivery is disabled");
            SubmitContactService::unconfigured()
        }
    };

    let state = AppState {
        load_content: Arc::new(load_content),
        submit_contact: Arc::new(submit_contact),
        email_configured,
        suppress_delivery_failure: config.suppress_delivery_failure,
    };

    let server_url = format!("{}:{}", config.host, config.port);
    info!("Server run on: {}", server_url);

    let cors_origins = config.cors_allowed_origins.clone();
    let debug = config.debug;

    HttpServer::new(move || {
        let cors = if cors_origins.iter().any(|origin| origin == "*") {
            // Wildcard is an explicit opt-in via CORS_ALLOWED_ORIGINS="*"
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allow_any_header()
        } else {
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allow_any_header()
                .supports_credentials();
            for origin in &cors_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        let mut app = App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes);

        // Dev-only surfaces
        if debug {
            app = app
                .service(crate::content::adapter::incoming::web::routes::reload_content_handler)
                .service(
                    SwaggerUi::new("/docs/{_:.*}")
                        .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
                );
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_projects_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
