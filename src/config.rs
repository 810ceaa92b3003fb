use std::env;
use std::path::PathBuf;

/// Process-level settings. Mail transport settings live with the SMTP
/// adapter (`MailConfig`); everything else is read here once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub content_path: PathBuf,
    pub cors_allowed_origins: Vec<String>,
    pub suppress_delivery_failure: bool,
}

impl AppConfig {
    fn parse_bool(key: &str, default: bool) -> bool {
        match env::var(key) {
            Ok(value) => matches!(
                value.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ),
            Err(_) => default,
        }
    }

    /// Load application configuration from environment variables
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .unwrap_or_else(|_| panic!("Invalid PORT value"));

        let debug = Self::parse_bool("DEBUG", false);

        let content_path: PathBuf = env::var("CONTENT_PATH")
            .unwrap_or_else(|_| "content/portfolio.json".to_string())
            .into();

        // Local dev origins by default. A wildcard must be asked for
        // explicitly with CORS_ALLOWED_ORIGINS="*".
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let suppress_delivery_failure = Self::parse_bool("SUPPRESS_DELIVERY_FAILURE", true);

        Self {
            host,
            port,
            debug,
            content_path,
            cors_allowed_origins,
            suppress_delivery_failure,
        }
    }
}
