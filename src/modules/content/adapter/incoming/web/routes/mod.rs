pub mod get_experience;
pub mod get_profile;
pub mod get_projects;
pub mod reload_content;

pub use get_experience::get_experience_handler;
pub use get_profile::get_profile_handler;
pub use get_projects::get_projects_handler;
pub use reload_content::{reload_content_handler, ReloadCounts, ReloadResponse};
