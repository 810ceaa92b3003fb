use serde_json::Value;

use crate::content::application::domain::entities::{
    ContentSnapshot, Experience, Profile, Project,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentValidationError {
    #[error("Missing section: {0}")]
    MissingSection(&'static str),

    #[error("Invalid {section} section: {detail}")]
    InvalidSection {
        section: &'static str,
        detail: String,
    },
}

//
// ──────────────────────────────────────────────────────────
// Validator
// ──────────────────────────────────────────────────────────
//

/// Shape gate between the hand-edited content document and the typed records
/// the API serves: required fields present with the right type, optional
/// fields absent/null or correctly typed. Values themselves are the editor's
/// business; a well-typed document is served exactly as written. A document
/// that fails here is rejected as a whole; no section is partially accepted.
pub struct ContentValidator;

impl ContentValidator {
    pub fn validate_document(document: &Value) -> Result<ContentSnapshot, ContentValidationError> {
        let profile_value = document
            .get("profile")
            .ok_or(ContentValidationError::MissingSection("profile"))?;

        // A profile that is not a mapping is indistinguishable from a broken
        // document, not a distinct error class.
        if !profile_value.is_object() {
            return Err(ContentValidationError::InvalidSection {
                section: "profile",
                detail: "expected a mapping".to_string(),
            });
        }

        let profile: Profile = serde_json::from_value(profile_value.clone()).map_err(|e| {
            ContentValidationError::InvalidSection {
                section: "profile",
                detail: e.to_string(),
            }
        })?;

        let experience_value = document
            .get("experience")
            .ok_or(ContentValidationError::MissingSection("experience"))?;
        let experience: Vec<Experience> = serde_json::from_value(experience_value.clone())
            .map_err(|e| ContentValidationError::InvalidSection {
                section: "experience",
                detail: e.to_string(),
            })?;

        let projects_value = document
            .get("projects")
            .ok_or(ContentValidationError::MissingSection("projects"))?;
        let projects: Vec<Project> = serde_json::from_value(projects_value.clone()).map_err(
            |e| ContentValidationError::InvalidSection {
                section: "projects",
                detail: e.to_string(),
            },
        )?;

        Ok(ContentSnapshot {
            profile,
            experience,
            projects,
        })
    }
}
