// src/shared/api/json_config.rs
use crate::shared::api::ApiFailure;
use actix_web::web::JsonConfig;

/// Maps JSON body extraction failures to the same 400 shape the contact
/// pipeline uses for field-level rejections.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiFailure::invalid_input(&message),
        )
        .into()
    })
}
