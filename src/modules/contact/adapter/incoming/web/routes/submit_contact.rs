use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::contact::application::ports::incoming::use_cases::{
    SubmissionOutcome, SubmitContactError, SubmitContactInput,
};
use crate::shared::api::{ApiFailure, ApiResponse};
use crate::AppState;

const DELIVERED_MESSAGE: &str =
    "Thank you for your message! I'll get back to you within 24 hours.";
const RECEIVED_MESSAGE: &str = "Your message has been received! I'll get back to you soon.";

/// Request body for a contact-form submission
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ContactRequest {
    /// Sender's display name
    #[schema(example = "Jane Doe")]
    pub name: String,

    /// Sender's reply address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Message body
    #[schema(example = "Hi, I'd like to get in touch about...")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    /// User-facing confirmation
    #[schema(example = "Thank you for your message! I'll get back to you within 24 hours.")]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submission accepted", body = inline(ApiResponse<ContactResponse>)),
        (status = 400, description = "Missing or malformed fields", body = ApiFailure),
        (status = 500, description = "Transport unavailable or delivery failed", body = ApiFailure)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    body: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();
    let input = SubmitContactInput {
        name: request.name,
        email: request.email,
        message: request.message,
    };

    match data.submit_contact.execute(input).await {
        Ok(SubmissionOutcome::Delivered) => ApiResponse::success(ContactResponse {
            message: DELIVERED_MESSAGE.to_string(),
        }),

        // The pipeline already logged the raw failure; the policy flag
        // decides whether the submitter sees it.
        Ok(SubmissionOutcome::DeliveryFailed) => {
            if data.suppress_delivery_failure {
                ApiResponse::success(ContactResponse {
                    message: RECEIVED_MESSAGE.to_string(),
                })
            } else {
                ApiFailure::delivery_failed(
                    "An error occurred while sending your message. Please try again.",
                )
            }
        }

        Err(SubmitContactError::InvalidInput(msg)) => {
            warn!(error = %msg, "Contact submission rejected");
            ApiFailure::invalid_input(&msg)
        }

        Err(SubmitContactError::NotConfigured) => {
            error!("Contact submission received but mail transport is not configured");
            ApiFailure::service_unavailable(
                "The contact form is temporarily unavailable. Please try again later.",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::MockSubmitContactUseCase;

    fn contact_body() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "Hello!"
        })
    }

    #[actix_web::test]
    async fn test_submit_contact_delivered() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(MockSubmitContactUseCase::outcome(
                SubmissionOutcome::Delivered,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(contact_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["message"], DELIVERED_MESSAGE);
    }

    #[actix_web::test]
    async fn test_submit_contact_invalid_input_bad_request() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(MockSubmitContactUseCase::error(
                SubmitContactError::InvalidInput("Invalid email format".to_string()),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(contact_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[actix_web::test]
    async fn test_submit_contact_not_configured_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(MockSubmitContactUseCase::error(
                SubmitContactError::NotConfigured,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(contact_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    }

    #[actix_web::test]
    async fn test_delivery_failure_masked_when_policy_suppresses() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(MockSubmitContactUseCase::outcome(
                SubmissionOutcome::DeliveryFailed,
            ))
            .with_suppress_delivery_failure(true)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(contact_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["message"], RECEIVED_MESSAGE);
    }

    #[actix_web::test]
    async fn test_delivery_failure_surfaced_when_policy_strict() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(MockSubmitContactUseCase::outcome(
                SubmissionOutcome::DeliveryFailed,
            ))
            .with_suppress_delivery_failure(false)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(contact_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "DELIVERY_FAILED");
    }

    #[actix_web::test]
    async fn test_malformed_body_rejected_by_json_config() {
        let app_state = TestAppStateBuilder::default()
            .with_submit_contact(MockSubmitContactUseCase::outcome(
                SubmissionOutcome::Delivered,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Jane" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }
}
