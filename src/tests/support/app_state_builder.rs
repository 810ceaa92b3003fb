use std::sync::Arc;

use actix_web::web;

use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::content::application::ports::incoming::use_cases::LoadContentUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    load_content: Arc<dyn LoadContentUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    email_configured: bool,
    suppress_delivery_failure: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            load_content: Arc::new(UnusedLoadContentUseCase),
            submit_contact: Arc::new(UnusedSubmitContactUseCase),
            email_configured: false,
            suppress_delivery_failure: true,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_load_content(
        mut self,
        use_case: impl LoadContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.load_content = Arc::new(use_case);
        self
    }

    pub fn with_submit_contact(
        mut self,
        use_case: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(use_case);
        self
    }

    pub fn with_email_configured(mut self, configured: bool) -> Self {
        self.email_configured = configured;
        self
    }

    pub fn with_suppress_delivery_failure(mut self, suppress: bool) -> Self {
        self.suppress_delivery_failure = suppress;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            load_content: self.load_content,
            submit_contact: self.submit_contact,
            email_configured: self.email_configured,
            suppress_delivery_failure: self.suppress_delivery_failure,
        })
    }
}
