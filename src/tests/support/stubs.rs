use async_trait::async_trait;

use crate::contact::application::ports::incoming::use_cases::{
    SubmissionOutcome, SubmitContactError, SubmitContactInput, SubmitContactUseCase,
};
use crate::content::application::domain::entities::{ContentSnapshot, Experience, Project};
use crate::content::application::ports::incoming::use_cases::{
    LoadContentError, LoadContentUseCase,
};

/* --------------------------------------------------
 * Fixtures
 * -------------------------------------------------- */

/// Fallback profile plus one experience and one project, for route tests
/// that need non-empty lists.
pub fn sample_snapshot() -> ContentSnapshot {
    let mut snapshot = ContentSnapshot::fallback();

    snapshot.experience = vec![Experience {
        role: "Software Engineering Intern".to_string(),
        company: "Capital One".to_string(),
        duration: "Jun 2025 - Aug 2025".to_string(),
        location: "McLean, VA".to_string(),
        description: vec![
            "Built synthetic monitoring.".to_string(),
            "Shipped dockerized services.".to_string(),
        ],
    }];

    snapshot.projects = vec![Project {
        title: "Portfolio Website".to_string(),
        github_link: Some("https://github.com/arjunbojja1/portfolio".to_string()),
        external_link: Some("https://arjunbojja.dev".to_string()),
        technologies: Some(vec!["React".to_string(), "Rust".to_string()]),
        description: vec!["Built the site.".to_string()],
        challenge: None,
    }];

    snapshot
}

/* --------------------------------------------------
 * Stub / mock use cases
 * -------------------------------------------------- */

/// Default stub: panics if a test exercises a route it did not arrange.
pub struct UnusedLoadContentUseCase;

#[async_trait]
impl LoadContentUseCase for UnusedLoadContentUseCase {
    async fn execute(&self) -> Result<ContentSnapshot, LoadContentError> {
        unimplemented!("load content not arranged in this test")
    }
}

pub struct UnusedSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for UnusedSubmitContactUseCase {
    async fn execute(
        &self,
        _input: SubmitContactInput,
    ) -> Result<SubmissionOutcome, SubmitContactError> {
        unimplemented!("submit contact not arranged in this test")
    }
}

#[derive(Clone)]
pub struct MockLoadContentUseCase {
    result: Result<ContentSnapshot, LoadContentError>,
}

impl MockLoadContentUseCase {
    pub fn success(snapshot: ContentSnapshot) -> Self {
        Self {
            result: Ok(snapshot),
        }
    }

    pub fn fallback() -> Self {
        Self::success(ContentSnapshot::fallback())
    }

    pub fn error(err: LoadContentError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl LoadContentUseCase for MockLoadContentUseCase {
    async fn execute(&self) -> Result<ContentSnapshot, LoadContentError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct MockSubmitContactUseCase {
    result: Result<SubmissionOutcome, SubmitContactError>,
}

impl MockSubmitContactUseCase {
    pub fn outcome(outcome: SubmissionOutcome) -> Self {
        Self {
            result: Ok(outcome),
        }
    }

    pub fn error(err: SubmitContactError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl SubmitContactUseCase for MockSubmitContactUseCase {
    async fn execute(
        &self,
        _input: SubmitContactInput,
    ) -> Result<SubmissionOutcome, SubmitContactError> {
        self.result.clone()
    }
}
