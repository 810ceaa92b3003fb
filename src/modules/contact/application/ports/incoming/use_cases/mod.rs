mod submit_contact;

pub use submit_contact::{
    SubmissionOutcome, SubmitContactError, SubmitContactInput, SubmitContactUseCase,
};
