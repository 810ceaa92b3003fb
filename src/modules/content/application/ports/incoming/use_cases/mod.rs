mod load_content;

pub use load_content::{LoadContentError, LoadContentUseCase};
