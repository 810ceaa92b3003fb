pub mod content_source;
