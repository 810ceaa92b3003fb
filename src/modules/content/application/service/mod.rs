pub mod load_content_service;
