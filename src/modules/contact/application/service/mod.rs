pub mod submit_contact_service;
