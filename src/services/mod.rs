pub mod account_service;
pub mod auth_service;
pub mod link_service;
pub mod note_service;
