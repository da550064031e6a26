// Submodules
pub mod common;  // Shared multipart reading and submission runner
pub mod health;  // Health check endpoint

// Comparison endpoints
pub mod form;
pub mod compare;

// Re-exports
pub use health::health_check;
pub use form::{show_form, submit_form};
pub use compare::{compare, status_for};
