/// Client configuration
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Authenticated session and request dispatch
pub mod session;
