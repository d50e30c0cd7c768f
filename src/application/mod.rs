/// Session lifecycle and authentication
pub mod auth;
/// Client exposing the data endpoints
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
