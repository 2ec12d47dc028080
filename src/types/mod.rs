// Tabbrowser shared type definitions
// Each submodule defines types used across the application.

pub mod download;
pub mod errors;
pub mod event;
pub mod settings;
pub mod tab;
pub mod user_data;
