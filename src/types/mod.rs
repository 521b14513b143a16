// SecureVault shared type definitions
// Each submodule defines types used across the application.

pub mod credential;
pub mod errors;
pub mod generator;
pub mod notification;
pub mod settings;
pub mod view;
