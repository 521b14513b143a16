// SecureVault services
// Services provide core functionality: secure randomness, password generation, clipboard, notifications, settings.

pub mod clipboard;
pub mod crypto_service;
pub mod notifications;
pub mod password_generator;
pub mod settings_engine;
