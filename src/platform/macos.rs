// SecureVault platform support for macOS
// Config:    ~/Library/Application Support/SecureVault
// Clipboard: pbcopy

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for SecureVault on macOS.
/// `~/Library/Application Support/SecureVault`
pub fn get_config_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join("SecureVault")
}

pub fn clipboard_command() -> Vec<String> {
    vec!["pbcopy".to_string()]
}
