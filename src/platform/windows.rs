// SecureVault platform support for Windows
// Config:    %APPDATA%/SecureVault
// Clipboard: clip.exe

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for SecureVault on Windows.
/// `%APPDATA%/SecureVault`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("SecureVault")
}

pub fn clipboard_command() -> Vec<String> {
    vec!["clip".to_string()]
}
